//! External process execution.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use ytp_common::error::{YtpError, YtpResult};

use crate::command::ToolInvocation;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for process backends.
///
/// [`SystemRunner`] is the real implementation; tests substitute a recorder.
pub trait CommandRunner {
    /// Locate `program` on the search path. Paths containing a separator
    /// are checked directly.
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Run to completion, capturing stdout and stderr.
    fn run(&self, invocation: &ToolInvocation) -> YtpResult<ProcessOutput>;

    /// Start without waiting. The child is not tracked.
    fn spawn_detached(&self, invocation: &ToolInvocation) -> YtpResult<()>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn resolve_or_err(&self, program: &str) -> YtpResult<PathBuf> {
        self.resolve(program).ok_or_else(|| {
            YtpError::tool_not_found(
                format!("{program} is not on the search path"),
                vec![program.to_string()],
            )
        })
    }
}

impl CommandRunner for SystemRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        if program.is_empty() {
            return None;
        }
        which::which(program).ok()
    }

    fn run(&self, invocation: &ToolInvocation) -> YtpResult<ProcessOutput> {
        let program = self.resolve_or_err(&invocation.program)?;
        tracing::debug!(command = %invocation, "Running external tool");

        let started = std::time::Instant::now();
        let output = Command::new(&program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                YtpError::render(format!("Failed to run {}: {e}", invocation.program))
            })?;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if result.success() {
            tracing::info!(
                program = %invocation.program,
                elapsed_secs = started.elapsed().as_secs_f64(),
                "External tool finished"
            );
        } else {
            tracing::warn!(
                program = %invocation.program,
                exit_code = ?result.exit_code,
                "External tool exited unsuccessfully"
            );
        }
        Ok(result)
    }

    fn spawn_detached(&self, invocation: &ToolInvocation) -> YtpResult<()> {
        let program = self.resolve_or_err(&invocation.program)?;
        let child = Command::new(&program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                YtpError::render(format!("Failed to start {}: {e}", invocation.program))
            })?;
        tracing::info!(pid = child.id(), command = %invocation, "Started detached process");
        Ok(())
    }
}

/// Run `invocation` with the [`SystemRunner`].
pub fn run(invocation: &ToolInvocation) -> YtpResult<ProcessOutput> {
    SystemRunner.run(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        let invocation = ToolInvocation::new("ytp-definitely-not-installed-7f3a").arg("-h");
        let err = run(&invocation).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("ytp-definitely-not-installed-7f3a"));
    }

    #[test]
    fn test_empty_program_is_not_found() {
        let err = run(&ToolInvocation::new("")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported_not_raised() {
        let invocation =
            ToolInvocation::new("sh").args(["-c", "echo out; echo err >&2; exit 3"]);
        let output = run(&invocation).unwrap();
        assert_eq!(output.exit_code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_captures_stdout() {
        let output = run(&ToolInvocation::new("sh").args(["-c", "printf hello"])).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "hello");
        assert!(output.stderr.is_empty());
    }
}
