//! Render facade: builds commands for a job and hands them to a runner.

use std::path::{Path, PathBuf};

use ytp_common::error::{YtpError, YtpResult};
use ytp_project_model::job::RenderJob;

use crate::command::{build_concat_command, build_single_command, preview_clip_command};
use crate::preview::{resolve_previewer, Previewer};
use crate::runner::{CommandRunner, ProcessOutput, SystemRunner};

/// Default length of a rendered preview clip.
pub const DEFAULT_PREVIEW_SECONDS: u32 = 15;

/// Runs renders and previews for [`RenderJob`]s.
#[derive(Debug, Clone, Default)]
pub struct Generator<R = SystemRunner> {
    runner: R,
}

impl Generator<SystemRunner> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: CommandRunner> Generator<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Render one input with the job's effects.
    pub fn render(&self, input: &Path, output: &Path, job: &RenderJob) -> YtpResult<ProcessOutput> {
        ensure_parent(output)?;
        let cmd = build_single_command(input, output, job);
        tracing::info!(input = %input.display(), output = %output.display(), "Rendering");
        self.runner.run(&cmd)
    }

    /// Concatenate `inputs` and render the result with the job's effects.
    pub fn render_concat<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: &Path,
        job: &RenderJob,
    ) -> YtpResult<ProcessOutput> {
        ensure_parent(output)?;
        let cmd = build_concat_command(inputs, output, job)?;
        tracing::info!(
            inputs = inputs.len(),
            output = %output.display(),
            "Rendering concatenation"
        );
        self.runner.run(&cmd)
    }

    /// Single render for one input, concat render for several.
    pub fn render_sources<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: &Path,
        job: &RenderJob,
    ) -> YtpResult<ProcessOutput> {
        match inputs {
            [] => Err(YtpError::empty_inputs("render")),
            [single] => self.render(single.as_ref(), output, job),
            _ => self.render_concat(inputs, output, job),
        }
    }

    /// Render the first `seconds` of `input` to `<temp_dir>/preview.mp4`.
    /// `None` uses [`DEFAULT_PREVIEW_SECONDS`].
    pub fn render_preview_clip(
        &self,
        input: &Path,
        seconds: Option<u32>,
        job: &RenderJob,
    ) -> YtpResult<(PathBuf, ProcessOutput)> {
        let seconds = seconds.unwrap_or(DEFAULT_PREVIEW_SECONDS);
        let cmd = preview_clip_command(input, seconds, job);
        let clip = job.temp_dir().join(crate::command::PREVIEW_CLIP_NAME);
        ensure_parent(&clip)?;
        tracing::info!(input = %input.display(), seconds, "Rendering preview clip");
        let output = self.runner.run(&cmd)?;
        Ok((clip, output))
    }

    /// Open `input` in the first available previewer without waiting.
    pub fn preview(&self, input: &Path, job: &RenderJob) -> YtpResult<Previewer> {
        let previewer = resolve_previewer(&job.tool_paths, |name| self.runner.resolve(name))?;
        self.runner.spawn_detached(&previewer.invocation(input))?;
        Ok(previewer)
    }
}

/// Open `input` in the first available previewer on this system.
pub fn preview(input: &Path, job: &RenderJob) -> YtpResult<Previewer> {
    Generator::new().preview(input, job)
}

fn ensure_parent(path: &Path) -> YtpResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::command::{ToolInvocation, CONCAT_MANIFEST_NAME};
    use crate::preview::PreviewerKind;
    use ytp_project_model::project::ProjectFile;

    #[derive(Default)]
    struct RecordingRunner {
        available: Vec<&'static str>,
        ran: RefCell<Vec<ToolInvocation>>,
        spawned: RefCell<Vec<ToolInvocation>>,
    }

    impl CommandRunner for RecordingRunner {
        fn resolve(&self, program: &str) -> Option<PathBuf> {
            self.available
                .contains(&program)
                .then(|| PathBuf::from("/bin").join(program))
        }

        fn run(&self, invocation: &ToolInvocation) -> YtpResult<ProcessOutput> {
            self.ran.borrow_mut().push(invocation.clone());
            Ok(ProcessOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            })
        }

        fn spawn_detached(&self, invocation: &ToolInvocation) -> YtpResult<()> {
            self.spawned.borrow_mut().push(invocation.clone());
            Ok(())
        }
    }

    fn job_in(dir: &Path) -> RenderJob {
        let mut project = ProjectFile::default();
        project.settings.temp_dir = dir.join("temp").to_string_lossy().into_owned();
        project.to_job(project.temp_path("tempoutput.mp4"), None)
    }

    #[test]
    fn test_render_sources_empty_fails_without_io() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner::default());

        let inputs: Vec<PathBuf> = Vec::new();
        let err = generator
            .render_sources(&inputs, &job.output_path, &job)
            .unwrap_err();

        assert!(matches!(err, YtpError::EmptyInputs { .. }));
        assert!(generator.runner().ran.borrow().is_empty());
        assert!(!dir.path().join("temp").exists());
    }

    #[test]
    fn test_render_sources_single_input_uses_single_command() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner::default());

        generator
            .render_sources(&["only.mp4"], &job.output_path, &job)
            .unwrap();

        let ran = generator.runner().ran.borrow();
        assert_eq!(ran.len(), 1);
        assert_eq!(ran[0].flag_value("-i"), Some("only.mp4"));
        assert!(!ran[0].args.contains(&"concat".to_string()));
        assert!(!dir.path().join("temp").join(CONCAT_MANIFEST_NAME).exists());
    }

    #[test]
    fn test_render_sources_many_inputs_uses_concat() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner::default());

        generator
            .render_sources(&["a.mp4", "b.mp4", "c.mp4"], &job.output_path, &job)
            .unwrap();

        let ran = generator.runner().ran.borrow();
        assert_eq!(ran.len(), 1);
        assert_eq!(ran[0].flag_value("-f"), Some("concat"));
        let manifest = std::fs::read_to_string(dir.path().join("temp").join(CONCAT_MANIFEST_NAME))
            .unwrap();
        assert_eq!(manifest.lines().count(), 3);
    }

    #[test]
    fn test_render_creates_output_parent() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner::default());

        let single = dir.path().join("renders").join("one").join("out.mp4");
        generator.render(Path::new("a.mp4"), &single, &job).unwrap();
        assert!(single.parent().unwrap().is_dir());

        let joined = dir.path().join("joined").join("out.mp4");
        generator
            .render_concat(&["a.mp4", "b.mp4"], &joined, &job)
            .unwrap();
        assert!(joined.parent().unwrap().is_dir());
        assert_eq!(generator.runner().ran.borrow().len(), 2);
    }

    #[test]
    fn test_render_preview_clip_defaults_to_fifteen_seconds() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner::default());

        let (clip, output) = generator
            .render_preview_clip(Path::new("in.mp4"), None, &job)
            .unwrap();

        assert!(output.success());
        assert_eq!(clip, dir.path().join("temp").join("preview.mp4"));
        let ran = generator.runner().ran.borrow();
        assert_eq!(ran[0].flag_value("-t"), Some("15"));
        let clip_arg = clip.to_string_lossy().into_owned();
        assert_eq!(ran[0].args.last(), Some(&clip_arg));
    }

    #[test]
    fn test_preview_spawns_first_available() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner {
            available: vec!["ffmpeg"],
            ..RecordingRunner::default()
        });

        let previewer = generator.preview(Path::new("clip.mp4"), &job).unwrap();

        assert_eq!(previewer.kind, PreviewerKind::Processor);
        let spawned = generator.runner().spawned.borrow();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].argv(), vec!["/bin/ffmpeg", "-i", "clip.mp4"]);
        assert!(generator.runner().ran.borrow().is_empty());
    }

    #[test]
    fn test_preview_without_tools_spawns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        let generator = Generator::with_runner(RecordingRunner::default());

        let err = generator.preview(Path::new("clip.mp4"), &job).unwrap_err();

        assert!(err.is_not_found());
        assert!(generator.runner().spawned.borrow().is_empty());
    }
}
