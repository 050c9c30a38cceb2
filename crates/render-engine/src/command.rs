//! External tool command construction.
//!
//! Commands are built as plain data ([`ToolInvocation`]) so they can be
//! inspected, logged and tested without starting a process.

use std::fmt;
use std::path::{Path, PathBuf};

use ytp_common::error::YtpResult;
use ytp_processing_core::effects::{compile, EffectResult};
use ytp_project_model::job::RenderJob;

use crate::manifest::write_manifest;

/// File name of the concat manifest inside the job's temp directory.
pub const CONCAT_MANIFEST_NAME: &str = "concat.txt";

/// File name of a rendered preview clip inside the job's temp directory.
pub const PREVIEW_CLIP_NAME: &str = "preview.mp4";

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Executable name or path, as configured.
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// The value following the first `flag` argument, if any.
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Join compiled fragments into one `-filter_complex` expression.
///
/// Video fragments are joined with `,`, audio fragments with `,`, and the
/// two non-empty chains with `;`. Returns `None` when both are empty.
pub fn filter_complex(result: &EffectResult) -> Option<String> {
    let chains: Vec<String> = [&result.video_filters, &result.audio_filters]
        .into_iter()
        .filter(|chain| !chain.is_empty())
        .map(|chain| chain.join(","))
        .collect();
    (!chains.is_empty()).then(|| chains.join(";"))
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn push_filters_and_output(
    mut cmd: ToolInvocation,
    job: &RenderJob,
    output_path: &Path,
) -> ToolInvocation {
    if let Some(filters) = filter_complex(&compile(&job.effects)) {
        cmd = cmd.arg("-filter_complex").arg(filters);
    }
    cmd.arg(path_arg(output_path))
}

/// `<ffmpeg> -y -i <input> [-filter_complex <expr>] <output>`
pub fn build_single_command(
    input_path: &Path,
    output_path: &Path,
    job: &RenderJob,
) -> ToolInvocation {
    let cmd = ToolInvocation::new(&job.tool_paths.ffmpeg)
        .args(["-y", "-i"])
        .arg(path_arg(input_path));
    push_filters_and_output(cmd, job, output_path)
}

/// `<ffmpeg> -y -f concat -safe 0 -i <manifest> [-filter_complex <expr>] <output>`
///
/// Expects the manifest to exist already; see [`build_concat_command`].
pub fn concat_command_for_manifest(
    manifest_path: &Path,
    output_path: &Path,
    job: &RenderJob,
) -> ToolInvocation {
    let cmd = ToolInvocation::new(&job.tool_paths.ffmpeg)
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(path_arg(manifest_path));
    push_filters_and_output(cmd, job, output_path)
}

/// Path of the concat manifest for `job`.
pub fn manifest_path(job: &RenderJob) -> PathBuf {
    job.temp_dir().join(CONCAT_MANIFEST_NAME)
}

/// Write the concat manifest for `inputs` into the job's temp directory and
/// return the concat-demuxer command that reads it.
pub fn build_concat_command<P: AsRef<Path>>(
    inputs: &[P],
    output_path: &Path,
    job: &RenderJob,
) -> YtpResult<ToolInvocation> {
    let manifest = manifest_path(job);
    write_manifest(inputs, &manifest)?;
    Ok(concat_command_for_manifest(&manifest, output_path, job))
}

/// `<ffmpeg> -y -t <seconds> -i <input> <temp_dir>/preview.mp4`
pub fn preview_clip_command(input_path: &Path, seconds: u32, job: &RenderJob) -> ToolInvocation {
    ToolInvocation::new(&job.tool_paths.ffmpeg)
        .args(["-y", "-t"])
        .arg(seconds.to_string())
        .arg("-i")
        .arg(path_arg(input_path))
        .arg(path_arg(&job.temp_dir().join(PREVIEW_CLIP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytp_project_model::effect::{default_effects, EffectId, EffectMap};
    use ytp_project_model::settings::ProjectSettings;
    use ytp_project_model::sources::SourceLibrary;
    use ytp_project_model::tools::ToolPaths;

    fn job_with(enabled: &[EffectId]) -> RenderJob {
        let mut effects: EffectMap = default_effects();
        for (id, config) in effects.iter_mut() {
            config.enabled = enabled.contains(id);
        }
        RenderJob {
            output_path: PathBuf::from("out.mp4"),
            sources: SourceLibrary::default(),
            settings: ProjectSettings::default(),
            effects,
            tool_paths: ToolPaths {
                ffmpeg: "/opt/ffmpeg/bin/ffmpeg".to_string(),
                ..ToolPaths::default()
            },
            notes: None,
        }
    }

    #[test]
    fn test_filter_complex_joins_streams() {
        let result = EffectResult {
            video_filters: vec!["reverse".to_string()],
            audio_filters: vec!["areverse".to_string()],
            ..EffectResult::default()
        };
        assert_eq!(filter_complex(&result).as_deref(), Some("reverse;areverse"));
    }

    #[test]
    fn test_filter_complex_single_stream_has_no_separator() {
        let result = EffectResult {
            audio_filters: vec!["atempo=1.25".to_string(), "volume=10".to_string()],
            ..EffectResult::default()
        };
        assert_eq!(
            filter_complex(&result).as_deref(),
            Some("atempo=1.25,volume=10")
        );
    }

    #[test]
    fn test_filter_complex_empty_is_none() {
        let result = EffectResult {
            overlays: vec!["rainbow_overlay".to_string()],
            notes: vec!["note".to_string()],
            ..EffectResult::default()
        };
        assert_eq!(filter_complex(&result), None);
    }

    #[test]
    fn test_single_command_without_filters() {
        let job = job_with(&[EffectId::RandomSound, EffectId::Rainbow]);
        let cmd = build_single_command(Path::new("in.mp4"), Path::new("out.mp4"), &job);
        assert_eq!(
            cmd.argv(),
            vec!["/opt/ffmpeg/bin/ffmpeg", "-y", "-i", "in.mp4", "out.mp4"]
        );
        assert_eq!(cmd.flag_value("-filter_complex"), None);
    }

    #[test]
    fn test_single_command_with_filters() {
        let job = job_with(&[EffectId::Reverse]);
        let cmd = build_single_command(Path::new("in.mp4"), Path::new("out.mp4"), &job);
        assert_eq!(
            cmd.args,
            vec![
                "-y",
                "-i",
                "in.mp4",
                "-filter_complex",
                "reverse;areverse",
                "out.mp4"
            ]
        );
        assert_eq!(
            cmd.args.iter().filter(|a| *a == "-filter_complex").count(),
            1
        );
    }

    #[test]
    fn test_single_command_multiple_fragments_per_stream() {
        let job = job_with(&[EffectId::Invert, EffectId::Mirror, EffectId::Earrape]);
        let cmd = build_single_command(Path::new("in.mp4"), Path::new("out.mp4"), &job);
        assert_eq!(cmd.flag_value("-filter_complex"), Some("negate,hflip;volume=10"));
    }

    #[test]
    fn test_concat_command_for_manifest() {
        let job = job_with(&[EffectId::Invert]);
        let cmd = concat_command_for_manifest(
            Path::new("temp/concat.txt"),
            Path::new("temp/out.mp4"),
            &job,
        );
        assert_eq!(
            cmd.args,
            vec![
                "-y",
                "-f",
                "concat",
                "-safe",
                "0",
                "-i",
                "temp/concat.txt",
                "-filter_complex",
                "negate",
                "temp/out.mp4"
            ]
        );
    }

    #[test]
    fn test_build_concat_command_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job_with(&[]);
        job.settings.temp_dir = dir.path().join("scratch").to_string_lossy().into_owned();

        let cmd = build_concat_command(
            &["a.mp4", "b.mp4"],
            Path::new("out.mp4"),
            &job,
        )
        .unwrap();

        let manifest = dir.path().join("scratch").join(CONCAT_MANIFEST_NAME);
        assert_eq!(
            std::fs::read_to_string(&manifest).unwrap(),
            "file 'a.mp4'\nfile 'b.mp4'"
        );
        let manifest_arg = manifest.to_string_lossy().into_owned();
        assert_eq!(cmd.flag_value("-i"), Some(manifest_arg.as_str()));
        assert_eq!(cmd.args.last().map(String::as_str), Some("out.mp4"));
    }

    #[test]
    fn test_preview_clip_command() {
        let job = job_with(&[EffectId::Reverse]);
        let cmd = preview_clip_command(Path::new("in.mp4"), 15, &job);
        let expected_output = PathBuf::from("temp").join(PREVIEW_CLIP_NAME);
        assert_eq!(
            cmd.args,
            vec![
                "-y".to_string(),
                "-t".to_string(),
                "15".to_string(),
                "-i".to_string(),
                "in.mp4".to_string(),
                expected_output.to_string_lossy().into_owned(),
            ]
        );
    }

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let cmd = ToolInvocation::new("ffmpeg").args(["-i", "my clip.mp4"]);
        assert_eq!(cmd.to_string(), "ffmpeg -i \"my clip.mp4\"");
    }
}
