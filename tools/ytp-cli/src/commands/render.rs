//! Render the project's video sources.

use std::path::{Path, PathBuf};

use ytp_render_engine::generator::Generator;
use ytp_render_engine::runner::ProcessOutput;

use super::load_project;

pub fn run(project_path: &Path, output: Option<PathBuf>, file_name: &str) -> anyhow::Result<()> {
    let project = load_project(project_path)?;
    if project.sources.videos.is_empty() {
        anyhow::bail!("Add at least one video source to render");
    }

    let output = output.unwrap_or_else(|| project.temp_path(file_name));
    let job = project.to_job(&output, Some("Generated via ytpplus".to_string()));

    println!(
        "Rendering {} video source(s) to {}",
        job.sources.videos.len(),
        output.display()
    );
    let result = Generator::new()
        .render_sources(&job.sources.videos, &output, &job)
        .map_err(|e| anyhow::anyhow!("Render failed: {e}"))?;

    print_process_output(&result);
    println!("Output: {}", output.display());
    Ok(())
}

/// Exit code, then captured stdout and stderr when non-empty.
pub fn print_process_output(result: &ProcessOutput) {
    match result.exit_code {
        Some(code) => println!("FFmpeg exit code: {code}"),
        None => println!("FFmpeg terminated by signal"),
    }
    if !result.stdout.is_empty() {
        println!("{}", result.stdout.trim_end());
    }
    if !result.stderr.is_empty() {
        println!("{}", result.stderr.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_videos_fails() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("ytp_project.json");
        let err = run(&project_path, None, "tempoutput.mp4").unwrap_err();
        assert!(err.to_string().contains("video source"));
    }
}
