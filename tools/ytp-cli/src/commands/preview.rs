//! Preview the first video source.

use std::path::Path;

use ytp_render_engine::generator::Generator;

use super::load_project;
use super::render::print_process_output;

/// Launch a previewer, or with `clip` render that many seconds to
/// `<temp_dir>/preview.mp4`.
pub fn run(project_path: &Path, clip: Option<u32>) -> anyhow::Result<()> {
    let project = load_project(project_path)?;
    let first = project
        .sources
        .videos
        .first()
        .ok_or_else(|| anyhow::anyhow!("Add at least one video source to preview"))?;
    let job = project.to_job(
        project.temp_path("tempoutput.mp4"),
        Some("Generated via ytpplus preview".to_string()),
    );
    let generator = Generator::new();

    match clip {
        Some(seconds) => {
            let (path, result) = generator
                .render_preview_clip(first, Some(seconds), &job)
                .map_err(|e| anyhow::anyhow!("Preview clip failed: {e}"))?;
            print_process_output(&result);
            println!("Preview clip: {}", path.display());
        }
        None => {
            let previewer = generator
                .preview(first, &job)
                .map_err(|e| anyhow::anyhow!("Preview failed: {e}"))?;
            println!(
                "Preview launched for {} with {}",
                first.display(),
                previewer.program.display()
            );
        }
    }
    Ok(())
}
