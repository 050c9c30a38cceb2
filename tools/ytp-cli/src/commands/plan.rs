//! Export the job plan.

use std::path::{Path, PathBuf};

use ytp_common::config::AppConfig;
use ytp_render_engine::export::export_plan;

use super::load_project;

pub fn run(project_path: &Path, output: Option<PathBuf>, config: &AppConfig) -> anyhow::Result<()> {
    let project = load_project(project_path)?;
    let output = output.unwrap_or_else(|| project.temp_path(&config.render.plan_file_name));

    let job = project.to_job(
        project.temp_path(&config.render.render_file_name),
        Some("Generated via ytpplus plan".to_string()),
    );
    export_plan(&job, &output).map_err(|e| anyhow::anyhow!("Plan export failed: {e}"))?;

    println!("Plan exported to {}", output.display());
    Ok(())
}
