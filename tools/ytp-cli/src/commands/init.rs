//! Initialize a new YTP+ project file.

use std::path::Path;

use ytp_project_model::project::ProjectFile;

pub fn run(path: &Path, force: bool) -> anyhow::Result<()> {
    println!("Creating project file at {}", path.display());

    let project = ProjectFile::create(path, force)
        .map_err(|e| anyhow::anyhow!("Failed to create project: {e} (use --force to overwrite)"))?;

    let s = &project.settings;
    println!("Project created successfully:");
    println!("  Resolution: {}x{}", s.width, s.height);
    println!("  Clips: {}", s.clip_count);
    println!(
        "  Effects: {} ({} enabled)",
        project.effects.len(),
        project.effects.values().filter(|c| c.enabled).count()
    );
    println!();
    println!("Working directories:");
    println!("  {}/   (scratch files, renders, plan)", s.temp_dir);
    println!("  {}/   (source media)", s.source_dir);
    println!("  {}/   (overlay assets)", s.resources_dir);

    Ok(())
}
