//! Check that external tools can be found.

use std::path::Path;

use ytp_render_engine::preview::resolve_previewer;
use ytp_render_engine::runner::{CommandRunner, SystemRunner};

use super::load_project;

pub fn run(project_path: &Path) -> anyhow::Result<()> {
    let project = load_project(project_path)?;
    let runner = SystemRunner;

    println!("YTP+ Tool Check");
    println!("{}", "=".repeat(50));

    for (label, program) in project.tools.entries() {
        match runner.resolve(program) {
            Some(found) => println!("[OK]   {label}: {}", found.display()),
            None => println!("[MISS] {label}: {program} not found"),
        }
    }

    println!();
    match resolve_previewer(&project.tools, |name| runner.resolve(name)) {
        Ok(p) => println!("Preview will use {}", p.program.display()),
        Err(e) => println!("Preview unavailable: {e}"),
    }
    if runner.resolve(&project.tools.ffmpeg).is_some() {
        println!("FFmpeg is available. Rendering is ready.");
    } else {
        println!("FFmpeg was not found. Install it or set the ffmpeg path in the project file.");
    }

    Ok(())
}
