//! Effect catalog listing and configuration.

use std::path::Path;

use ytp_processing_core::effects::{fragments_for, Fragment};
use ytp_project_model::effect::{is_enabled, EffectId};

use super::{load_project, save_project};

fn describe(fragment: Fragment) -> String {
    match fragment {
        Fragment::Video(f) => format!("video `{f}`"),
        Fragment::Audio(f) => format!("audio `{f}`"),
        Fragment::Overlay(f) => format!("overlay `{f}`"),
        Fragment::Note(_) => "note".to_string(),
    }
}

pub fn list(project_path: &Path) -> anyhow::Result<()> {
    let project = load_project(project_path)?;

    println!(
        "{:<4} {:<22} {:<26} {:>5} {:>5}  Output",
        "On", "Identifier", "Name", "Prob", "Level"
    );
    println!("{}", "=".repeat(90));
    for id in EffectId::all() {
        let config = project
            .effects
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.default_config());
        let marker = match (is_enabled(&project.effects, id), project.effects.contains_key(&id)) {
            (true, true) => "[x]",
            (false, true) => "[ ]",
            (true, false) => "(x)",
            (false, false) => "( )",
        };
        let outputs: Vec<String> = fragments_for(id).into_iter().map(describe).collect();
        println!(
            "{:<4} {:<22} {:<26} {:>5.2} {:>5}  {}",
            marker,
            id.as_str(),
            config.name,
            config.probability,
            config.max_level,
            outputs.join(", ")
        );
    }
    println!();
    println!("(x) / ( ) = not set in the project; catalog default applies");

    Ok(())
}

pub fn configure(
    project_path: &Path,
    id: &str,
    enabled: Option<bool>,
    probability: Option<f64>,
    max_level: Option<u32>,
) -> anyhow::Result<()> {
    let id: EffectId = id.parse()?;
    if let Some(p) = probability {
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!("Probability must be within 0.0 and 1.0, got {p}");
        }
    }

    let mut project = load_project(project_path)?;
    let config = project
        .effects
        .entry(id)
        .or_insert_with(|| id.default_config());
    if let Some(enabled) = enabled {
        config.enabled = enabled;
    }
    if let Some(p) = probability {
        config.probability = p;
    }
    if let Some(level) = max_level {
        config.max_level = level;
    }

    println!(
        "{}: enabled={} probability={} max_level={}",
        id, config.enabled, config.probability, config.max_level
    );
    save_project(&project, project_path)
}
