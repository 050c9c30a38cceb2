//! Show project information.

use std::path::Path;

use ytp_processing_core::effects::compile;
use ytp_project_model::effect::{is_enabled, EffectId, EffectMap, CATALOG};
use ytp_project_model::sources::MediaKind;
use ytp_render_engine::command::filter_complex;

use super::load_project;

/// Catalog identifiers that compile as enabled, including those missing
/// from `effects` whose catalog default is enabled.
fn enabled_effects(effects: &EffectMap) -> Vec<EffectId> {
    EffectId::all().filter(|id| is_enabled(effects, *id)).collect()
}

pub fn run(path: &Path) -> anyhow::Result<()> {
    let project = load_project(path)?;
    let s = &project.settings;

    println!("Project: {}", path.display());
    println!("  Type: {}", s.project_type);
    println!("  Effects preset: {}", s.ytp_effects_name);
    println!();

    println!("Sources:");
    for kind in MediaKind::ALL {
        let list = project.sources.list(kind);
        println!("  {kind}: {}", list.len());
        for (i, p) in list.iter().enumerate() {
            println!("    [{i}] {}", p.display());
        }
    }
    println!("  urls: {}", project.sources.urls.len());
    for (i, url) in project.sources.urls.iter().enumerate() {
        println!("    [{i}] {url}");
    }
    println!();

    println!("Settings:");
    println!("  Resolution: {}x{}", s.width, s.height);
    println!(
        "  Clips: {} ({:.1}-{:.1}s each, {} effect(s) per clip)",
        s.clip_count, s.min_clip_duration, s.max_clip_duration, s.effects_per_clip
    );
    println!(
        "  Streams: {:.1}-{:.1}s, sound frequency {}",
        s.min_stream_duration, s.max_stream_duration, s.sound_frequency
    );
    println!(
        "  Transitions: {}  Intro: {}  Outro: {}",
        s.insert_transitions, s.insert_intro, s.insert_outro
    );
    println!("  Temp dir: {}", s.temp_dir);
    println!();

    let compiled = compile(&project.effects);
    let enabled: Vec<_> = enabled_effects(&project.effects)
        .into_iter()
        .map(EffectId::as_str)
        .collect();
    println!("Effects: {} of {} enabled", enabled.len(), CATALOG.len());
    if !enabled.is_empty() {
        println!("  {}", enabled.join(", "));
    }
    match filter_complex(&compiled) {
        Some(expr) => println!("  Filter graph: {expr}"),
        None => println!("  Filter graph: (none)"),
    }
    if !compiled.overlays.is_empty() {
        println!("  Overlays: {}", compiled.overlays.join(", "));
    }
    println!();

    println!("Tools:");
    for (label, value) in project.tools.entries() {
        println!("  {label}: {value}");
    }

    Ok(())
}
