//! Job plan generation.
//!
//! A plan is a JSON-serializable snapshot of a render job: its sources,
//! settings, effect configuration and the filters compiled from them.
//! The field layout mirrors the settings and effect records directly, so
//! changing those records changes the plan format.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ytp_project_model::effect::{with_defaults, EffectMap};
use ytp_project_model::job::RenderJob;
use ytp_project_model::settings::ProjectSettings;

use crate::effects::{compile, EffectResult};

/// The plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub sources: PlanSources,
    pub settings: ProjectSettings,
    pub effects: EffectMap,
    pub filters: PlanFilters,
}

/// Source paths flattened to strings, per kind, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSources {
    pub videos: Vec<String>,
    pub images: Vec<String>,
    pub gifs: Vec<String>,
    pub audio: Vec<String>,
    pub transitions: Vec<String>,
    pub urls: Vec<String>,
}

/// Compiled filter lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFilters {
    pub audio: Vec<String>,
    pub video: Vec<String>,
    pub overlays: Vec<String>,
    pub notes: Vec<String>,
}

impl From<EffectResult> for PlanFilters {
    fn from(result: EffectResult) -> Self {
        Self {
            audio: result.audio_filters,
            video: result.video_filters,
            overlays: result.overlays,
            notes: result.notes,
        }
    }
}

fn path_strings<P: AsRef<Path>>(paths: &[P]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.as_ref().to_string_lossy().into_owned())
        .collect()
}

/// Build the plan for `job`. Runs the effect compiler once.
///
/// `effects` always lists the whole catalog, so it holds exactly the
/// configuration that produced `filters`.
pub fn generate_plan(job: &RenderJob) -> PlanDocument {
    let sources = &job.sources;
    PlanDocument {
        sources: PlanSources {
            videos: path_strings(&sources.videos),
            images: path_strings(&sources.images),
            gifs: path_strings(&sources.gifs),
            audio: path_strings(&sources.audio),
            transitions: path_strings(&sources.transitions),
            urls: sources.urls.clone(),
        },
        settings: job.settings.clone(),
        effects: with_defaults(&job.effects),
        filters: compile(&job.effects).into(),
    }
}
