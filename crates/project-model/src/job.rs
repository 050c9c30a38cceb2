//! The per-action render job aggregate.

use std::path::PathBuf;

use crate::effect::EffectMap;
use crate::settings::ProjectSettings;
use crate::sources::SourceLibrary;
use crate::tools::ToolPaths;

/// Everything one render, preview or plan export needs.
///
/// Built fresh for each action and only read while the action runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    /// Where the rendered file goes.
    pub output_path: PathBuf,

    pub sources: SourceLibrary,

    pub settings: ProjectSettings,

    /// Per-effect configuration. Identifiers missing from the map use
    /// their catalog defaults.
    pub effects: EffectMap,

    pub tool_paths: ToolPaths,

    /// Free-text notes about how the job was created.
    pub notes: Option<String>,
}

impl RenderJob {
    /// The scratch directory configured in the job's settings.
    pub fn temp_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.temp_dir)
    }
}
