//! Persisted project state.
//!
//! A project file ties together the source library, settings, effect
//! toggles and tool paths the user is working with. Render jobs are
//! derived from it per action.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::effect::{default_effects, with_defaults, EffectMap};
use crate::job::RenderJob;
use crate::settings::ProjectSettings;
use crate::sources::SourceLibrary;
use crate::tools::ToolPaths;

/// Top-level project file (`ytp_project.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    /// Source media.
    pub sources: SourceLibrary,

    /// Rendering settings.
    pub settings: ProjectSettings,

    /// Effect toggles. Effects missing from the file use catalog defaults.
    pub effects: EffectMap,

    /// External tool locations.
    pub tools: ToolPaths,
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self {
            sources: SourceLibrary::default(),
            settings: ProjectSettings::default(),
            effects: default_effects(),
            tools: ToolPaths::default(),
        }
    }
}

impl ProjectFile {
    /// Load a project file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ProjectError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ProjectError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the project file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProjectError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ProjectError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| ProjectError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write a fresh default project. Fails if a file already exists at
    /// `path` unless `overwrite` is set.
    pub fn create(path: impl AsRef<Path>, overwrite: bool) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        if path.exists() && !overwrite {
            return Err(ProjectError::ValidationError {
                message: format!("{} already exists", path.display()),
            });
        }
        let project = Self::default();
        project.save(path)?;
        Ok(project)
    }

    /// Build a render job writing to `output_path`. The job carries every
    /// catalog effect; entries missing from the project use their defaults.
    pub fn to_job(&self, output_path: impl Into<PathBuf>, notes: Option<String>) -> RenderJob {
        RenderJob {
            output_path: output_path.into(),
            sources: self.sources.clone(),
            settings: self.settings.clone(),
            effects: with_defaults(&self.effects),
            tool_paths: self.tools.clone(),
            notes,
        }
    }

    /// Path of `file_name` inside the configured temp directory.
    pub fn temp_path(&self, file_name: &str) -> PathBuf {
        PathBuf::from(&self.settings.temp_dir).join(file_name)
    }
}

/// Errors that can occur when working with project files.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid project: {message}")]
    ValidationError { message: String },
}
