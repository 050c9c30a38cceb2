//! Project-wide rendering settings.
//!
//! Settings are a flat record; no cross-field invariants are enforced
//! (for example `min_stream_duration` may exceed `max_stream_duration`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Flat record of rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Number of clips to cut from the sources.
    pub clip_count: u32,
    /// Output resolution.
    pub width: u32,
    pub height: u32,
    /// Stream slice length bounds, in seconds.
    pub min_stream_duration: f64,
    pub max_stream_duration: f64,
    /// Clip length bounds, in seconds.
    pub min_clip_duration: f64,
    pub max_clip_duration: f64,
    pub effects_per_clip: u32,
    /// How often a random sound is mixed in, nominally `[0.0, 1.0]`.
    pub sound_frequency: f64,
    pub temp_number: u32,
    pub recall_number: u32,
    pub remixes_number: u32,
    pub autoytp_number: u32,
    /// Name of the effects preset.
    pub ytp_effects_name: String,

    pub insert_transitions: bool,
    pub insert_intro: bool,
    pub insert_outro: bool,
    pub plugin_test: bool,
    pub reverse_direction: bool,
    pub preserve_original_audio: bool,
    pub cut_audio: bool,
    pub sound_sync_mode: bool,

    pub intro_path: String,
    pub outro_path: String,
    pub source_dir: String,
    /// Scratch directory for manifests, previews and default outputs.
    pub temp_dir: String,
    pub sounds_dir: String,
    pub music_dir: String,
    pub resources_dir: String,

    pub theme: String,
    pub project_type: ProjectType,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            clip_count: 20,
            width: 640,
            height: 480,
            min_stream_duration: 0.2,
            max_stream_duration: 0.4,
            min_clip_duration: 0.5,
            max_clip_duration: 2.0,
            effects_per_clip: 1,
            sound_frequency: 0.3,
            temp_number: 0,
            recall_number: 0,
            remixes_number: 1,
            autoytp_number: 1,
            ytp_effects_name: "Default".to_string(),
            insert_transitions: true,
            insert_intro: false,
            insert_outro: false,
            plugin_test: false,
            reverse_direction: false,
            preserve_original_audio: true,
            cut_audio: false,
            sound_sync_mode: false,
            intro_path: "resources/intro.mp4".to_string(),
            outro_path: "resources/outro.mp4".to_string(),
            source_dir: "sources".to_string(),
            temp_dir: "temp".to_string(),
            sounds_dir: "sounds".to_string(),
            music_dir: "music".to_string(),
            resources_dir: "resources".to_string(),
            theme: "Dark".to_string(),
            project_type: ProjectType::Generic,
        }
    }
}

/// Errors raised when assigning a settings field from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown setting: {0}")]
    UnknownField(String),

    #[error("Invalid value {value:?} for {field}: expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl ProjectSettings {
    /// Assign one field by its serialized name, parsing `value` as the
    /// field's type.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        fn parse<T: FromStr>(
            field: &str,
            value: &str,
            expected: &'static str,
        ) -> Result<T, SettingsError> {
            value.trim().parse().map_err(|_| SettingsError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                expected,
            })
        }
        let int = |v: &str| parse::<u32>(field, v, "a non-negative integer");
        let float = |v: &str| parse::<f64>(field, v, "a number");
        let flag = |v: &str| parse::<bool>(field, v, "true or false");

        match field {
            "clip_count" => self.clip_count = int(value)?,
            "width" => self.width = int(value)?,
            "height" => self.height = int(value)?,
            "min_stream_duration" => self.min_stream_duration = float(value)?,
            "max_stream_duration" => self.max_stream_duration = float(value)?,
            "min_clip_duration" => self.min_clip_duration = float(value)?,
            "max_clip_duration" => self.max_clip_duration = float(value)?,
            "effects_per_clip" => self.effects_per_clip = int(value)?,
            "sound_frequency" => self.sound_frequency = float(value)?,
            "temp_number" => self.temp_number = int(value)?,
            "recall_number" => self.recall_number = int(value)?,
            "remixes_number" => self.remixes_number = int(value)?,
            "autoytp_number" => self.autoytp_number = int(value)?,
            "ytp_effects_name" => self.ytp_effects_name = value.to_string(),
            "insert_transitions" => self.insert_transitions = flag(value)?,
            "insert_intro" => self.insert_intro = flag(value)?,
            "insert_outro" => self.insert_outro = flag(value)?,
            "plugin_test" => self.plugin_test = flag(value)?,
            "reverse_direction" => self.reverse_direction = flag(value)?,
            "preserve_original_audio" => self.preserve_original_audio = flag(value)?,
            "cut_audio" => self.cut_audio = flag(value)?,
            "sound_sync_mode" => self.sound_sync_mode = flag(value)?,
            "intro_path" => self.intro_path = value.to_string(),
            "outro_path" => self.outro_path = value.to_string(),
            "source_dir" => self.source_dir = value.to_string(),
            "temp_dir" => self.temp_dir = value.to_string(),
            "sounds_dir" => self.sounds_dir = value.to_string(),
            "music_dir" => self.music_dir = value.to_string(),
            "resources_dir" => self.resources_dir = value.to_string(),
            "theme" => self.theme = value.to_string(),
            "project_type" => {
                self.project_type = value.parse().map_err(|_| SettingsError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    expected: "one of Generic, YTP Tennis, Collab Entry, YTPMV",
                })?
            }
            _ => return Err(SettingsError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}

/// Kind of project being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectType {
    #[default]
    Generic,
    #[serde(rename = "YTP Tennis")]
    YtpTennis,
    #[serde(rename = "Collab Entry")]
    CollabEntry,
    #[serde(rename = "YTPMV")]
    Ytpmv,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Generic,
        ProjectType::YtpTennis,
        ProjectType::CollabEntry,
        ProjectType::Ytpmv,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Generic => "Generic",
            ProjectType::YtpTennis => "YTP Tennis",
            ProjectType::CollabEntry => "Collab Entry",
            ProjectType::Ytpmv => "YTPMV",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or(())
    }
}
