//! External executables the generator shells out to.

use serde::{Deserialize, Serialize};

/// Names or paths of the external tools.
///
/// Bare names are resolved through the OS search path at invocation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    /// Media processor.
    pub ffmpeg: String,
    /// Media prober.
    pub ffprobe: String,
    /// Image processor used by overlay effects.
    pub magick: String,
    /// Media previewer.
    pub ffplay: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            magick: "magick".to_string(),
            ffplay: "ffplay".to_string(),
        }
    }
}

impl ToolPaths {
    /// `(label, configured value)` pairs, in display order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("FFmpeg", self.ffmpeg.as_str()),
            ("FFprobe", self.ffprobe.as_str()),
            ("Magick", self.magick.as_str()),
            ("FFplay", self.ffplay.as_str()),
        ]
    }
}
