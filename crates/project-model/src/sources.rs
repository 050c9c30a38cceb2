//! Source media library.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of local source media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Image,
    Gif,
    Audio,
    Transition,
}

impl MediaKind {
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Video,
        MediaKind::Image,
        MediaKind::Gif,
        MediaKind::Audio,
        MediaKind::Transition,
    ];

    /// Lower-case file extensions accepted for this kind.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Video | MediaKind::Transition => &["mp4", "wmv", "avi", "mkv"],
            MediaKind::Image => &["png", "jpg", "jpeg", "webp"],
            MediaKind::Gif => &["gif"],
            MediaKind::Audio => &["mp3", "wav", "ogg"],
        }
    }

    /// Guess the kind from a path's extension. Video files map to
    /// [`MediaKind::Video`], never to [`MediaKind::Transition`].
    pub fn infer(path: &Path) -> Option<MediaKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        [
            MediaKind::Video,
            MediaKind::Image,
            MediaKind::Gif,
            MediaKind::Audio,
        ]
        .into_iter()
        .find(|kind| kind.extensions().contains(&ext.as_str()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
            MediaKind::Gif => "gif",
            MediaKind::Audio => "audio",
            MediaKind::Transition => "transition",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix('s').unwrap_or(&wanted);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                format!("Unknown media kind: {s}. Use: video, image, gif, audio, transition")
            })
    }
}

/// Ordered source lists, partitioned by media kind, plus remote URLs.
///
/// Insertion order is preserved; duplicates are allowed and paths are
/// not checked for existence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLibrary {
    pub videos: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
    pub gifs: Vec<PathBuf>,
    pub audio: Vec<PathBuf>,
    pub transitions: Vec<PathBuf>,
    /// Remote media URLs. Stored verbatim, never fetched.
    pub urls: Vec<String>,
}

impl SourceLibrary {
    pub fn list(&self, kind: MediaKind) -> &[PathBuf] {
        match kind {
            MediaKind::Video => &self.videos,
            MediaKind::Image => &self.images,
            MediaKind::Gif => &self.gifs,
            MediaKind::Audio => &self.audio,
            MediaKind::Transition => &self.transitions,
        }
    }

    fn list_mut(&mut self, kind: MediaKind) -> &mut Vec<PathBuf> {
        match kind {
            MediaKind::Video => &mut self.videos,
            MediaKind::Image => &mut self.images,
            MediaKind::Gif => &mut self.gifs,
            MediaKind::Audio => &mut self.audio,
            MediaKind::Transition => &mut self.transitions,
        }
    }

    pub fn add(&mut self, kind: MediaKind, path: impl Into<PathBuf>) {
        self.list_mut(kind).push(path.into());
    }

    /// Remove the entry at `index`, returning it if it existed.
    pub fn remove(&mut self, kind: MediaKind, index: usize) -> Option<PathBuf> {
        let list = self.list_mut(kind);
        (index < list.len()).then(|| list.remove(index))
    }

    pub fn clear(&mut self, kind: MediaKind) {
        self.list_mut(kind).clear();
    }

    /// Append a URL. Blank input is ignored; returns whether it was added.
    pub fn add_url(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.urls.push(url.to_string());
        true
    }

    pub fn remove_url(&mut self, index: usize) -> Option<String> {
        (index < self.urls.len()).then(|| self.urls.remove(index))
    }

    /// Total number of local files across every kind.
    pub fn file_count(&self) -> usize {
        MediaKind::ALL.iter().map(|k| self.list(*k).len()).sum()
    }
}
