//! Effect catalog and per-effect configuration.
//!
//! Every effect the generator knows about is a variant of [`EffectId`].
//! Each variant has one immutable [`EffectDescriptor`] in [`CATALOG`]
//! describing its display name, description and default state. User
//! edits live in an [`EffectMap`], which is cloned from the catalog
//! defaults and then toggled.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Probability assigned to every effect in the default catalog.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Maximum level assigned to every effect in the default catalog.
pub const DEFAULT_MAX_LEVEL: u32 = 1;

/// Identifier of a known effect.
///
/// Variants are declared in catalog order; `Ord` follows declaration order,
/// so an [`EffectMap`] iterates and serializes in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EffectId {
    RandomSound,
    RandomClipShuffle,
    Reverse,
    SpeedUp,
    SlowDown,
    Chorus,
    Vibrato,
    Stutter,
    RandomCuts,
    RecallPostRender,
    GetDown,
    TemporalScramble,
    HighHarmony,
    LowHarmony,
    Fearful,
    HalfReversed,
    PitchShift,
    MirrorSymmetry,
    HueRotate,
    Spadinner,
    Confusion,
    OverlayPlusThree,
    YtpmvAuto,
    Earrape,
    AutotuneChaos,
    Dance,
    Squidward,
    Invert,
    Rainbow,
    Mirror,
    Sus,
    ExplosionSpam,
    FrameShuffle,
    MemeInjection,
    SentenceMix,
}

/// Static description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectDescriptor {
    pub id: EffectId,
    /// Snake-case identifier used in project and plan files.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    pub description: &'static str,
    pub enabled_by_default: bool,
}

const fn entry(
    id: EffectId,
    key: &'static str,
    name: &'static str,
    description: &'static str,
) -> EffectDescriptor {
    EffectDescriptor {
        id,
        key,
        name,
        description,
        enabled_by_default: true,
    }
}

const fn disabled(
    id: EffectId,
    key: &'static str,
    name: &'static str,
    description: &'static str,
) -> EffectDescriptor {
    EffectDescriptor {
        id,
        key,
        name,
        description,
        enabled_by_default: false,
    }
}

/// The effect catalog, indexed by `EffectId as usize`.
pub const CATALOG: [EffectDescriptor; 35] = [
    entry(
        EffectId::RandomSound,
        "random_sound",
        "Random Sound",
        "Overlay short sound effects on clips.",
    ),
    entry(
        EffectId::RandomClipShuffle,
        "random_clip_shuffle",
        "Random Clip Shuffle",
        "Shuffle chosen source clips.",
    ),
    entry(
        EffectId::Reverse,
        "reverse",
        "Reverse Clip",
        "Reverse audio and video stream for a clip.",
    ),
    entry(
        EffectId::SpeedUp,
        "speed_up",
        "Speed Up",
        "Increase playback speed for a clip.",
    ),
    entry(
        EffectId::SlowDown,
        "slow_down",
        "Slow Down",
        "Decrease playback speed for a clip.",
    ),
    entry(
        EffectId::Chorus,
        "chorus",
        "Chorus Effect",
        "Approximate chorus via aecho filter.",
    ),
    entry(
        EffectId::Vibrato,
        "vibrato",
        "Vibrato/Pitch Bend",
        "Approximate vibrato using asetrate + atempo.",
    ),
    entry(
        EffectId::Stutter,
        "stutter",
        "Stutter Loop",
        "Repeat a short slice of the clip.",
    ),
    entry(
        EffectId::RandomCuts,
        "random_cuts",
        "Random Cuts",
        "Add quick hard cuts between segments.",
    ),
    entry(
        EffectId::RecallPostRender,
        "recall_post_render",
        "Recall Post-Render",
        "Re-apply effects to an already rendered clip.",
    ),
    entry(
        EffectId::GetDown,
        "get_down",
        "Get Down",
        "Rhythmic repeat preset.",
    ),
    entry(
        EffectId::TemporalScramble,
        "temporal_scramble",
        "Temporal Scramble",
        "Scramble the order of short time slices.",
    ),
    entry(
        EffectId::HighHarmony,
        "high_harmony",
        "High Harmony",
        "Pitch audio up via asetrate + atempo.",
    ),
    entry(
        EffectId::LowHarmony,
        "low_harmony",
        "Low Harmony",
        "Pitch audio down via asetrate + atempo.",
    ),
    entry(
        EffectId::Fearful,
        "fearful",
        "Fearful",
        "Darken the picture and add tremolo to the audio.",
    ),
    entry(
        EffectId::HalfReversed,
        "half_reversed",
        "Half Reversed",
        "Play half of the clip backwards.",
    ),
    entry(
        EffectId::PitchShift,
        "pitch_shift",
        "Pitch Shift",
        "Shift audio pitch without changing speed.",
    ),
    entry(
        EffectId::MirrorSymmetry,
        "mirror_symmetry",
        "Mirror Symmetry",
        "Mirror one half of the frame onto the other.",
    ),
    entry(
        EffectId::HueRotate,
        "hue_rotate",
        "Hue Rotate",
        "Rotate video hue by 90 degrees.",
    ),
    entry(
        EffectId::Spadinner,
        "spadinner",
        "Spadinner",
        "Overlay spadinner audio/video assets.",
    ),
    entry(
        EffectId::Confusion,
        "confusion",
        "Confusion",
        "Rapid disorienting cut preset.",
    ),
    entry(
        EffectId::OverlayPlusThree,
        "overlay_plus_three",
        "Overlay +3",
        "Stack three overlay assets on the clip.",
    ),
    entry(
        EffectId::YtpmvAuto,
        "ytpmv_auto",
        "YTPMV Auto",
        "Automatic YTPMV-style pitch sequencing.",
    ),
    entry(
        EffectId::Earrape,
        "earrape",
        "Earrape Mode",
        "Apply large gain on audio.",
    ),
    disabled(
        EffectId::AutotuneChaos,
        "autotune_chaos",
        "Auto-Tune Chaos",
        "Placeholder for external autotune tool.",
    ),
    entry(
        EffectId::Dance,
        "dance",
        "Dance Mode",
        "Simple video transform preset.",
    ),
    entry(
        EffectId::Squidward,
        "squidward",
        "Squidward Mode",
        "Video transform using ImageMagick overlay.",
    ),
    entry(
        EffectId::Invert,
        "invert",
        "Invert Colors",
        "Invert video colors.",
    ),
    entry(
        EffectId::Rainbow,
        "rainbow",
        "Rainbow Overlay",
        "Overlay a rainbow PNG/GIF on the video.",
    ),
    entry(
        EffectId::Mirror,
        "mirror",
        "Mirror Mode",
        "Mirror the video horizontally.",
    ),
    entry(
        EffectId::Sus,
        "sus",
        "Sus Effect",
        "Random pitch/tempo wobble.",
    ),
    entry(
        EffectId::ExplosionSpam,
        "explosion_spam",
        "Explosion Spam",
        "Repeatedly overlay explosion clips.",
    ),
    disabled(
        EffectId::FrameShuffle,
        "frame_shuffle",
        "Frame Shuffle",
        "Placeholder; sample shuffle implementation.",
    ),
    entry(
        EffectId::MemeInjection,
        "meme_injection",
        "Meme Injection",
        "Overlay meme images/audio from assets.",
    ),
    entry(
        EffectId::SentenceMix,
        "sentence_mix",
        "Sentence Mixing",
        "Reorder short segments for comedic timing.",
    ),
];

impl EffectId {
    /// Every identifier, in catalog order.
    pub fn all() -> impl Iterator<Item = EffectId> {
        CATALOG.iter().map(|d| d.id)
    }

    pub fn descriptor(self) -> &'static EffectDescriptor {
        &CATALOG[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.descriptor().key
    }

    /// A fresh configuration holding this effect's catalog defaults.
    pub fn default_config(self) -> EffectConfig {
        let d = self.descriptor();
        EffectConfig {
            name: d.name.to_string(),
            enabled: d.enabled_by_default,
            probability: DEFAULT_PROBABILITY,
            max_level: DEFAULT_MAX_LEVEL,
            description: d.description.to_string(),
        }
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a catalog effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown effect identifier: {0:?}")]
pub struct ParseEffectIdError(pub String);

impl FromStr for EffectId {
    type Err = ParseEffectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|d| d.key == s)
            .map(|d| d.id)
            .ok_or_else(|| ParseEffectIdError(s.to_string()))
    }
}

impl TryFrom<String> for EffectId {
    type Error = ParseEffectIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EffectId> for String {
    fn from(id: EffectId) -> Self {
        id.as_str().to_string()
    }
}

/// User-adjustable configuration for one effect.
///
/// `probability` and `max_level` are stored and serialized but are not
/// consulted when compiling filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectConfig {
    /// Display name.
    pub name: String,

    pub enabled: bool,

    /// Chance of applying the effect to a clip, nominally `[0.0, 1.0]`.
    pub probability: f64,

    /// Upper bound on effect intensity.
    pub max_level: u32,

    pub description: String,
}

/// Per-effect configuration keyed by identifier, ordered by catalog order.
pub type EffectMap = BTreeMap<EffectId, EffectConfig>;

/// Clone the full default catalog into an editable map.
pub fn default_effects() -> EffectMap {
    EffectId::all().map(|id| (id, id.default_config())).collect()
}

/// Whether `id` is enabled in `effects`, falling back to the catalog
/// default when the map has no entry for it.
pub fn is_enabled(effects: &EffectMap, id: EffectId) -> bool {
    effects
        .get(&id)
        .map(|config| config.enabled)
        .unwrap_or(id.descriptor().enabled_by_default)
}

/// The full catalog with `effects` laid over it: every identifier is
/// present, and entries missing from `effects` hold their catalog defaults.
pub fn with_defaults(effects: &EffectMap) -> EffectMap {
    let mut full = default_effects();
    full.extend(effects.iter().map(|(id, config)| (*id, config.clone())));
    full
}
