//! Effect compiler: turns effect toggles into filter-graph fragments.
//!
//! The compiler walks [`COMPILE_TABLE`] in order and, for every enabled
//! step, appends that step's fixed fragments to the matching output list.
//! Steps never interact: enabling both `speed_up` and `slow_down` yields
//! both tempo fragments, in table order.

use ytp_project_model::effect::{is_enabled, EffectId, EffectMap};

use self::Fragment::{Audio, Note, Overlay, Video};

/// One fixed contribution of an effect to the compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Video(&'static str),
    Audio(&'static str),
    Overlay(&'static str),
    /// Human-readable note for effects without real processing.
    Note(&'static str),
}

/// Output of [`compile`]: four lists, each in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectResult {
    pub video_filters: Vec<String>,
    pub audio_filters: Vec<String>,
    pub overlays: Vec<String>,
    pub notes: Vec<String>,
}

impl EffectResult {
    fn push(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Video(f) => self.video_filters.push(f.to_string()),
            Fragment::Audio(f) => self.audio_filters.push(f.to_string()),
            Fragment::Overlay(f) => self.overlays.push(f.to_string()),
            Fragment::Note(f) => self.notes.push(f.to_string()),
        }
    }

    /// True when neither stream has any filter fragment.
    pub fn has_no_filters(&self) -> bool {
        self.video_filters.is_empty() && self.audio_filters.is_empty()
    }
}

/// The identifier → fragment table, in compile order.
///
/// `RandomClipShuffle` appears twice: once near the top and once at the end.
pub const COMPILE_TABLE: &[(EffectId, &[Fragment])] = &[
    (
        EffectId::RandomSound,
        &[Note("Random sound overlay enabled; will mix from assets.")],
    ),
    (
        EffectId::RandomClipShuffle,
        &[Note("Remix shuffle enabled for render v2.")],
    ),
    (EffectId::Reverse, &[Audio("areverse"), Video("reverse")]),
    (
        EffectId::SpeedUp,
        &[Audio("atempo=1.25"), Video("setpts=PTS/1.25")],
    ),
    (
        EffectId::SlowDown,
        &[Audio("atempo=0.8"), Video("setpts=PTS/0.8")],
    ),
    (EffectId::Chorus, &[Audio("aecho=0.8:0.9:1000:0.3")]),
    (
        EffectId::Vibrato,
        &[Audio("asetrate=48000*1.02,atempo=1/1.02")],
    ),
    (
        EffectId::Stutter,
        &[Note("Stutter effect selected; will loop short slices.")],
    ),
    (EffectId::RandomCuts, &[Note("Random cuts enabled.")]),
    (
        EffectId::RecallPostRender,
        &[Note("Recall post-render effect placeholder.")],
    ),
    (EffectId::GetDown, &[Note("Get down effect preset enabled.")]),
    (
        EffectId::TemporalScramble,
        &[Note("Temporal scramble effect enabled.")],
    ),
    (
        EffectId::HighHarmony,
        &[Audio("asetrate=48000*1.15,atempo=1/1.15")],
    ),
    (
        EffectId::LowHarmony,
        &[Audio("asetrate=48000*0.85,atempo=1/0.85")],
    ),
    (
        EffectId::Fearful,
        &[Video("eq=contrast=1.2:brightness=-0.1"), Audio("tremolo=f=6")],
    ),
    (
        EffectId::HalfReversed,
        &[Note("Half-reversed effect placeholder.")],
    ),
    (EffectId::PitchShift, &[Note("Pitch shift effect placeholder.")]),
    (
        EffectId::MirrorSymmetry,
        &[Note("Mirror symmetry effect placeholder.")],
    ),
    (EffectId::HueRotate, &[Video("hue=h=90")]),
    (EffectId::Spadinner, &[Overlay("spadinner_assets")]),
    (EffectId::Confusion, &[Note("Confusion effect placeholder.")]),
    (EffectId::OverlayPlusThree, &[Overlay("overlay_plus_three")]),
    (
        EffectId::YtpmvAuto,
        &[Note("YTPMV automatic effect placeholder.")],
    ),
    (EffectId::Earrape, &[Audio("volume=10")]),
    (
        EffectId::AutotuneChaos,
        &[Note("Auto-tune requires external tool; placeholder only.")],
    ),
    (EffectId::Dance, &[Video("hue=s=1")]),
    (
        EffectId::Squidward,
        &[Note("Squidward effect uses ImageMagick overlay assets.")],
    ),
    (EffectId::Invert, &[Video("negate")]),
    (EffectId::Rainbow, &[Overlay("rainbow_overlay")]),
    (EffectId::Mirror, &[Video("hflip")]),
    (
        EffectId::Sus,
        &[Note("Sus effect uses random pitch/tempo wobble.")],
    ),
    (EffectId::ExplosionSpam, &[Overlay("explosion_overlays")]),
    (
        EffectId::FrameShuffle,
        &[Note("Frame shuffle placeholder; sample implementation.")],
    ),
    (EffectId::MemeInjection, &[Overlay("meme_injection")]),
    (
        EffectId::SentenceMix,
        &[Note("Sentence mixing enabled; reorder segments.")],
    ),
    (
        EffectId::RandomClipShuffle,
        &[Note("Random clip shuffle enabled.")],
    ),
];

/// Compile effect toggles into filter fragments.
///
/// Identifiers missing from `effects` use their catalog default. Probability
/// and max level are ignored.
pub fn compile(effects: &EffectMap) -> EffectResult {
    let mut result = EffectResult::default();
    for (id, fragments) in COMPILE_TABLE {
        if is_enabled(effects, *id) {
            for fragment in fragments.iter() {
                result.push(*fragment);
            }
        }
    }
    result
}

/// Every fragment `id` contributes when enabled, in table order.
pub fn fragments_for(id: EffectId) -> Vec<Fragment> {
    COMPILE_TABLE
        .iter()
        .filter(|(step, _)| *step == id)
        .flat_map(|(_, fragments)| fragments.iter().copied())
        .collect()
}
