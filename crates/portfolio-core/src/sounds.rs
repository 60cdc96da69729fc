//! UI sound bank: short clips for hover, click and card expansion.
//!
//! Hover and click rotate through their clips so repeated interactions do
//! not sound identical. The bank only picks clip paths; playing them is the
//! frontend's job.

use crate::playback::MuteSync;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Hover,
    Click,
    Expand,
}

pub const HOVER_CLIPS: &[&str] = &[
    "audio/ui/hover1.wav",
    "audio/ui/hover2.wav",
    "audio/ui/hover3.wav",
];
pub const CLICK_CLIPS: &[&str] = &[
    "audio/ui/click1.wav",
    "audio/ui/click2.wav",
    "audio/ui/click3.wav",
];
pub const EXPAND_CLIPS: &[&str] = &["audio/ui/mechanical.wav"];

#[derive(Clone, Debug)]
struct Rotation {
    clips: &'static [&'static str],
    cursor: usize,
}

impl Rotation {
    fn next(&mut self) -> Option<&'static str> {
        let clip = *self.clips.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.clips.len();
        Some(clip)
    }
}

#[derive(Clone, Debug)]
pub struct UiSounds {
    banks: FnvHashMap<SoundKind, Rotation>,
    muted: bool,
}

impl Default for UiSounds {
    fn default() -> Self {
        let mut banks = FnvHashMap::default();
        for (kind, clips) in [
            (SoundKind::Hover, HOVER_CLIPS),
            (SoundKind::Click, CLICK_CLIPS),
            (SoundKind::Expand, EXPAND_CLIPS),
        ] {
            banks.insert(kind, Rotation { clips, cursor: 0 });
        }
        Self {
            banks,
            muted: false,
        }
    }
}

impl UiSounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every clip path the bank can return, for preloading.
    pub fn all_clips() -> impl Iterator<Item = &'static str> {
        HOVER_CLIPS
            .iter()
            .chain(CLICK_CLIPS)
            .chain(EXPAND_CLIPS)
            .copied()
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Next clip for `kind`, or `None` while muted. Muted calls do not
    /// advance the rotation.
    pub fn next_clip(&mut self, kind: SoundKind) -> Option<&'static str> {
        if self.muted {
            return None;
        }
        self.banks.get_mut(&kind)?.next()
    }
}

impl MuteSync for UiSounds {
    fn sync_mute_state(&mut self, muted: bool) {
        self.muted = muted;
    }
}
