//! Frequency bands and the ripple shapes they spawn.
//!
//! The spectrum is cut into three contiguous bands by position, measured in
//! fifths of its length with integer truncation: `bin = len * fifth / 5`.
//! For the usual 128 bins that gives low `0..25`, mid `25..102`, high `102..128`.

use crate::constants::RIPPLE_START_RADIUS;
use crate::ripple::{Ripple, RippleOrigin};
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandKind {
    Low,
    Mid,
    High,
}

impl BandKind {
    /// Position of this band in [`BANDS`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            BandKind::Low => 0,
            BandKind::Mid => 1,
            BandKind::High => 2,
        }
    }
}

/// `base + span * x`, with `x` a normalized energy or a uniform draw in [0, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear {
    pub base: f32,
    pub span: f32,
}

impl Linear {
    pub const fn new(base: f32, span: f32) -> Self {
        Self { base, span }
    }

    pub const fn fixed(value: f32) -> Self {
        Self {
            base: value,
            span: 0.0,
        }
    }

    #[inline]
    pub fn at(&self, x: f32) -> f32 {
        self.base + self.span * x
    }
}

/// Per-field formulas for a freshly spawned ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleShape {
    pub max_radius: Linear,
    pub opacity: Linear,
    pub line_width: Linear,
    pub speed: Linear,
    pub hue: Linear,
}

impl RippleShape {
    /// Every field driven by the same input (a band's normalized energy).
    pub fn spawn(&self, x: f32, origin: RippleOrigin) -> Ripple {
        self.spawn_with(|| x, origin)
    }

    /// Each field takes its own input from `draw`, called once per field in
    /// declaration order.
    pub fn spawn_with(&self, mut draw: impl FnMut() -> f32, origin: RippleOrigin) -> Ripple {
        Ripple {
            radius: RIPPLE_START_RADIUS,
            max_radius: self.max_radius.at(draw()),
            opacity: self.opacity.at(draw()),
            line_width: self.line_width.at(draw()),
            speed: self.speed.at(draw()),
            hue: self.hue.at(draw()),
            origin,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandConfig {
    pub kind: BandKind,
    /// Start and end of the band in fifths of the spectrum length.
    pub fifths: (usize, usize),
    /// Band mean (0..255) must exceed this to spawn.
    pub threshold: f32,
    /// Time since this band's previous spawn must exceed this.
    pub min_interval_ms: f64,
    pub shape: RippleShape,
}

impl BandConfig {
    pub fn range(&self, len: usize) -> Range<usize> {
        len * self.fifths.0 / 5..len * self.fifths.1 / 5
    }

    /// Arithmetic mean of this band's bins; 0 when the band is empty.
    pub fn mean(&self, spectrum: &[u8]) -> f32 {
        mean(&spectrum[self.range(spectrum.len())])
    }
}

pub const BAND_COUNT: usize = 3;

pub const BANDS: [BandConfig; BAND_COUNT] = [
    BandConfig {
        kind: BandKind::Low,
        fifths: (0, 1),
        threshold: 70.0,
        min_interval_ms: 200.0,
        shape: RippleShape {
            max_radius: Linear::new(105.0, 35.0),
            opacity: Linear::new(0.15, 0.4),
            line_width: Linear::new(1.5, 2.5),
            speed: Linear::new(0.7, 0.7),
            hue: Linear::new(195.0, 15.0),
        },
    },
    BandConfig {
        kind: BandKind::Mid,
        fifths: (1, 4),
        threshold: 60.0,
        min_interval_ms: 140.0,
        shape: RippleShape {
            max_radius: Linear::new(90.0, 40.0),
            opacity: Linear::new(0.2, 0.4),
            line_width: Linear::new(1.5, 2.0),
            speed: Linear::new(0.9, 0.7),
            hue: Linear::new(205.0, 20.0),
        },
    },
    BandConfig {
        kind: BandKind::High,
        fifths: (4, 5),
        threshold: 40.0,
        min_interval_ms: 100.0,
        shape: RippleShape {
            max_radius: Linear::new(80.0, 35.0),
            opacity: Linear::new(0.15, 0.5),
            line_width: Linear::new(1.0, 2.0),
            speed: Linear::new(1.2, 0.8),
            hue: Linear::new(210.0, 25.0),
        },
    },
];

/// Random extra ripple added on loud frames, every field drawn independently.
pub const BURST_SHAPE: RippleShape = RippleShape {
    max_radius: Linear::new(60.0, 50.0),
    opacity: Linear::new(0.1, 0.3),
    line_width: Linear::new(1.0, 2.0),
    speed: Linear::new(0.8, 1.2),
    hue: Linear::new(190.0, 30.0),
};

/// Gentle ripple keeping the visualizer alive without sound.
pub const PASSIVE_SHAPE: RippleShape = RippleShape {
    max_radius: Linear::new(100.0, 20.0),
    opacity: Linear::fixed(0.5),
    line_width: Linear::fixed(1.5),
    speed: Linear::new(0.5, 0.3),
    hue: Linear::new(200.0, 20.0),
};

#[inline]
pub fn band(kind: BandKind) -> &'static BandConfig {
    &BANDS[kind.index()]
}

/// Mean magnitude of a run of bins, 0 for an empty run.
#[inline]
pub fn mean(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    bins.iter().map(|&v| v as u32).sum::<u32>() as f32 / bins.len() as f32
}
