//! Small pieces of page behavior that need no browser to reason about:
//! reveal timing, the scroll crossfade, the quote rotation, card expansion
//! and the particle scatter.

use rand::Rng;
use smallvec::SmallVec;

/// Elements revealed after load, with their delay in milliseconds.
pub const REVEAL_SEQUENCE: &[(&str, u32)] = &[
    (".profile-pic-container", 300),
    ("#name", 800),
    (".bio", 1300),
    (".projects-section", 1600),
    ("footer", 1900),
];

pub const QUOTE_SWAP_DELAY_MS: u32 = 300;

pub const QUOTES: &[&str] = &[
    "\"Two in harmony surpasses one in perfection.\"",
    "\"Code is poetry written for machines to execute and humans to read.\"",
    "\"Creativity is intelligence having fun.\"",
    "\"Success is not final, failure is not fatal: It is the courage to continue that counts.\"",
];

// Scroll crossfade starts 30% of a viewport down and completes over the next 30%.
pub const SCROLL_FADE_START: f64 = 0.3;
pub const SCROLL_FADE_SPAN: f64 = 0.3;

/// Opacities of the two stacked page backgrounds at a scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundBlend {
    pub first: f64,
    pub second: f64,
    pub scrolled: bool,
}

impl BackgroundBlend {
    pub fn at(scroll_y: f64, viewport_h: f64) -> Self {
        let start = viewport_h * SCROLL_FADE_START;
        if scroll_y > start {
            let o = ((scroll_y - start) / (viewport_h * SCROLL_FADE_SPAN)).min(1.0);
            Self {
                first: 1.0 - o,
                second: o,
                scrolled: true,
            }
        } else {
            Self {
                first: 1.0,
                second: 0.0,
                scrolled: false,
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QuoteCycler {
    index: usize,
}

impl QuoteCycler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> &'static str {
        QUOTES[self.index]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % QUOTES.len();
        self.current()
    }
}

/// Expansion state of the project cards; at most one is open.
#[derive(Clone, Debug, Default)]
pub struct CardDeck {
    expanded: Option<usize>,
}

/// `(card index, expanded)` pairs to apply, collapses first.
pub type CardChanges = SmallVec<[(usize, bool); 2]>;

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn toggle(&mut self, index: usize) -> CardChanges {
        let mut changes = CardChanges::new();
        match self.expanded {
            Some(open) if open == index => {
                changes.push((index, false));
                self.expanded = None;
            }
            other => {
                if let Some(open) = other {
                    changes.push((open, false));
                }
                changes.push((index, true));
                self.expanded = Some(index);
            }
        }
        changes
    }
}

pub const PARTICLE_COUNT: usize = 30;

/// Placement and animation timing of one decorative particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f32,
    pub left_vw: f32,
    pub top_vh: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub opacity: f32,
}

pub fn scatter_particles(rng: &mut impl Rng, count: usize) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            size_px: rng.gen::<f32>() * 5.0 + 1.0,
            left_vw: rng.gen::<f32>() * 100.0,
            top_vh: rng.gen::<f32>() * 100.0,
            duration_s: rng.gen::<f32>() * 30.0 + 10.0,
            delay_s: rng.gen::<f32>() * 10.0,
            opacity: rng.gen::<f32>() * 0.7 + 0.3,
        })
        .collect()
}
