//! Per-frame ripple state machine.
//!
//! Each frame the engine decides which ripples to spawn (passive timer,
//! per-band thresholds, random bursts), draws every live ripple, advances
//! them and retires the ones that reached their terminal radius. Time is
//! passed in by the caller so the engine is deterministic under test.

use crate::bands::{BandKind, BANDS, BAND_COUNT, BURST_SHAPE, PASSIVE_SHAPE};
use crate::constants::*;
use crate::ripple::{CircleStroke, Color, Ripple, RippleOrigin, RippleSurface};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Snapshot of the playback flags the engine reads each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
}

impl PlaybackState {
    #[inline]
    pub fn audible(&self) -> bool {
        self.is_playing && !self.is_muted
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub playback: PlaybackState,
    /// This frame's spectrum, if an analyser is attached.
    pub spectrum: Option<&'a [u8]>,
}

pub type SpawnBatch = SmallVec<[Ripple; 4]>;

pub struct RippleEngine<R: Rng = StdRng> {
    ripples: SmallVec<[Ripple; 32]>,
    last_spawn_ms: [Option<f64>; BAND_COUNT],
    passive_frames: u64,
    center: Vec2,
    rng: R,
}

impl RippleEngine<StdRng> {
    pub fn new(center: Vec2, seed: u64) -> Self {
        Self::with_rng(center, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RippleEngine<R> {
    pub fn with_rng(center: Vec2, rng: R) -> Self {
        Self {
            ripples: SmallVec::new(),
            last_spawn_ms: [None; BAND_COUNT],
            passive_frames: 0,
            center,
            rng,
        }
    }

    #[inline]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Timestamp of the last ripple spawned by `kind`, if any.
    pub fn last_spawn_ms(&self, kind: BandKind) -> Option<f64> {
        self.last_spawn_ms[kind.index()]
    }

    /// One full frame: spawn, draw and advance ripples, then the base circle.
    pub fn frame(&mut self, input: FrameInput<'_>, now_ms: f64, surface: &mut impl RippleSurface) {
        let spawned = self.spawn(input, now_ms);
        if !spawned.is_empty() {
            log::debug!(
                "[ripples] +{} at {:.0}ms (live={})",
                spawned.len(),
                now_ms,
                self.ripples.len() + spawned.len()
            );
        }
        self.ripples.extend(spawned);
        surface.clear();
        self.draw_and_advance(surface);
        surface.stroke_circle(&base_circle(self.center, now_ms));
    }

    /// Decide this frame's new ripples and update the spawn timers.
    ///
    /// Without audible playback or without a spectrum only the passive timer
    /// runs; otherwise bands and bursts are evaluated.
    pub fn spawn(&mut self, input: FrameInput<'_>, now_ms: f64) -> SpawnBatch {
        let mut out = SpawnBatch::new();
        match input.spectrum {
            Some(spectrum) if input.playback.audible() => {
                self.spawn_from_spectrum(spectrum, now_ms, &mut out)
            }
            _ => {
                self.passive_frames += 1;
                if self.passive_frames % PASSIVE_EVERY_FRAMES == 0 {
                    let rng = &mut self.rng;
                    out.push(PASSIVE_SHAPE.spawn_with(|| rng.gen::<f32>(), RippleOrigin::Passive));
                }
            }
        }
        out
    }

    fn spawn_from_spectrum(&mut self, spectrum: &[u8], now_ms: f64, out: &mut SpawnBatch) {
        for (cfg, last) in BANDS.iter().zip(self.last_spawn_ms.iter_mut()) {
            let level = cfg.mean(spectrum);
            if level <= cfg.threshold {
                continue;
            }
            if let Some(t) = *last {
                if now_ms - t <= cfg.min_interval_ms {
                    continue;
                }
            }
            out.push(cfg.shape.spawn(level / 255.0, RippleOrigin::Band(cfg.kind)));
            *last = Some(now_ms);
        }

        let overall = crate::bands::mean(spectrum) / 255.0;
        if overall > BURST_LEVEL && self.rng.gen::<f64>() > BURST_CHANCE {
            let rng = &mut self.rng;
            out.push(BURST_SHAPE.spawn_with(|| rng.gen::<f32>(), RippleOrigin::Burst));
        }
    }

    /// Draw every live ripple at its current radius, then grow it and drop
    /// the ones that reached their terminal radius.
    pub fn draw_and_advance(&mut self, surface: &mut impl RippleSurface) {
        let center = self.center;
        self.ripples.retain(|r| {
            surface.stroke_circle(&r.stroke(center));
            !r.advance()
        });
    }
}

/// The faint water-line circle drawn over the ripples every frame.
pub fn base_circle(center: Vec2, now_ms: f64) -> CircleStroke {
    let pulse = (now_ms / BASE_CIRCLE_PERIOD_MS).sin() as f32 * BASE_CIRCLE_PULSE_PX;
    CircleStroke {
        center,
        radius: BASE_CIRCLE_RADIUS + pulse,
        line_width: BASE_CIRCLE_WIDTH,
        color: Color::Rgba {
            r: 0,
            g: 170,
            b: 255,
            a: 0.2,
        },
        glow_blur: BASE_CIRCLE_GLOW_BLUR,
        glow_color: Color::Rgba {
            r: 0,
            g: 170,
            b: 255,
            a: 0.3,
        },
    }
}

/// Cancellation flag for the frame loop; clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
