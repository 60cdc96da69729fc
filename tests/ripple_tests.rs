// Host-side tests for the ripple lifecycle and the per-frame engine loop.
// The web crate is wasm-only, so these drive portfolio-core directly.

use glam::Vec2;
use portfolio_core::constants::*;
use portfolio_core::*;
use rand::RngCore;

/// Rng that always yields the same word, so draws are predictable.
struct FixedRng(u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }
    fn next_u64(&mut self) -> u64 {
        self.0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0 as u8);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    strokes: Vec<CircleStroke>,
}

impl RippleSurface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn stroke_circle(&mut self, circle: &CircleStroke) {
        self.strokes.push(circle.clone());
    }
}

const PLAYING: PlaybackState = PlaybackState {
    is_playing: true,
    is_muted: false,
};
const PAUSED: PlaybackState = PlaybackState {
    is_playing: false,
    is_muted: false,
};
const MUTED: PlaybackState = PlaybackState {
    is_playing: true,
    is_muted: true,
};

fn low_band_spectrum(level: u8) -> Vec<u8> {
    let mut s = vec![0u8; SPECTRUM_BINS];
    for v in &mut s[..SPECTRUM_BINS / 5] {
        *v = level;
    }
    s
}

fn engine() -> RippleEngine<FixedRng> {
    RippleEngine::with_rng(Vec2::splat(110.0), FixedRng(0))
}

fn ripple(radius: f32, max_radius: f32) -> Ripple {
    Ripple {
        radius,
        max_radius,
        opacity: 0.6,
        line_width: 3.0,
        speed: 1.0,
        hue: 200.0,
        origin: RippleOrigin::Passive,
    }
}

#[test]
fn alpha_fades_linearly_to_zero() {
    let mut prev = f32::INFINITY;
    for r in (50..=120).map(|r| r as f32) {
        let a = ripple(r, 120.0).alpha();
        let expected = 0.6 * (1.0 - r / 120.0);
        assert!((a - expected).abs() < 1e-6, "alpha at r={r}: {a} != {expected}");
        assert!(a <= prev);
        prev = a;
    }
    assert_eq!(ripple(120.0, 120.0).alpha(), 0.0);
}

#[test]
fn alpha_is_clamped_past_max_radius() {
    assert_eq!(ripple(130.0, 120.0).alpha(), 0.0);
}

#[test]
fn ripple_grows_every_frame_and_retires_on_the_crossing_frame() {
    let mut engine = engine();
    let mut surface = RecordingSurface::default();
    let spectrum = low_band_spectrum(200);
    engine.frame(
        FrameInput {
            playback: PLAYING,
            spectrum: Some(&spectrum),
        },
        1000.0,
        &mut surface,
    );
    assert_eq!(engine.ripples().len(), 1);
    let spawned = engine.ripples()[0].clone();
    assert_eq!(spawned.origin, RippleOrigin::Band(BandKind::Low));

    // Frames needed for a radius of 50 to reach max_radius at this speed.
    let mut expected = 0;
    let mut r = RIPPLE_START_RADIUS;
    loop {
        expected += 1;
        r += spawned.speed;
        if r >= spawned.max_radius {
            break;
        }
    }

    let mut frames = 1;
    let mut prev = spawned.radius;
    let mut t = 1000.0;
    while let Some(live) = engine
        .ripples()
        .iter()
        .find(|r| r.origin == RippleOrigin::Band(BandKind::Low))
        .cloned()
    {
        assert!(live.radius >= prev, "radius shrank");
        assert!(live.radius < live.max_radius, "retired ripple still live");
        prev = live.radius;
        t += 16.0;
        engine.frame(
            FrameInput {
                playback: PAUSED,
                spectrum: None,
            },
            t,
            &mut surface,
        );
        frames += 1;
        assert!(frames < 1000, "ripple never retired");
    }
    assert_eq!(frames, expected);

    // Drawn once per frame it was live, never after.
    let drawn = surface
        .strokes
        .iter()
        .filter(|s| matches!(s.color, Color::Hsla { .. }))
        .count();
    assert_eq!(drawn, expected);
}

#[test]
fn every_frame_clears_and_ends_with_the_base_circle() {
    let mut engine = engine();
    let mut surface = RecordingSurface::default();
    engine.frame(
        FrameInput {
            playback: PAUSED,
            spectrum: None,
        },
        0.0,
        &mut surface,
    );
    assert_eq!(surface.clears, 1);
    let last = surface.strokes.last().expect("base circle");
    assert_eq!(last.radius, BASE_CIRCLE_RADIUS);
    assert_eq!(last.center, Vec2::splat(110.0));
    assert_eq!(last.color.to_string(), "rgba(0, 170, 255, 0.2)");
}

#[test]
fn base_circle_pulses_two_pixels() {
    let peak = base_circle(Vec2::ZERO, 1000.0 * std::f64::consts::FRAC_PI_2);
    assert!((peak.radius - 52.0).abs() < 1e-4);
    let trough = base_circle(Vec2::ZERO, 1000.0 * 3.0 * std::f64::consts::FRAC_PI_2);
    assert!((trough.radius - 48.0).abs() < 1e-4);
}

#[test]
fn passive_ripples_every_120_frames_while_muted() {
    let mut engine = engine();
    let spectrum = vec![255u8; SPECTRUM_BINS];
    let mut spawn_frames = Vec::new();
    for frame in 1..=360u64 {
        let batch = engine.spawn(
            FrameInput {
                playback: MUTED,
                spectrum: Some(&spectrum),
            },
            frame as f64 * 16.0,
        );
        for r in &batch {
            assert_eq!(r.origin, RippleOrigin::Passive);
            assert_eq!(r.opacity, 0.5);
            assert!((200.0..=220.0).contains(&r.hue));
        }
        if !batch.is_empty() {
            spawn_frames.push(frame);
        }
    }
    assert_eq!(spawn_frames, vec![120, 240, 360]);
    assert_eq!(engine.last_spawn_ms(BandKind::Low), None);
    assert_eq!(engine.last_spawn_ms(BandKind::Mid), None);
    assert_eq!(engine.last_spawn_ms(BandKind::High), None);
}

#[test]
fn missing_analysis_falls_back_to_passive_ripples() {
    let mut engine = engine();
    let spawned: usize = (1..=PASSIVE_EVERY_FRAMES)
        .map(|f| {
            engine
                .spawn(
                    FrameInput {
                        playback: PLAYING,
                        spectrum: None,
                    },
                    f as f64,
                )
                .len()
        })
        .sum();
    assert_eq!(spawned, 1);
}

#[test]
fn passive_counter_pauses_while_audio_drives_spawns() {
    let mut engine = engine();
    let quiet = vec![0u8; SPECTRUM_BINS];
    for f in 0..100 {
        engine.spawn(
            FrameInput {
                playback: PAUSED,
                spectrum: None,
            },
            f as f64,
        );
    }
    for f in 100..300 {
        let batch = engine.spawn(
            FrameInput {
                playback: PLAYING,
                spectrum: Some(&quiet),
            },
            f as f64,
        );
        assert!(batch.is_empty());
    }
    let mut spawned_at = None;
    for n in 1..=20 {
        let batch = engine.spawn(
            FrameInput {
                playback: PAUSED,
                spectrum: None,
            },
            300.0 + n as f64,
        );
        if !batch.is_empty() {
            spawned_at = Some(n);
            break;
        }
    }
    assert_eq!(spawned_at, Some(20));
}

#[test]
fn loop_handle_clones_share_cancellation() {
    let handle = LoopHandle::new();
    let seen_by_loop = handle.clone();
    assert!(!seen_by_loop.is_cancelled());
    handle.cancel();
    assert!(seen_by_loop.is_cancelled());
}
