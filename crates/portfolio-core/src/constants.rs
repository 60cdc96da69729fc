// Visualizer tuning constants shared by the engine and the web frontend.

// Canvas
pub const CANVAS_SIZE_PX: u32 = 220; // square logical drawing surface

// Ripple geometry
pub const RIPPLE_START_RADIUS: f32 = 50.0; // every ripple is born on the water line
pub const RIPPLE_COLOR_SATURATION: f32 = 90.0;
pub const RIPPLE_COLOR_LIGHTNESS: f32 = 60.0;
pub const RIPPLE_GLOW_BLUR: f32 = 10.0;
pub const RIPPLE_GLOW_ALPHA: f32 = 0.5;
pub const RIPPLE_THINNING: f32 = 0.5; // fraction of width lost by the time a ripple retires

// Base circle (water surface)
pub const BASE_CIRCLE_RADIUS: f32 = 50.0;
pub const BASE_CIRCLE_PULSE_PX: f32 = 2.0;
pub const BASE_CIRCLE_PERIOD_MS: f64 = 1000.0; // sin(t / period), ~2π s per cycle
pub const BASE_CIRCLE_WIDTH: f32 = 1.5;
pub const BASE_CIRCLE_GLOW_BLUR: f32 = 5.0;

// Passive ripples while audio is absent or muted
pub const PASSIVE_EVERY_FRAMES: u64 = 120;

// Burst ripples driven by the full spectrum
pub const BURST_LEVEL: f32 = 0.15; // normalized full-spectrum mean
pub const BURST_CHANCE: f64 = 0.85; // uniform draw must exceed this

// Analyser
pub const FFT_SIZE: u32 = 256;
pub const SPECTRUM_BINS: usize = (FFT_SIZE / 2) as usize;
pub const ANALYSER_SMOOTHING: f64 = 0.8;
pub const ANALYSIS_DELAY_MS: u32 = 100; // let playback settle before tapping it

// Playback
pub const AMBIENT_SRC: &str = "audio/ambient/ocean.mp3";
pub const AMBIENT_VOLUME: f64 = 0.15;
pub const MUTED_CANVAS_OPACITY: f32 = 0.2;

// UI sounds
pub const UI_SOUND_VOLUME: f64 = 0.1;

// Notices
pub const NOTICE_ENABLE_AUDIO: &str = "Click anywhere to enable ocean sounds";
pub const NOTICE_LOAD_ERROR: &str = "Error loading ocean sound. Click here to retry.";
