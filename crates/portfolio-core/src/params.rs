use crate::constants::*;
use crate::error::{Result, VisualizerError};

/// Runtime parameters for the ambient track and its visualizer.
///
/// Defaults come from `constants.rs`; the page may override a subset through
/// `data-*` attributes on the profile container (see [`apply_override`]).
///
/// [`apply_override`]: VisualizerParams::apply_override
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerParams {
    pub audio_src: String,
    pub volume: f64,
    pub canvas_size_px: u32,
    pub fft_size: u32,
    pub smoothing: f64,
    pub analysis_delay_ms: u32,
    pub muted_canvas_opacity: f32,
}

impl Default for VisualizerParams {
    fn default() -> Self {
        Self {
            audio_src: AMBIENT_SRC.to_string(),
            volume: AMBIENT_VOLUME,
            canvas_size_px: CANVAS_SIZE_PX,
            fft_size: FFT_SIZE,
            smoothing: ANALYSER_SMOOTHING,
            analysis_delay_ms: ANALYSIS_DELAY_MS,
            muted_canvas_opacity: MUTED_CANVAS_OPACITY,
        }
    }
}

impl VisualizerParams {
    /// Apply one `key=value` override. Keys are the dataset names without the
    /// `data-` prefix (`audio-src`, `audio-volume`).
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || VisualizerError::InvalidParam {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "audio-src" => {
                let src = value.trim();
                if src.is_empty() {
                    return Err(invalid());
                }
                self.audio_src = src.to_string();
            }
            "audio-volume" => {
                let v: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid());
                }
                self.volume = v;
            }
            _ => return Err(VisualizerError::UnknownParam(key.to_string())),
        }
        Ok(())
    }

    /// Number of analyser bins produced for the configured transform size.
    #[inline]
    pub fn bin_count(&self) -> usize {
        (self.fft_size / 2) as usize
    }
}
