//! Bridge between the host's frequency analyser and the ripple engine.

use crate::error::VisualizerError;

/// A host facility that can fill a buffer with byte frequency magnitudes.
pub trait SpectrumSource {
    fn bin_count(&self) -> usize;
    fn read_bytes(&self, out: &mut [u8]);
}

#[derive(Debug)]
enum BridgeState<S> {
    Detached,
    Attached(S),
    Unavailable,
}

/// Lazily attached analyser. Attachment is attempted at most once; a failed
/// attempt leaves the bridge permanently unavailable and the engine runs on
/// passive ripples only.
#[derive(Debug)]
pub struct AnalysisBridge<S> {
    state: BridgeState<S>,
    buf: Vec<u8>,
}

impl<S> Default for AnalysisBridge<S> {
    fn default() -> Self {
        Self {
            state: BridgeState::Detached,
            buf: Vec::new(),
        }
    }
}

impl<S: SpectrumSource> AnalysisBridge<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the source with `build` if nothing has been attempted yet.
    /// Returns true when this call attached a new source.
    pub fn attach_with<F>(&mut self, build: F) -> bool
    where
        F: FnOnce() -> Result<S, VisualizerError>,
    {
        if !matches!(self.state, BridgeState::Detached) {
            return false;
        }
        match build() {
            Ok(source) => {
                self.buf = vec![0; source.bin_count()];
                log::info!("[analysis] attached ({} bins)", self.buf.len());
                self.state = BridgeState::Attached(source);
                true
            }
            Err(e) => {
                log::error!("[analysis] {}", e);
                self.state = BridgeState::Unavailable;
                false
            }
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        matches!(self.state, BridgeState::Attached(_))
    }

    #[inline]
    pub fn is_unavailable(&self) -> bool {
        matches!(self.state, BridgeState::Unavailable)
    }

    /// Current spectrum, refreshed from the source on every call.
    pub fn sample(&mut self) -> Option<&[u8]> {
        match &self.state {
            BridgeState::Attached(source) => {
                if self.buf.len() != source.bin_count() {
                    self.buf.resize(source.bin_count(), 0);
                }
                source.read_bytes(&mut self.buf);
                Some(&self.buf)
            }
            _ => None,
        }
    }
}
