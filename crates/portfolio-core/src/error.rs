//! Error types shared by the visualizer components.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisualizerError {
    /// The host could not build an analyser for the ambient track.
    #[error("audio analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("attach point not found: {0}")]
    MissingAttachPoint(String),

    #[error("playback failed: {0}")]
    Playback(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidParam { key: String, value: String },

    #[error("unknown parameter: {0}")]
    UnknownParam(String),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
