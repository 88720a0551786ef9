//! Core Error Types

use thiserror::Error;

/// Errors that can occur in peqkit core
///
/// Malformed codec input is never an error; parsers report what they
/// skipped instead.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("DSP error: {0}")]
    DspError(#[from] peqkit_dsp::DspError),

    #[error("Invalid band snapshot: {0}")]
    SnapshotError(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
