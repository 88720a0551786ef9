//! DSP Error Types

use thiserror::Error;

/// Errors that can occur during DSP operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    #[error("Invalid sweep range: {min}Hz to {max}Hz (need 0 < min < max)")]
    InvalidFrequencyRange { min: f64, max: f64 },

    #[error("Degenerate biquad: leading denominator coefficient a0 is zero")]
    DegenerateCoefficients,
}
