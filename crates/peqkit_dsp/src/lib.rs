//! peqkit DSP - Parametric EQ Design Math
//!
//! This crate provides the numeric side of peqkit:
//! - Parametric band model with value equality and a separate identity
//! - RBJ cookbook biquad coefficients (peaking, low shelf, high shelf)
//! - Magnitude response of single biquads and of whole band cascades
//! - Hand-off of normalized coefficients to runtime `biquad` filters
//!
//! # Architecture
//!
//! Everything here is a pure function of its inputs. Nothing filters audio
//! sample by sample; responses are evaluated in the frequency domain for
//! design and preview.

mod band;
mod coefficients;
mod error;
mod filter;
mod response;

pub use band::{Band, BandId, DEFAULT_BAND_FREQUENCY, DEFAULT_BAND_GAIN_DB, DEFAULT_BAND_Q};
pub use coefficients::{compute_coefficients, BiquadCoefficients, DEFAULT_SAMPLE_RATE};
pub use error::DspError;
pub use filter::FilterType;
pub use response::{
    compute_combined_response, log_spaced_frequencies, magnitude_response, DbRange, ResponsePoint,
    SweepConfig, MIN_DISPLAY_DB, PREVIEW_POINTS,
};
