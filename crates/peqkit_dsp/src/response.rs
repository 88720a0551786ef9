//! Frequency-response evaluation
//!
//! Evaluates `|H(e^jw)|` of single biquads and combines a whole band list
//! over a log-spaced frequency sweep. Cascaded sections multiply in the
//! linear domain, so their dB magnitudes add exactly.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::band::Band;
use crate::coefficients::{BiquadCoefficients, DEFAULT_SAMPLE_RATE};
use crate::error::DspError;

/// Sample density of the editor's preview surface
pub const PREVIEW_POINTS: usize = 256;

/// Smallest dB window a preview axis shrinks to (symmetric around 0 dB)
pub const MIN_DISPLAY_DB: f64 = 15.0;

/// Sampling grid for a combined response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of log-spaced sample points (both ends included)
    pub num_points: usize,

    /// Lowest sampled frequency in Hz
    pub min_freq: f64,

    /// Highest sampled frequency in Hz
    pub max_freq: f64,

    /// Sample rate the coefficients are designed for
    pub sample_rate: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_points: 512,
            min_freq: 20.0,
            max_freq: 20000.0,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl SweepConfig {
    /// Grid used by the on-screen preview
    pub fn preview() -> Self {
        Self {
            num_points: PREVIEW_POINTS,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DspError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(DspError::InvalidSampleRate(self.sample_rate));
        }
        // Written so that NaN bounds fail too
        if !(self.min_freq > 0.0 && self.min_freq < self.max_freq && self.max_freq.is_finite()) {
            return Err(DspError::InvalidFrequencyRange {
                min: self.min_freq,
                max: self.max_freq,
            });
        }
        Ok(())
    }
}

/// One sample of a response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsePoint {
    pub frequency: f64,
    pub gain_db: f64,
}

/// Magnitude of `H(e^jw)` in dB at `frequency`
///
/// Returns 0 dB when the denominator vanishes instead of dividing by zero.
pub fn magnitude_response(coeffs: &BiquadCoefficients, frequency: f64, sample_rate: f64) -> f64 {
    let omega = 2.0 * PI * frequency / sample_rate;
    let z1 = Complex64::from_polar(1.0, -omega);
    let z2 = Complex64::from_polar(1.0, -2.0 * omega);

    let num = coeffs.b0 + z1 * coeffs.b1 + z2 * coeffs.b2;
    let den = coeffs.a0 + z1 * coeffs.a1 + z2 * coeffs.a2;

    let den_mag_sq = den.norm_sqr();
    if den_mag_sq > 0.0 {
        10.0 * (num.norm_sqr() / den_mag_sq).log10()
    } else {
        0.0
    }
}

/// Log-uniform frequencies from `min_freq` to `max_freq`, both included
pub fn log_spaced_frequencies(config: &SweepConfig) -> Vec<f64> {
    let log_min = config.min_freq.ln();
    let log_max = config.max_freq.ln();

    match config.num_points {
        0 => Vec::new(),
        1 => vec![config.min_freq],
        n => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    (log_min + t * (log_max - log_min)).exp()
                })
                .collect()
        }
    }
}

/// Combined magnitude response of a band cascade over the sweep grid
///
/// An empty band list yields an empty curve; callers draw a flat line
/// themselves.
pub fn compute_combined_response(bands: &[Band], config: &SweepConfig) -> Vec<ResponsePoint> {
    if bands.is_empty() {
        return Vec::new();
    }

    let all_coeffs: Vec<BiquadCoefficients> = bands
        .iter()
        .map(|band| band.coefficients(config.sample_rate))
        .collect();

    log_spaced_frequencies(config)
        .into_iter()
        .map(|frequency| ResponsePoint {
            frequency,
            gain_db: all_coeffs
                .iter()
                .map(|coeffs| magnitude_response(coeffs, frequency, config.sample_rate))
                .sum(),
        })
        .collect()
}

/// Vertical axis range for drawing a curve, in whole dB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbRange {
    pub min_db: i32,
    pub max_db: i32,
}

impl Default for DbRange {
    fn default() -> Self {
        Self {
            min_db: -MIN_DISPLAY_DB as i32,
            max_db: MIN_DISPLAY_DB as i32,
        }
    }
}

impl DbRange {
    /// Range that fits `points` offset by `preamp_db`, never narrower than ±15 dB
    pub fn for_curve(points: &[ResponsePoint], preamp_db: f64) -> Self {
        let min_gain = points
            .iter()
            .map(|p| p.gain_db)
            .reduce(f64::min)
            .unwrap_or(0.0)
            + preamp_db;
        let max_gain = points
            .iter()
            .map(|p| p.gain_db)
            .reduce(f64::max)
            .unwrap_or(0.0)
            + preamp_db;

        Self {
            min_db: min_gain.min(-MIN_DISPLAY_DB).floor() as i32,
            max_db: max_gain.max(MIN_DISPLAY_DB).ceil() as i32,
        }
    }

    pub fn span(&self) -> i32 {
        self.max_db - self.min_db
    }
}
