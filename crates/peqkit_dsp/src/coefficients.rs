//! Biquad coefficient synthesis
//!
//! Closed-form designs from the RBJ (Robert Bristow-Johnson) Audio EQ Cookbook.
//! Coefficients are returned unnormalized: `a0` is generally not 1, and the
//! response evaluator always works with the full ratio.

use std::f64::consts::PI;

use biquad::Coefficients;

use crate::error::DspError;
use crate::filter::FilterType;

/// Sample rate used for previews when the caller has no device rate
pub const DEFAULT_SAMPLE_RATE: f64 = 48000.0;

/// Coefficients of `H(z) = (b0 + b1 z^-1 + b2 z^-2) / (a0 + a1 z^-1 + a2 z^-2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoefficients {
    /// Normalize by `a0` into the form runtime biquad filters expect
    pub fn to_biquad(&self) -> Result<Coefficients<f64>, DspError> {
        if self.a0 == 0.0 {
            return Err(DspError::DegenerateCoefficients);
        }

        Ok(Coefficients {
            a1: self.a1 / self.a0,
            a2: self.a2 / self.a0,
            b0: self.b0 / self.a0,
            b1: self.b1 / self.a0,
            b2: self.b2 / self.a0,
        })
    }
}

/// Compute biquad coefficients for one parametric band
///
/// `gain_db` is the boost/cut in dB, `q` the quality factor. No range
/// validation is performed on `frequency` or `q`.
pub fn compute_coefficients(
    frequency: f64,
    gain_db: f64,
    q: f64,
    filter_type: FilterType,
    sample_rate: f64,
) -> BiquadCoefficients {
    // Square root of the linear gain
    let a = 10.0_f64.powf(gain_db / 40.0);
    let omega = 2.0 * PI * frequency / sample_rate;
    let (sin_omega, cos_omega) = omega.sin_cos();
    let alpha = sin_omega / (2.0 * q);

    match filter_type {
        FilterType::Peaking => BiquadCoefficients {
            b0: 1.0 + alpha * a,
            b1: -2.0 * cos_omega,
            b2: 1.0 - alpha * a,
            a0: 1.0 + alpha / a,
            a1: -2.0 * cos_omega,
            a2: 1.0 - alpha / a,
        },
        FilterType::LowShelf => {
            let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
            BiquadCoefficients {
                b0: a * ((a + 1.0) - (a - 1.0) * cos_omega + two_sqrt_a_alpha),
                b1: 2.0 * a * ((a - 1.0) - (a + 1.0) * cos_omega),
                b2: a * ((a + 1.0) - (a - 1.0) * cos_omega - two_sqrt_a_alpha),
                a0: (a + 1.0) + (a - 1.0) * cos_omega + two_sqrt_a_alpha,
                a1: -2.0 * ((a - 1.0) + (a + 1.0) * cos_omega),
                a2: (a + 1.0) + (a - 1.0) * cos_omega - two_sqrt_a_alpha,
            }
        }
        FilterType::HighShelf => {
            let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
            BiquadCoefficients {
                b0: a * ((a + 1.0) + (a - 1.0) * cos_omega + two_sqrt_a_alpha),
                b1: -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_omega),
                b2: a * ((a + 1.0) + (a - 1.0) * cos_omega - two_sqrt_a_alpha),
                a0: (a + 1.0) - (a - 1.0) * cos_omega + two_sqrt_a_alpha,
                a1: 2.0 * ((a - 1.0) - (a + 1.0) * cos_omega),
                a2: (a + 1.0) - (a - 1.0) * cos_omega - two_sqrt_a_alpha,
            }
        }
    }
}
