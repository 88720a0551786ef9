//! Parametric EQ band definition
//!
//! A [`Band`] is an immutable value. Equality and hashing only look at the
//! audio parameters; the [`BandId`] follows one band across edits so an
//! editor can find "its" band again even when another band has the same
//! values.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coefficients::{compute_coefficients, BiquadCoefficients};
use crate::filter::FilterType;

/// Default values for a freshly added band (Hz, dB, Q)
pub const DEFAULT_BAND_FREQUENCY: f64 = 1000.0;
pub const DEFAULT_BAND_GAIN_DB: f64 = 0.0;
pub const DEFAULT_BAND_Q: f64 = 1.41;

/// Opaque identity of a band, generated once and carried through edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandId(Uuid);

impl BandId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BandId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Single parametric EQ band
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Band {
    frequency: f64,
    gain: f64,
    q: f64,
    filter_type: FilterType,
    id: BandId,
}

impl Band {
    /// Create a band with a fresh identity
    pub fn new(frequency: f64, gain: f64, q: f64, filter_type: FilterType) -> Self {
        Self::with_id(frequency, gain, q, filter_type, BandId::new())
    }

    /// Create a band carrying an existing identity (session restore, edits)
    pub fn with_id(frequency: f64, gain: f64, q: f64, filter_type: FilterType, id: BandId) -> Self {
        Self {
            frequency,
            gain,
            q,
            filter_type,
            id,
        }
    }

    /// The band an editor starts from when the user adds one
    pub fn editor_default() -> Self {
        Self::new(
            DEFAULT_BAND_FREQUENCY,
            DEFAULT_BAND_GAIN_DB,
            DEFAULT_BAND_Q,
            FilterType::Peaking,
        )
    }

    /// Replacement value for this band: new parameters, same identity
    pub fn edited(&self, frequency: f64, gain: f64, q: f64, filter_type: FilterType) -> Self {
        Self::with_id(frequency, gain, q, filter_type, self.id)
    }

    /// Center/corner frequency in Hz
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Gain in dB
    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    pub fn id(&self) -> BandId {
        self.id
    }

    /// Biquad coefficients for this band at `sample_rate`
    pub fn coefficients(&self, sample_rate: f64) -> BiquadCoefficients {
        compute_coefficients(self.frequency, self.gain, self.q, self.filter_type, sample_rate)
    }

    fn value_key(&self) -> (u64, u64, u64, FilterType) {
        (
            canonical_bits(self.frequency),
            canonical_bits(self.gain),
            canonical_bits(self.q),
            self.filter_type,
        )
    }
}

/// Bit pattern with `-0.0` folded into `0.0` and every NaN folded into one,
/// so `Eq` stays reflexive and agrees with `Hash`.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Band {
    fn eq(&self, other: &Self) -> bool {
        self.value_key() == other.value_key()
    }
}

impl Eq for Band {}

impl Hash for Band {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_key().hash(state);
    }
}
