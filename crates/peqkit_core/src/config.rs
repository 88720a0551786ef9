//! Persisted Equalizer Configuration
//!
//! [`StoredEq`] is the record a key-value store or settings file keeps for
//! the parametric EQ. Reading and writing it is the embedding application's
//! job; this crate only converts to and from it.

use serde::{Deserialize, Serialize};

use crate::codec::internal;

/// Persisted parametric EQ state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEq {
    /// Bands in the internal `PEQ:` format
    #[serde(default = "default_bands")]
    pub bands: String,

    /// Preamp in dB, as last set by the user
    #[serde(default)]
    pub preamp_db: f64,
}

fn default_bands() -> String {
    internal::serialize(&[])
}

impl Default for StoredEq {
    fn default() -> Self {
        Self {
            bands: default_bands(),
            preamp_db: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let stored = StoredEq::default();
        assert_eq!(stored.bands, "PEQ: ");
        assert_eq!(stored.preamp_db, 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let stored: StoredEq = serde_json::from_str(r#"{"preamp_db": -4.5}"#).unwrap();
        assert_eq!(stored.bands, "PEQ: ");
        assert_eq!(stored.preamp_db, -4.5);

        let stored: StoredEq = serde_json::from_str("{}").unwrap();
        assert_eq!(stored, StoredEq::default());
    }

    #[test]
    fn test_serialization_round_trip() {
        let stored = StoredEq {
            bands: "PEQ: 1000 3 1.41 0; ".to_string(),
            preamp_db: -3.0,
        };

        let json = serde_json::to_string(&stored).unwrap();
        let deserialized: StoredEq = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, stored);
    }
}
