//! Structured band snapshot for session restore
//!
//! Stores bands as parallel attribute arrays plus their ids, so a restored
//! editor still tracks the same band identities. Unlike the text codecs
//! this keeps full `f64` precision.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use peqkit_dsp::{Band, BandId, FilterType};

use crate::error::CoreResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandSnapshot {
    #[serde(default)]
    pub frequency: Option<Vec<f64>>,
    #[serde(default)]
    pub gain: Option<Vec<f64>>,
    #[serde(default)]
    pub q: Option<Vec<f64>>,
    /// Filter type codes
    #[serde(default)]
    pub filter_type: Option<Vec<i32>>,
    #[serde(default)]
    pub id: Option<Vec<Uuid>>,
}

impl BandSnapshot {
    pub fn from_bands(bands: &[Band]) -> Self {
        Self {
            frequency: Some(bands.iter().map(Band::frequency).collect()),
            gain: Some(bands.iter().map(Band::gain).collect()),
            q: Some(bands.iter().map(Band::q).collect()),
            filter_type: Some(bands.iter().map(|b| b.filter_type().code()).collect()),
            id: Some(bands.iter().map(|b| *b.id().as_uuid()).collect()),
        }
    }

    /// Rebuild the bands
    ///
    /// Uses the shortest attribute array. Bands without a stored id get a
    /// fresh one; a missing attribute array yields no bands.
    pub fn to_bands(&self) -> Vec<Band> {
        let (Some(frequency), Some(gain), Some(q), Some(types)) =
            (&self.frequency, &self.gain, &self.q, &self.filter_type)
        else {
            return Vec::new();
        };

        let count = frequency.len().min(gain.len()).min(q.len()).min(types.len());
        (0..count)
            .map(|i| {
                let id = self
                    .id
                    .as_ref()
                    .and_then(|ids| ids.get(i))
                    .map(|uuid| BandId::from_uuid(*uuid))
                    .unwrap_or_default();
                Band::with_id(frequency[i], gain[i], q[i], FilterType::from_code(types[i]), id)
            })
            .collect()
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
