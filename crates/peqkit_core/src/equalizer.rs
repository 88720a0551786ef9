//! Parametric Equalizer State
//!
//! Pairs the band list with the preamp that is stored next to it. The
//! preamp is clamped to [-30, 0] dB only when it comes from an EqualizerAPO
//! import; values set directly are kept as given.

use peqkit_dsp::{DbRange, ResponsePoint, SweepConfig};

use crate::band_list::BandList;
use crate::codec::{graphic_eq, ApoImportResult};
use crate::config::StoredEq;
use crate::error::CoreResult;

#[derive(Debug, Default)]
pub struct ParametricEq {
    bands: BandList,
    preamp_db: f64,
}

impl ParametricEq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted state, dropping malformed band records
    pub fn from_stored(stored: &StoredEq) -> Self {
        let mut eq = Self::new();
        eq.bands.deserialize(&stored.bands);
        eq.preamp_db = stored.preamp_db;
        eq
    }

    pub fn to_stored(&self) -> StoredEq {
        StoredEq {
            bands: self.bands.serialize(),
            preamp_db: self.preamp_db,
        }
    }

    pub fn bands(&self) -> &BandList {
        &self.bands
    }

    /// Mutable access for edits and observer registration
    pub fn bands_mut(&mut self) -> &mut BandList {
        &mut self.bands
    }

    pub fn preamp_db(&self) -> f64 {
        self.preamp_db
    }

    /// Set the preamp as entered by the user (not clamped)
    pub fn set_preamp_db(&mut self, preamp_db: f64) {
        self.preamp_db = preamp_db;
    }

    /// Replace bands and preamp from EqualizerAPO text
    pub fn import_apo(&mut self, text: &str) -> ApoImportResult {
        let result = self.bands.import_apo(text);
        self.preamp_db = result.preamp_db;
        result
    }

    pub fn export_apo(&self) -> String {
        self.bands.to_apo_string(self.preamp_db)
    }

    /// Combined band response, without the preamp
    pub fn combined_response(&self, config: &SweepConfig) -> CoreResult<Vec<ResponsePoint>> {
        config.validate()?;
        Ok(self.bands.combined_response(config))
    }

    /// GraphicEQ export of the sampled response, offset by the preamp
    pub fn graphic_eq(&self, config: &SweepConfig) -> CoreResult<String> {
        let response = self.combined_response(config)?;
        Ok(graphic_eq::to_graphic_eq_string(&response, self.preamp_db))
    }

    /// Axis range for previewing the response with the preamp applied
    pub fn display_range(&self, config: &SweepConfig) -> CoreResult<DbRange> {
        let response = self.combined_response(config)?;
        Ok(DbRange::for_curve(&response, self.preamp_db))
    }

    /// Remove all bands and zero the preamp
    pub fn reset(&mut self) {
        self.bands.replace_all(Vec::new());
        self.preamp_db = 0.0;
    }
}
