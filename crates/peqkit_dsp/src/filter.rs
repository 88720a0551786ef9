//! Filter shapes supported by a parametric band

use std::fmt;

use serde::{Deserialize, Serialize};

/// Filter type for each EQ band
///
/// The numeric code is stable: it is what the internal `PEQ:` format and
/// structured snapshots store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterType {
    #[default]
    Peaking,
    LowShelf,
    HighShelf,
}

impl FilterType {
    /// All variants, in code order
    pub const ALL: [FilterType; 3] = [
        FilterType::Peaking,
        FilterType::LowShelf,
        FilterType::HighShelf,
    ];

    /// Stable numeric code used by the internal format
    pub fn code(self) -> i32 {
        match self {
            FilterType::Peaking => 0,
            FilterType::LowShelf => 1,
            FilterType::HighShelf => 2,
        }
    }

    /// EqualizerAPO filter label (`PK`, `LSC`, `HSC`)
    pub fn apo_label(self) -> &'static str {
        match self {
            FilterType::Peaking => "PK",
            FilterType::LowShelf => "LSC",
            FilterType::HighShelf => "HSC",
        }
    }

    /// Short label for band lists
    pub fn display_label(self) -> &'static str {
        match self {
            FilterType::Peaking => "PK",
            FilterType::LowShelf => "LS",
            FilterType::HighShelf => "HS",
        }
    }

    /// Look up a filter type by code. Unknown codes fall back to [`FilterType::Peaking`].
    pub fn from_code(code: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .unwrap_or(FilterType::Peaking)
    }

    /// Look up a filter type by EqualizerAPO label, ignoring case.
    ///
    /// Accepts the `LS`/`HS` aliases for the shelf filters.
    pub fn from_apo_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "PK" => Some(FilterType::Peaking),
            "LSC" | "LS" => Some(FilterType::LowShelf),
            "HSC" | "HS" => Some(FilterType::HighShelf),
            _ => None,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}
