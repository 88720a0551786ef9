//! Text Codecs
//!
//! Three independent, stateless formats:
//! - [`internal`]: `PEQ:` strings used for persistence, round-trips bands
//! - [`apo`]: EqualizerAPO configuration text, lossy interchange
//! - [`graphic_eq`]: tabulated response curve, export only
//!
//! Numbers are always written with a `.` decimal point regardless of locale.

pub mod apo;
pub mod graphic_eq;
pub mod internal;
mod number;

pub use apo::{ApoImport, ApoImportResult, PREAMP_MAX_DB, PREAMP_MIN_DB};
pub use graphic_eq::to_graphic_eq_string;
pub use internal::InternalImport;
