//! peqkit Core - Parametric EQ Editing and Interchange
//!
//! This crate provides everything around the DSP math that an EQ editor
//! needs, including:
//! - Observable band list with synchronous, ordered change notification
//! - Band editor sessions that track bands by identity, with rollback
//! - Internal `PEQ:` persistence format, EqualizerAPO import/export and
//!   GraphicEQ curve export
//! - Structured snapshots that keep band identities across session restore
//! - Channel-based change events for other components
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Editor / UI collaborator                  │
//! │   BandEditor ──mutates──▶ BandList ──notifies──▶ observers   │
//! └──────────────────────────────────────────────────────────────┘
//!                 │ synchronous, registration order
//!                 ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  preview: compute_combined_response ─▶ DbRange / GraphicEQ   │
//! │  persist: serialize ─▶ StoredEq      export: EqualizerAPO    │
//! │  fan-out: ChannelObserver ──crossbeam──▶ EqChanged events    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here does I/O or spawns threads. A band list is not shared
//! between threads; callers that need that wrap it in their own lock.

mod band_list;
pub mod codec;
mod config;
mod editor;
mod equalizer;
mod error;
mod message;
mod snapshot;

pub use band_list::{BandList, ListChange, ListObserver, ObserverId};
pub use codec::{ApoImport, ApoImportResult, InternalImport};
pub use config::StoredEq;
pub use editor::{BandDraft, BandEditor};
pub use equalizer::ParametricEq;
pub use error::{CoreError, CoreResult};
pub use message::{ChannelObserver, EqChanged};
pub use snapshot::BandSnapshot;

// Re-export DSP types for convenience
pub use peqkit_dsp::{
    compute_coefficients, compute_combined_response, magnitude_response, Band, BandId,
    BiquadCoefficients, DbRange, DspError, FilterType, ResponsePoint, SweepConfig,
    DEFAULT_SAMPLE_RATE,
};
