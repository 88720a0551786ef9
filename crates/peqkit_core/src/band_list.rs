//! Ordered, observable list of parametric bands
//!
//! Order matters: it is the display order and the `Filter <n>` numbering on
//! export. Every structural mutation notifies all registered observers
//! synchronously, in registration order, before the mutating call returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use peqkit_dsp::{compute_combined_response, Band, BandId, ResponsePoint, SweepConfig};

use crate::codec::{apo, internal, ApoImportResult};
use crate::snapshot::BandSnapshot;

/// What a mutation did to the list
///
/// `Reset` means "anything may have changed"; the range variants let a
/// renderer refresh only the affected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ListChange {
    /// Contents replaced wholesale
    Reset,
    Inserted { start: usize, count: usize },
    Removed { start: usize, count: usize },
    Replaced { start: usize, count: usize },
    Moved { from: usize, to: usize },
}

impl ListChange {
    pub fn is_bulk(&self) -> bool {
        matches!(self, ListChange::Reset)
    }
}

/// Receives list mutations
///
/// Implemented for any `FnMut(&[Band], &ListChange)` closure.
pub trait ListObserver {
    /// Called after the change has been applied; `bands` is the new contents
    fn on_change(&mut self, bands: &[Band], change: &ListChange);
}

impl<F> ListObserver for F
where
    F: FnMut(&[Band], &ListChange),
{
    fn on_change(&mut self, bands: &[Band], change: &ListChange) {
        self(bands, change)
    }
}

/// Handle returned by [`BandList::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The band list an editor works on
#[derive(Default)]
pub struct BandList {
    bands: Vec<Band>,
    observers: Vec<(ObserverId, Box<dyn ListObserver>)>,
    next_observer: u64,
}

impl fmt::Debug for BandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandList")
            .field("bands", &self.bands)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl BandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing bands without notifying anyone
    pub fn from_bands(bands: Vec<Band>) -> Self {
        Self {
            bands,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Band> {
        self.bands.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Band> {
        self.bands.iter()
    }

    pub fn as_slice(&self) -> &[Band] {
        &self.bands
    }

    /// Position of the band with identity `id`
    ///
    /// Looks at identity only, so it tells apart bands that compare equal.
    pub fn index_of(&self, id: BandId) -> Option<usize> {
        self.bands.iter().position(|band| band.id() == id)
    }

    pub fn append(&mut self, band: Band) {
        self.bands.push(band);
        let start = self.bands.len() - 1;
        self.notify(ListChange::Inserted { start, count: 1 });
    }

    /// Remove and return the band at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Band {
        let removed = self.bands.remove(index);
        self.notify(ListChange::Removed {
            start: index,
            count: 1,
        });
        removed
    }

    /// Remove every band matching `predicate`, returning how many went
    ///
    /// Notifies once (as a reset) if anything was removed.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Band) -> bool,
    {
        let before = self.bands.len();
        self.bands.retain(|band| !predicate(band));
        let removed = before - self.bands.len();
        if removed > 0 {
            self.notify(ListChange::Reset);
        }
        removed
    }

    /// Put `band` at `index`, returning the band it replaced
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, band: Band) -> Band {
        let old = std::mem::replace(&mut self.bands[index], band);
        self.notify(ListChange::Replaced {
            start: index,
            count: 1,
        });
        old
    }

    /// Move the band at `from` so that it ends up at `to`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn move_band(&mut self, from: usize, to: usize) {
        assert!(
            from < self.bands.len() && to < self.bands.len(),
            "move_band({}, {}) out of range for {} bands",
            from,
            to,
            self.bands.len()
        );
        if from == to {
            return;
        }
        let band = self.bands.remove(from);
        self.bands.insert(to, band);
        self.notify(ListChange::Moved { from, to });
    }

    pub fn clear(&mut self) {
        let count = self.bands.len();
        if count == 0 {
            return;
        }
        self.bands.clear();
        self.notify(ListChange::Removed { start: 0, count });
    }

    /// Replace all contents at once with a single reset notification
    pub fn replace_all<I>(&mut self, bands: I)
    where
        I: IntoIterator<Item = Band>,
    {
        self.bands = bands.into_iter().collect();
        self.notify(ListChange::Reset);
    }

    /// Register an observer; it sees every later mutation
    pub fn register<O>(&mut self, observer: O) -> ObserverId
    where
        O: ListObserver + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: ListChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_change(&self.bands, &change);
        }
    }
}

/// Codec and preview conveniences
impl BandList {
    /// Encode as an internal `PEQ:` string
    pub fn serialize(&self) -> String {
        internal::serialize(&self.bands)
    }

    /// Replace the contents from an internal `PEQ:` string
    ///
    /// Returns the number of malformed segments that were dropped.
    pub fn deserialize(&mut self, text: &str) -> usize {
        let import = internal::deserialize(text);
        self.replace_all(import.bands);
        import.dropped_segments
    }

    /// Export as EqualizerAPO text with the given preamp
    pub fn to_apo_string(&self, preamp_db: f64) -> String {
        apo::to_apo_string(&self.bands, preamp_db)
    }

    /// Replace the contents from EqualizerAPO text
    pub fn import_apo(&mut self, text: &str) -> ApoImportResult {
        let import = apo::from_apo_string(text);
        self.replace_all(import.bands);
        import.result
    }

    /// Structured snapshot that preserves band identities
    pub fn snapshot(&self) -> BandSnapshot {
        BandSnapshot::from_bands(&self.bands)
    }

    /// Replace the contents from a structured snapshot
    pub fn restore(&mut self, snapshot: &BandSnapshot) {
        self.replace_all(snapshot.to_bands());
    }

    /// Combined response of all bands over `config`'s grid
    pub fn combined_response(&self, config: &SweepConfig) -> Vec<ResponsePoint> {
        compute_combined_response(&self.bands, config)
    }
}

impl<'a> IntoIterator for &'a BandList {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
