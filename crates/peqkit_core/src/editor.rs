//! Band editor session
//!
//! Edits are applied live to the band list so the preview follows the
//! user's input, and can still be rolled back. The session tracks the edited
//! band by [`BandId`], never by value: another band may hold identical
//! parameters.

use tracing::{debug, warn};

use peqkit_dsp::{Band, BandId, FilterType};

use crate::band_list::BandList;

/// Parameters currently shown in the editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDraft {
    pub frequency: f64,
    pub gain: f64,
    pub q: f64,
    pub filter_type: FilterType,
}

impl From<&Band> for BandDraft {
    fn from(band: &Band) -> Self {
        Self {
            frequency: band.frequency(),
            gain: band.gain(),
            q: band.q(),
            filter_type: band.filter_type(),
        }
    }
}

impl Default for BandDraft {
    fn default() -> Self {
        Self::from(&Band::editor_default())
    }
}

/// Tracks one add-or-edit session against a [`BandList`]
#[derive(Debug, Default)]
pub struct BandEditor {
    active: bool,
    tracked: Option<BandId>,
    backup: Option<Band>,
}

impl BandEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Id of the band the session is changing, once it exists in the list
    pub fn tracked_id(&self) -> Option<BandId> {
        self.tracked
    }

    /// Start adding a new band. The band only appears on the first [`apply`](Self::apply).
    ///
    /// Returns `None` while another session is active.
    pub fn begin_add(&mut self) -> Option<BandDraft> {
        if self.active {
            return None;
        }
        self.active = true;
        self.tracked = None;
        self.backup = None;
        Some(BandDraft::default())
    }

    /// Start editing the band at `index`
    ///
    /// Returns `None` while another session is active or if `index` is out of range.
    pub fn begin_edit(&mut self, list: &BandList, index: usize) -> Option<BandDraft> {
        if self.active {
            return None;
        }
        let band = *list.get(index)?;
        self.active = true;
        self.tracked = Some(band.id());
        self.backup = Some(band);
        Some(BandDraft::from(&band))
    }

    /// Push the draft into the list
    ///
    /// Returns the id of the band that now holds the draft, or `None` if no
    /// session is active or the tracked band has disappeared.
    pub fn apply(&mut self, list: &mut BandList, draft: BandDraft) -> Option<BandId> {
        if !self.active {
            return None;
        }

        match self.tracked {
            None => {
                let band = Band::new(draft.frequency, draft.gain, draft.q, draft.filter_type);
                list.append(band);
                self.tracked = Some(band.id());
                debug!(
                    "apply: tracking new band {} for {} Hz {} dB Q{} {}",
                    band.id(),
                    draft.frequency,
                    draft.gain,
                    draft.q,
                    draft.filter_type
                );
                Some(band.id())
            }
            Some(id) => {
                let Some(index) = list.index_of(id) else {
                    warn!("apply: failed to find band {}", id);
                    return None;
                };
                debug!("apply: modifying band {}", id);
                let band =
                    Band::with_id(draft.frequency, draft.gain, draft.q, draft.filter_type, id);
                list.replace_at(index, band);
                Some(id)
            }
        }
    }

    /// Roll back everything this session did and end it
    pub fn discard(&mut self, list: &mut BandList) {
        match (self.tracked, self.backup) {
            (Some(id), Some(backup)) => match list.index_of(id) {
                Some(index) => {
                    debug!("discard: reverting modifications to band {}", id);
                    list.replace_at(index, backup);
                }
                None => warn!("discard: failed to find band {}", id),
            },
            (Some(id), None) => {
                debug!("discard: reverting addition of band {}", id);
                list.remove_where(|band| band.id() == id);
            }
            (None, _) => {}
        }
        self.end();
    }

    /// Keep the applied changes and end the session
    pub fn commit(&mut self) -> Option<BandId> {
        let committed = self.tracked;
        debug!("commit: confirming changes to band {:?}", committed);
        self.end();
        committed
    }

    fn end(&mut self) {
        self.active = false;
        self.tracked = None;
        self.backup = None;
    }
}
