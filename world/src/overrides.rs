//! Persistent record of player-caused deviations from the oracle defaults.

use std::collections::BTreeMap;

use tokenfield_core::{session::OverrideRecord, CellCoord, TokenValue};

/// Recorded deviation for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellOverride {
    /// The cell must never respawn until the store is reset.
    Deleted,
    /// Respawns start from this token instead of the oracle default.
    ///
    /// `Value(TokenValue::EMPTY)` is a live, interactable cell and is never
    /// collapsed into [`CellOverride::Deleted`].
    Value(TokenValue),
}

/// Three-way answer produced when consulting the store for a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverrideState {
    /// No override recorded; the oracle default applies.
    Unset,
    /// The cell must not spawn at all.
    Deleted,
    /// Respawns start from this token.
    Value(TokenValue),
}

/// Map from cell coordinate to its authoritative override.
///
/// Membership is independent of which cells are currently active; only
/// explicit [`save`](OverrideStore::save) calls mutate the store.
#[derive(Clone, Debug, Default)]
pub struct OverrideStore {
    records: BTreeMap<CellCoord, CellOverride>,
}

impl OverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Records `record` as authoritative for the cell, replacing any prior.
    pub fn save(&mut self, cell: CellCoord, record: CellOverride) {
        let _ = self.records.insert(cell, record);
    }

    /// Consults the store for a cell without mutating it.
    #[must_use]
    pub fn restore(&self, cell: CellCoord) -> OverrideState {
        match self.records.get(&cell) {
            None => OverrideState::Unset,
            Some(CellOverride::Deleted) => OverrideState::Deleted,
            Some(CellOverride::Value(token)) => OverrideState::Value(*token),
        }
    }

    /// Exports every recorded override in canonical key order.
    #[must_use]
    pub fn records(&self) -> Vec<OverrideRecord> {
        self.records
            .iter()
            .map(|(cell, record)| OverrideRecord {
                key: cell.key(),
                token: match record {
                    CellOverride::Deleted => None,
                    CellOverride::Value(token) => Some(*token),
                },
            })
            .collect()
    }

    /// Bulk-imports previously persisted records, replacing the current set.
    ///
    /// Records whose keys fail to parse are skipped so that a corrupt entry
    /// never takes the rest of the session down with it.
    pub fn load_all(&mut self, records: &[OverrideRecord]) {
        self.records.clear();
        for record in records {
            let Some(cell) = CellCoord::parse_key(&record.key) else {
                continue;
            };
            let value = match record.token {
                None => CellOverride::Deleted,
                Some(token) => CellOverride::Value(token),
            };
            let _ = self.records.insert(cell, value);
        }
    }

    /// Clears every override; the new-game operation.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Number of recorded overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Reports whether any override is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
