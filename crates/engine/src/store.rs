//! Border state store.
//!
//! The authoritative list of active border records, unique by id. Order is
//! insertion order and is only kept so enumeration is deterministic.
//!
//! INVARIANT: no stored record has all four edges hidden. `upsert` evicts
//! such a record instead of storing it.

use cellborders_core::{BorderRecord, CellRange};

/// What `upsert` did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// New id, appended at the end.
    Inserted,
    /// Existing id, replaced in place.
    Replaced,
    /// Record was fully hidden; any stored record with its id was dropped.
    Evicted,
}

impl UpsertOutcome {
    pub fn is_evicted(&self) -> bool {
        matches!(self, UpsertOutcome::Evicted)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BorderStore {
    records: Vec<BorderRecord>,
}

impl BorderStore {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Insert, replace, or evict depending on the record's hidden edge count.
    pub fn upsert(&mut self, record: BorderRecord) -> UpsertOutcome {
        if record.is_fully_hidden() {
            self.remove_by_id(&record.id);
            return UpsertOutcome::Evicted;
        }

        match self.position(&record.id) {
            Some(idx) => {
                self.records[idx] = record;
                UpsertOutcome::Replaced
            }
            None => {
                self.records.push(record);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Remove the record with this id. No-op if absent.
    pub fn remove_by_id(&mut self, id: &str) -> Option<BorderRecord> {
        self.position(id).map(|idx| self.records.remove(idx))
    }

    /// Stored records inside `range`, in store order.
    pub fn query_range(&self, range: CellRange) -> impl Iterator<Item = &BorderRecord> + '_ {
        self.records.iter().filter(move |r| range.contains(r.row, r.col))
    }

    pub fn get(&self, id: &str) -> Option<&BorderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn records(&self) -> &[BorderRecord] {
        &self.records
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    /// Remove everything, returning the records in store order.
    pub fn drain(&mut self) -> Vec<BorderRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
