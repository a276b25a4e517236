use tracing::debug;

use crate::error::{MealError, Result};
use crate::models::{EntryId, MealEntry};

/// Ordered list of the entries logged for one session.
///
/// Duplicates are allowed: logging the same food twice yields two lines.
#[derive(Debug, Clone, Default)]
pub struct MealLedger {
    entries: Vec<MealEntry>,
}

impl MealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn append(&mut self, entry: MealEntry) -> EntryId {
        let id = entry.id;
        debug!(entry = %entry.name, id = %id, position = self.entries.len(), "Appending meal entry");
        self.entries.push(entry);
        id
    }

    /// Remove the entry at `index`, shifting later entries down.
    ///
    /// The ledger is left unchanged when the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<MealEntry> {
        if index >= self.entries.len() {
            return Err(MealError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        debug!(entry = %removed.name, index, remaining = self.entries.len(), "Removed meal entry");
        Ok(removed)
    }

    /// Remove the entry with the given id.
    pub fn remove(&mut self, id: EntryId) -> Result<MealEntry> {
        let index = self
            .position(id)
            .ok_or(MealError::EntryNotFound(id))?;
        self.remove_at(index)
    }

    /// Current position of an entry.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.entries.len(), "Clearing meal ledger");
        self.entries.clear();
    }

    /// Owned copy of the current entries.
    pub fn snapshot(&self) -> Vec<MealEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    /// Display names in order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> MealEntry {
        MealEntry::new(name.to_string(), 100.0, 5.0, 10.0, 2.0, 1.0)
    }

    fn sample_ledger() -> MealLedger {
        let mut ledger = MealLedger::new();
        ledger.append(entry("A"));
        ledger.append(entry("B"));
        ledger.append(entry("C"));
        ledger
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut ledger = sample_ledger();
        ledger.append(entry("A"));
        assert_eq!(ledger.names(), vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn test_remove_at_shifts_entries() {
        let mut ledger = sample_ledger();
        let removed = ledger.remove_at(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(ledger.names(), vec!["B", "C"]);
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_ledger() {
        let mut ledger = sample_ledger();
        let err = ledger.remove_at(3).unwrap_err();
        assert!(matches!(err, MealError::IndexOutOfRange { index: 3, len: 3 }));
        assert!(err.is_stale_reference());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_remove_by_id() {
        let mut ledger = sample_ledger();
        let id = ledger.entries()[1].id;

        let removed = ledger.remove(id).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(ledger.names(), vec!["A", "C"]);

        let err = ledger.remove(id).unwrap_err();
        assert!(matches!(err, MealError::EntryNotFound(missing) if missing == id));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut ledger = sample_ledger();
        let snapshot = ledger.snapshot();
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(snapshot.len(), 3);
    }
}
