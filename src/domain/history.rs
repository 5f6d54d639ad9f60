//! Append-only status history for a demand
//!
//! Entries are never edited or deleted; ordering is by entry date, with
//! insertion order breaking ties.

use crate::schemas::StatusHistoryEntry;

/// The append-only transition history of one demand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<StatusHistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        HistoryLog { entries: Vec::new() }
    }

    /// Build a log from existing entries (e.g. a backend response)
    pub fn from_entries(entries: Vec<StatusHistoryEntry>) -> Self {
        HistoryLog { entries }
    }

    /// Append a new entry. The only way the log grows.
    pub fn append(&mut self, entry: StatusHistoryEntry) {
        self.entries.push(entry);
    }

    /// Entries in ascending date order (stable, so ties keep append order)
    pub fn chronological(&self) -> Vec<&StatusHistoryEntry> {
        let mut sorted: Vec<&StatusHistoryEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.date);
        sorted
    }

    /// The most recent entry by date, if any
    pub fn latest(&self) -> Option<&StatusHistoryEntry> {
        self.chronological().last().copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
