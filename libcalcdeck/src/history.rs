//! History ledger
//!
//! Capped, newest-first log of evaluated expressions. Index 0 is always the
//! most recently recorded entry; entries are never mutated after creation.

use std::collections::VecDeque;

use serde::Serialize;

/// Maximum number of entries kept; older ones are dropped silently
pub const HISTORY_CAPACITY: usize = 50;

/// One evaluated expression and its displayed result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub expr: String,
    pub res: String,
}

impl HistoryEntry {
    pub fn new(expr: impl Into<String>, res: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            res: res.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry at the front, dropping the oldest past capacity
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Delete the entry at `index`, returning it if it existed
    pub fn remove_at(&mut self, index: usize) -> Option<HistoryEntry> {
        self.entries.remove(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
