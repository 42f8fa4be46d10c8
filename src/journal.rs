// journal.rs - Cyclic navigation over the journal entries
//
// Index arithmetic always wraps; the boundaries are never an error.

use crate::scene::JournalEntry;

pub struct Journal {
    entries: &'static [JournalEntry],
    index: usize,
}

impl Journal {
    pub fn new(entries: &'static [JournalEntry]) -> Self {
        Self { entries, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static JournalEntry> {
        self.entries.get(self.index)
    }

    /// Advance one entry, wrapping past the end
    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.entries.len();
    }

    /// Step back one entry, wrapping past the start
    pub fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.index = (self.index + self.entries.len() - 1) % self.entries.len();
    }
}
