//! Linear undo/redo over full snapshots
//!
//! The stack always holds at least one entry. The cursor points at the entry
//! that is currently shown; entries after it are the redo branch and are
//! discarded by the next push.

/// Snapshot history with a cursor
#[derive(Clone, Debug)]
pub struct HistoryStack<T> {
    entries: Vec<T>,
    cursor: usize,
    /// Maximum number of entries kept, oldest are dropped first
    limit: Option<usize>,
}

impl<T> HistoryStack<T> {
    /// Create a history seeded with its initial snapshot
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Create a bounded history, a limit below 1 is treated as 1
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        let mut stack = Self::new(initial);
        stack.limit = limit.map(|l| l.max(1));
        stack
    }

    /// Rebuild a history from stored entries
    ///
    /// Returns `None` if `entries` is empty or `cursor` is out of range.
    pub fn from_entries(entries: Vec<T>, cursor: usize, limit: Option<usize>) -> Option<Self> {
        if cursor >= entries.len() {
            return None;
        }
        let mut stack = Self {
            entries,
            cursor,
            limit: limit.map(|l| l.max(1)),
        };
        stack.enforce_limit();
        Some(stack)
    }

    /// Push a snapshot, discarding the redo branch
    pub fn push(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        self.enforce_limit();
    }

    /// Step back, returns the snapshot now current or `None` if already at the oldest entry
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward, returns the snapshot now current or `None` if already at the newest entry
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, a history is never empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of steps that can be undone
    pub fn undo_len(&self) -> usize {
        self.cursor
    }

    /// Number of steps that can be redone
    pub fn redo_len(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            // never drop the current entry
            let excess = excess.min(self.cursor);
            self.entries.drain(..excess);
            self.cursor -= excess;
        }
    }
}
