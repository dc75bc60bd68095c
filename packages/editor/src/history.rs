//! # Undo/Redo History
//!
//! Tracks structural editing history as deep-copied snapshots of the
//! mutable state and enables linear undo/redo.
//!
//! ## Design
//!
//! - A snapshot of {sections, fields} is pushed *before* each structural
//!   mutation
//! - Undo steps the cursor back and restores the snapshot there; at the
//!   tip, the live state is first captured so redo has a target
//! - Redo steps the cursor forward symmetrically
//! - A new push discards everything past the cursor (the redo tail)
//! - The list is bounded; the oldest entry is evicted past capacity
//!
//! Snapshots are independent deep copies in both directions: the live
//! model and history never share mutable structure, otherwise an undo
//! would mutate through aliased state.

use formwright_schema::{Field, Section};
use std::collections::HashMap;
use uuid::Uuid;

/// Default maximum number of history entries
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Deep copy of the structural state at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub sections: Vec<Section>,
    pub fields: HashMap<Uuid, Vec<Field>>,
}

/// Bounded snapshot list with a cursor
#[derive(Debug)]
pub struct History {
    entries: Vec<Snapshot>,
    /// Index of the entry describing the live state; equals
    /// `entries.len()` while the live state has not been captured yet
    cursor: usize,
    max_depth: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth,
        }
    }

    /// Record the state preceding a structural mutation.
    ///
    /// Truncates the redo tail, appends, and evicts the oldest entry
    /// once the list exceeds its maximum depth.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor);
        self.entries.push(snapshot);
        self.cursor = self.entries.len();

        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one entry, returning the state to install.
    ///
    /// `live` is the current model state; when undoing from the tip it
    /// is captured so a later redo can return here. Returns None at the
    /// first entry: that snapshot is the state before the first
    /// structural edit, a terminal position rather than an error.
    pub fn undo(&mut self, live: &Snapshot) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        if self.cursor == self.entries.len() {
            self.entries.push(live.clone());
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Step forward one entry, returning the state to install
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
