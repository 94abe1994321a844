//! Snapshot history (undo/redo) for the editing surface.
//!
//! The undo stack holds every committed buffer state, oldest first. Its
//! bottom entry is the floor: it can never be undone away. The redo stack
//! holds states popped by undo and is cleared whenever a new state is saved.

use super::style::StyleState;

/// Buffer content at one point in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Full buffer text
    pub text: String,
    /// Style flags at the time the snapshot was saved
    pub style: StyleState,
}

impl Snapshot {
    pub fn new(text: impl Into<String>, style: StyleState) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Snapshot with no style flags set
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleState::default())
    }
}

/// Linear undo/redo history with undo and redo stacks.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_size: Option<usize>,
}

impl SnapshotHistory {
    /// Create an empty, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `max_size` undo entries.
    ///
    /// A bound of zero is treated as one so the floor entry always survives.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: Some(max_size.max(1)),
        }
    }

    /// Reset to `snapshot` as the sole undo entry
    pub fn initialize(&mut self, snapshot: Snapshot) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
    }

    /// Push `snapshot` if its text differs from the current top.
    ///
    /// Returns `true` if the snapshot was pushed (and redo cleared).
    pub fn save_if_changed(&mut self, snapshot: Snapshot) -> bool {
        if self
            .current()
            .is_some_and(|top| top.text == snapshot.text)
        {
            return false;
        }

        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        self.trim();
        true
    }

    /// Step back one state, returning the state now current.
    ///
    /// Returns `None` and leaves both stacks untouched when only the floor
    /// entry remains.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let popped = self.undo_stack.pop()?;
        self.redo_stack.push(popped);
        self.undo_stack.last()
    }

    /// Re-apply the most recently undone state, returning it
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(snapshot);
        self.undo_stack.last()
    }

    /// Top of the undo stack
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    fn trim(&mut self) {
        let Some(max) = self.max_size else {
            return;
        };
        if self.undo_stack.len() > max {
            let excess = self.undo_stack.len() - max;
            self.undo_stack.drain(..excess);
        }
    }
}
