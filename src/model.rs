//! Application model - the complete state of the editing surface
//!
//! Holds the buffer, the style flags and the history. Only `update` mutates it.

use crate::config::EditorConfig;
use crate::editable::{Snapshot, SnapshotHistory, StyleState};

/// Complete controller state
#[derive(Debug, Clone)]
pub struct EditorModel {
    /// Current document text
    pub buffer: String,
    /// Last-toggled style intent
    pub style: StyleState,
    /// Undo/redo snapshots of `buffer`
    pub history: SnapshotHistory,
    /// Behaviour switches loaded at startup
    pub config: EditorConfig,
}

impl EditorModel {
    /// Create a model whose history is seeded with `text`
    pub fn new(text: impl Into<String>, config: EditorConfig) -> Self {
        let buffer = text.into();
        let style = StyleState::default();
        let mut history = match config.history_limit {
            Some(limit) => SnapshotHistory::with_max_size(limit),
            None => SnapshotHistory::new(),
        };
        history.initialize(Snapshot::new(buffer.clone(), style));

        Self {
            buffer,
            style,
            history,
            config,
        }
    }

    /// Push the current buffer to history if it differs from the last state
    pub fn save_if_changed(&mut self) -> bool {
        self.history
            .save_if_changed(Snapshot::new(self.buffer.clone(), self.style))
    }

    /// Replace buffer (and optionally style) with a restored snapshot
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.buffer = snapshot.text;
        if self.config.restore_style_on_undo {
            self.style = snapshot.style;
        }
    }
}
