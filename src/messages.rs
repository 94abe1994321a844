//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::editable::StyleKind;

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Flip a style flag and re-style the whole buffer
    ToggleStyle(StyleKind),
    /// The host widget's text changed outside the controller's own writes
    TextChanged(String),
    /// Step back one history state
    Undo,
    /// Re-apply the last undone state
    Redo,
}

impl Msg {
    /// Check if this message navigates history rather than committing an edit
    pub fn is_history_navigation(&self) -> bool {
        matches!(self, Msg::Undo | Msg::Redo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_history_navigation() {
        assert!(Msg::Undo.is_history_navigation());
        assert!(Msg::Redo.is_history_navigation());
        assert!(!Msg::ToggleStyle(StyleKind::Bold).is_history_navigation());
        assert!(!Msg::TextChanged("x".into()).is_history_navigation());
    }
}
