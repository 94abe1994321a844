//! Style flags for whole-buffer inline markup.

use serde::{Deserialize, Serialize};

/// Which inline style a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Bold,
    Italic,
}

/// The last-toggled style intent.
///
/// These flags describe what the user asked for most recently, not what
/// markup the buffer actually contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
}

impl StyleState {
    pub fn new(bold: bool, italic: bool) -> Self {
        Self { bold, italic }
    }

    /// Flip the flag for `kind`, returning its new value
    pub fn toggle(&mut self, kind: StyleKind) -> bool {
        let flag = match kind {
            StyleKind::Bold => &mut self.bold,
            StyleKind::Italic => &mut self.italic,
        };
        *flag = !*flag;
        *flag
    }

    pub fn is_active(&self, kind: StyleKind) -> bool {
        match kind {
            StyleKind::Bold => self.bold,
            StyleKind::Italic => self.italic,
        }
    }

    /// True when neither flag is set
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_target_flag() {
        let mut style = StyleState::default();
        assert!(style.toggle(StyleKind::Bold));
        assert!(style.bold);
        assert!(!style.italic);

        assert!(!style.toggle(StyleKind::Bold));
        assert!(style.is_plain());
    }

    #[test]
    fn test_is_active() {
        let style = StyleState::new(false, true);
        assert!(!style.is_active(StyleKind::Bold));
        assert!(style.is_active(StyleKind::Italic));
        assert!(!style.is_plain());
    }
}
