//! Editing core for the stylepad surface.
//!
//! # Architecture
//!
//! - [`markup`]: pure functions computing styled buffer text
//! - [`SnapshotHistory`]: linear undo/redo over whole-buffer [`Snapshot`]s
//! - [`StyleState`] / [`StyleKind`]: the bold/italic toggle flags
//!
//! # Example
//!
//! ```
//! use stylepad::editable::{markup, Snapshot, SnapshotHistory, StyleState};
//!
//! let mut history = SnapshotHistory::new();
//! history.initialize(Snapshot::plain("Hello"));
//!
//! let bold = StyleState::new(true, false);
//! let styled = markup::compute_styled_text("Hello", bold);
//! history.save_if_changed(Snapshot::new(styled.clone(), bold));
//!
//! assert_eq!(styled, "<b>Hello</b>");
//! assert_eq!(history.undo().map(|s| s.text.as_str()), Some("Hello"));
//! ```

mod history;
pub mod markup;
mod style;

pub use history::{Snapshot, SnapshotHistory};
pub use markup::MarkupMode;
pub use style::{StyleKind, StyleState};
