//! Whole-buffer bold/italic markup.
//!
//! Two strategies are provided:
//!
//! - [`compute_styled_text`] wraps whatever the buffer currently holds. It is
//!   not idempotent: toggling a second style while the first is active wraps
//!   the already-wrapped text again, so markers nest.
//! - [`render`] strips existing markers first and then wraps, so the output
//!   only ever carries one layer of markup.
//!
//! [`MarkupMode`] selects between them at runtime.

use serde::{Deserialize, Serialize};

use super::style::StyleState;

pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";
pub const ITALIC_OPEN: &str = "<i>";
pub const ITALIC_CLOSE: &str = "</i>";

/// Bold outer, italic inner
pub const BOLD_ITALIC_OPEN: &str = "<b><i>";
pub const BOLD_ITALIC_CLOSE: &str = "</i></b>";

const MARKERS: [&str; 4] = [BOLD_OPEN, BOLD_CLOSE, ITALIC_OPEN, ITALIC_CLOSE];

/// How style toggles rewrite the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Wrap the current buffer as-is (markers may nest)
    #[default]
    Literal,
    /// Strip markers, then wrap once
    Canonical,
}

/// Compute the new buffer text for `style`, applied to `current` verbatim.
pub fn compute_styled_text(current: &str, style: StyleState) -> String {
    match (style.bold, style.italic) {
        (true, true) => wrap(current, BOLD_ITALIC_OPEN, BOLD_ITALIC_CLOSE),
        (true, false) => wrap(current, BOLD_OPEN, BOLD_CLOSE),
        (false, true) => wrap(current, ITALIC_OPEN, ITALIC_CLOSE),
        (false, false) => strip_markers(current),
    }
}

/// Remove every bold/italic marker, leaving all other content untouched.
///
/// Each marker kind is removed in a single pass, so a marker that only forms
/// after an earlier pass (`<<b>b>` becomes `<b>`) survives.
pub fn strip_markers(text: &str) -> String {
    MARKERS
        .into_iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, ""))
}

/// Render `content` with exactly one layer of markup for `style`.
pub fn render(content: &str, style: StyleState) -> String {
    let plain = strip_markers(content);
    if style.is_plain() {
        return plain;
    }
    compute_styled_text(&plain, style)
}

/// Dispatch on `mode`
pub fn apply(mode: MarkupMode, current: &str, style: StyleState) -> String {
    match mode {
        MarkupMode::Literal => compute_styled_text(current, style),
        MarkupMode::Canonical => render(current, style),
    }
}

fn wrap(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(open.len() + text.len() + close.len());
    out.push_str(open);
    out.push_str(text);
    out.push_str(close);
    out
}
