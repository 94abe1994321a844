//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use stylepad::config::EditorConfig;
use stylepad::controller::{EditorController, StringHost};
use stylepad::editable::MarkupMode;

/// Controller over an in-memory host with default config
pub fn test_controller(text: &str) -> EditorController<StringHost> {
    EditorController::new(StringHost::new(text), EditorConfig::default())
}

/// Controller with a custom config
pub fn test_controller_with(text: &str, config: EditorConfig) -> EditorController<StringHost> {
    EditorController::new(StringHost::new(text), config)
}

/// Controller rendering markup non-destructively
pub fn canonical_controller(text: &str) -> EditorController<StringHost> {
    test_controller_with(
        text,
        EditorConfig {
            markup_mode: MarkupMode::Canonical,
            ..EditorConfig::default()
        },
    )
}

/// Simulate the user typing `text` into the hosted widget
pub fn type_text(controller: &mut EditorController<StringHost>, text: &str) {
    controller.host_mut().edit(text);
    controller.on_external_text_changed();
}

/// Assert the controller buffer and the host mirror agree on `expected`
pub fn assert_text(controller: &EditorController<StringHost>, expected: &str) {
    use stylepad::controller::TextHost;

    assert_eq!(controller.text(), expected, "buffer mismatch");
    assert_eq!(controller.host().text(), expected, "host mirror mismatch");
}
