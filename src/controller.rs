//! Host-facing controller
//!
//! [`EditorController`] binds host events to the model. The host supplies a
//! [`TextHost`] (the gettable/settable text property of its widget) and calls
//! the four `on_*` entry points, or [`EditorController::press`] with a
//! [`Control`] when a toolbar button is activated.
//!
//! Writing back to the host may make the widget report a change. That
//! re-entry is harmless: the echoed text equals the current history top, so
//! `on_external_text_changed` saves nothing.

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::editable::{StyleKind, StyleState};
use crate::messages::Msg;
use crate::model::EditorModel;
use crate::update::update;

/// The text property of the hosted widget.
pub trait TextHost {
    /// Current widget text
    fn text(&self) -> String;

    /// Replace the widget text
    fn set_text(&mut self, text: &str);
}

/// In-memory host, used by the line-mode binary and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringHost {
    text: String,
    writes: usize,
}

impl StringHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }

    /// Simulate the user typing: replaces the text without notifying anyone
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number of times the controller wrote to this host
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TextHost for StringHost {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}

/// Toolbar controls a host can wire to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Bold,
    Italic,
    Undo,
    Redo,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Bold, Control::Italic, Control::Undo, Control::Redo];

    /// Message sent when this control is activated
    pub fn msg(self) -> Msg {
        match self {
            Control::Bold => Msg::ToggleStyle(StyleKind::Bold),
            Control::Italic => Msg::ToggleStyle(StyleKind::Italic),
            Control::Undo => Msg::Undo,
            Control::Redo => Msg::Redo,
        }
    }

    /// Stable identifier, e.g. for binding a button by name
    pub fn name(self) -> &'static str {
        match self {
            Control::Bold => "bold",
            Control::Italic => "italic",
            Control::Undo => "undo",
            Control::Redo => "redo",
        }
    }

    /// Look up a control by [`Control::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.name() == name)
    }
}

/// Controller for one editing surface.
///
/// All entry points take `&mut self`, so events for one instance are
/// serialized by construction.
#[derive(Debug)]
pub struct EditorController<H: TextHost> {
    host: H,
    model: EditorModel,
}

impl<H: TextHost> EditorController<H> {
    /// Create a controller, seeding history with the host's current text
    pub fn new(host: H, config: EditorConfig) -> Self {
        let model = EditorModel::new(host.text(), config);
        tracing::debug!(
            mode = ?model.config.markup_mode,
            history_limit = ?model.config.history_limit,
            "controller ready"
        );
        Self { host, model }
    }

    /// A bold or italic control was activated
    pub fn on_style_toggle(&mut self, kind: StyleKind) {
        self.dispatch(Msg::ToggleStyle(kind));
    }

    /// The host widget's text changed for reasons outside this controller
    pub fn on_external_text_changed(&mut self) {
        let text = self.host.text();
        self.dispatch(Msg::TextChanged(text));
    }

    pub fn on_undo_requested(&mut self) {
        self.dispatch(Msg::Undo);
    }

    pub fn on_redo_requested(&mut self) {
        self.dispatch(Msg::Redo);
    }

    /// Route a toolbar control to its entry point
    pub fn press(&mut self, control: Control) {
        self.dispatch(control.msg());
    }

    /// Run `msg` through `update` and perform the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.run(cmd);
        }
    }

    fn run(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::SyncText(text) => self.host.set_text(&text),
        }
    }

    /// Current buffer text
    pub fn text(&self) -> &str {
        &self.model.buffer
    }

    pub fn style(&self) -> StyleState {
        self.model.style
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access for simulating user edits; call
    /// [`Self::on_external_text_changed`] afterwards
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
