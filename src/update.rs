//! Update function for the Elm-style architecture
//!
//! All state transformations flow through here. Every message runs to
//! completion synchronously; there is no pending state between messages.

use crate::commands::Cmd;
use crate::editable::markup;
use crate::messages::Msg;
use crate::model::EditorModel;

/// Main update function
///
/// Returns `Cmd::SyncText` whenever the host widget needs the new buffer.
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::ToggleStyle(kind) => {
            let active = model.style.toggle(kind);
            model.buffer = markup::apply(model.config.markup_mode, &model.buffer, model.style);
            let saved = model.save_if_changed();
            tracing::debug!(?kind, active, saved, "style toggled");
            Some(Cmd::SyncText(model.buffer.clone()))
        }

        Msg::TextChanged(text) => {
            model.buffer = text;
            if model.save_if_changed() {
                tracing::debug!(
                    undo_count = model.history.undo_count(),
                    "external edit saved"
                );
            } else {
                tracing::trace!("external edit matches current state");
            }
            None
        }

        Msg::Undo => {
            let Some(snapshot) = model.history.undo().cloned() else {
                tracing::trace!("nothing to undo");
                return None;
            };
            model.restore(snapshot);
            tracing::debug!(
                undo_count = model.history.undo_count(),
                redo_count = model.history.redo_count(),
                "undo"
            );
            Some(Cmd::SyncText(model.buffer.clone()))
        }

        Msg::Redo => {
            let Some(snapshot) = model.history.redo().cloned() else {
                tracing::trace!("nothing to redo");
                return None;
            };
            model.restore(snapshot);
            tracing::debug!(
                undo_count = model.history.undo_count(),
                redo_count = model.history.redo_count(),
                "redo"
            );
            Some(Cmd::SyncText(model.buffer.clone()))
        }
    }
}
