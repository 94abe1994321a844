//! stylepad - Elm-style controller for a plain-text editing surface
//!
//! This crate provides whole-buffer bold/italic markup toggling and linear
//! undo/redo over buffer snapshots, wired to a host widget through
//! [`controller::TextHost`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod editable;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use controller::{Control, EditorController, StringHost, TextHost};
pub use messages::Msg;
pub use model::EditorModel;
