//! Command-line argument parsing and line commands for the stylepad host
//!
//! The binary reads one command per line from stdin:
//! - `:bold` / `:b`, `:italic` / `:i`, `:undo` / `:u`, `:redo` / `:r` press a control
//! - `:show` prints the state without changing it
//! - `:quit` / `:q` exits
//! - anything else replaces the buffer, as if the user had typed it

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::controller::Control;
use crate::editable::MarkupMode;

/// Line-mode bold/italic editor with undo/redo
#[derive(Parser, Debug)]
#[command(name = "stylepad", version, about = "Line-mode bold/italic editor")]
pub struct CliArgs {
    /// Initial buffer text
    #[arg(short = 't', long, default_value = "")]
    pub text: String,

    /// Config file to use instead of ~/.config/stylepad/config.yaml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured markup mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Override the configured history limit
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,
}

/// CLI spelling of [`MarkupMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Literal,
    Canonical,
}

impl From<ModeArg> for MarkupMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Literal => MarkupMode::Literal,
            ModeArg::Canonical => MarkupMode::Canonical,
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub initial_text: String,
    pub editor: EditorConfig,
}

impl CliArgs {
    /// Resolve the editor config (file, then flag overrides)
    pub fn into_config(self) -> StartupConfig {
        let mut editor = match &self.config {
            Some(path) => EditorConfig::load_from(path),
            None => EditorConfig::load(),
        };
        self.apply_overrides(&mut editor);

        StartupConfig {
            initial_text: self.text,
            editor,
        }
    }

    fn apply_overrides(&self, editor: &mut EditorConfig) {
        if let Some(mode) = self.mode {
            editor.markup_mode = mode.into();
        }
        if let Some(limit) = self.history_limit {
            editor.history_limit = Some(limit);
        }
    }
}

/// One line of host input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Press(Control),
    Show,
    Quit,
    /// Replace the buffer with this text
    Text(String),
}

/// Parse a line of stdin into a command
pub fn parse_line(line: &str) -> LineCommand {
    let Some(word) = line.trim().strip_prefix(':') else {
        return LineCommand::Text(line.to_string());
    };

    match word {
        "b" => LineCommand::Press(Control::Bold),
        "i" => LineCommand::Press(Control::Italic),
        "u" => LineCommand::Press(Control::Undo),
        "r" => LineCommand::Press(Control::Redo),
        "show" => LineCommand::Show,
        "q" | "quit" => LineCommand::Quit,
        other => match Control::from_name(other) {
            Some(control) => LineCommand::Press(control),
            None => LineCommand::Text(line.to_string()),
        },
    }
}
