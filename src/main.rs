use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use stylepad::cli::{parse_line, CliArgs, LineCommand};
use stylepad::controller::{EditorController, StringHost, TextHost};

fn print_state<H: TextHost>(out: &mut impl Write, controller: &EditorController<H>) -> Result<()> {
    let style = controller.style();
    let history = &controller.model().history;
    writeln!(
        out,
        "[bold={} italic={} undo={} redo={}] {}",
        style.bold,
        style.italic,
        history.undo_count(),
        history.redo_count(),
        controller.host().text()
    )
    .context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    stylepad::tracing::init();

    let startup = args.into_config();
    let mut controller =
        EditorController::new(StringHost::new(startup.initial_text), startup.editor);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_state(&mut out, &controller)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match parse_line(&line) {
            LineCommand::Press(control) => controller.press(control),
            LineCommand::Text(text) => {
                controller.host_mut().edit(text);
                controller.on_external_text_changed();
            }
            LineCommand::Show => {}
            LineCommand::Quit => break,
        }
        print_state(&mut out, &controller)?;
    }

    Ok(())
}
