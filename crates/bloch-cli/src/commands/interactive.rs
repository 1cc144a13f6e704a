//! Interactive command implementation.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;
use tracing::debug;

use bloch_core::{Config, Session, SessionError, UiEvent, Visualizer};

use super::common::{describe, status_line};
use super::handoff::QasmHandoff;

/// Execute the interactive command.
pub fn execute(config: &Config) -> Result<()> {
    println!(
        "{} Bloch sequence builder, one event per line ({} for help)",
        style("→").cyan().bold(),
        style("about").yellow()
    );

    let mut session = Session::new(&config.session);
    let mut visualizer = QasmHandoff::new(&config.visualizer);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock(), &mut visualizer)
}

/// Feed `input` line by line into `session` until EOF or the window closes.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    visualizer: &mut dyn Visualizer,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: UiEvent = match line.parse() {
            Ok(event) => event,
            Err(e) => {
                writeln!(out, "{} {e}", style("!").yellow().bold())?;
                continue;
            }
        };
        debug!(%event, "dispatching");

        match session.dispatch(event, visualizer) {
            Ok(outcome) => writeln!(out, "{}", describe(&outcome))?,
            Err(SessionError::NoPendingRotation) => {
                writeln!(out, "{} no rotation is waiting for an angle", style("!").yellow().bold())?;
            }
            Err(e) => return Err(e.into()),
        }

        if session.is_closed() {
            break;
        }
        writeln!(out, "{}", status_line(&session.snapshot()))?;
    }
    out.flush()?;
    Ok(())
}
