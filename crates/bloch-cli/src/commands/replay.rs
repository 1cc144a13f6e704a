//! Replay command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::warn;

use bloch_core::{Config, EventOutcome, Session, UiEvent, Visualizer};

use super::common::{describe, format_snapshot};
use super::handoff::QasmHandoff;
use crate::OutputFormat;

/// Execute the replay command.
pub fn execute(config: &Config, events: &[String], format: OutputFormat) -> Result<()> {
    let events = parse_events(events)?;

    let mut session = Session::new(&config.session);
    let mut visualizer = QasmHandoff::new(&config.visualizer);
    let outcomes = replay(&mut session, &events, &mut visualizer)?;

    let snapshot = session.snapshot();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        OutputFormat::Text => {
            println!(
                "{} Replayed {} of {} events",
                style("→").cyan().bold(),
                outcomes.len(),
                events.len()
            );
            for outcome in &outcomes {
                // The about text is long; replay output stays one line per event.
                if !matches!(outcome, EventOutcome::About(_)) {
                    println!("  {}", describe(outcome));
                }
            }
            println!();
            print!("{}", format_snapshot(&snapshot));
        }
    }
    Ok(())
}

/// Parse every event up front so a typo fails before anything runs.
pub fn parse_events(raw: &[String]) -> Result<Vec<UiEvent>> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            s.parse::<UiEvent>()
                .with_context(|| format!("event {} ('{s}')", i + 1))
        })
        .collect()
}

/// Dispatch `events` in order, stopping early if the window closes.
pub fn replay(
    session: &mut Session,
    events: &[UiEvent],
    visualizer: &mut dyn Visualizer,
) -> Result<Vec<EventOutcome>> {
    let mut outcomes = Vec::with_capacity(events.len());
    for (i, &event) in events.iter().enumerate() {
        let outcome = session
            .dispatch(event, visualizer)
            .with_context(|| format!("event {} ('{event}')", i + 1))?;
        outcomes.push(outcome);

        if session.is_closed() {
            let skipped = events.len() - i - 1;
            if skipped > 0 {
                warn!(skipped, "window closed, remaining events ignored");
            }
            break;
        }
    }
    Ok(outcomes)
}
