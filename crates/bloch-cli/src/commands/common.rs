//! Shared helpers for CLI commands.

use console::style;

use bloch_core::{
    AngleChoice, EventOutcome, PressOutcome, Refusal, SessionSnapshot, TrackerState,
    VisualizeOutcome,
};

/// One-line description of what an event did.
pub fn describe(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::Gate(PressOutcome::Applied { operation, .. }) => {
            format!("{} {operation}", style("+").green().bold())
        }
        EventOutcome::Gate(PressOutcome::AwaitingAngle { axis, .. }) => {
            let choices: Vec<_> = AngleChoice::ALL.iter().map(|c| c.label()).collect();
            format!(
                "{} R{}: choose an angle ({})",
                style("?").cyan().bold(),
                axis.to_string().to_uppercase(),
                choices.join(", ")
            )
        }
        EventOutcome::Gate(PressOutcome::Refused(Refusal::Locked)) => format!(
            "{} sequence is full, clear to start over",
            style("!").yellow().bold()
        ),
        EventOutcome::Gate(PressOutcome::Refused(Refusal::RotationPending(axis)))
        | EventOutcome::Visualize(VisualizeOutcome::RotationPending(axis)) => format!(
            "{} choose an angle for R{} first",
            style("!").yellow().bold(),
            axis.to_string().to_uppercase()
        ),
        EventOutcome::AngleCommitted(operation) => {
            format!("{} {operation}", style("+").green().bold())
        }
        EventOutcome::Cleared => format!("{} cleared", style("~").cyan()),
        EventOutcome::Visualize(VisualizeOutcome::Rendered) => {
            format!("{} handed to renderer", style("✓").green().bold())
        }
        EventOutcome::Visualize(VisualizeOutcome::WindowClosed) => format!(
            "{} visualization not possible, window closed",
            style("✗").red().bold()
        ),
        EventOutcome::About(text) => (*text).to_string(),
        EventOutcome::Quit => format!("{} window closed", style("~").cyan()),
    }
}

/// Display string followed by the count and tracker state.
pub fn status_line(snapshot: &SessionSnapshot) -> String {
    let state = match snapshot.tracker {
        TrackerState::Open => style("OPEN").green(),
        TrackerState::Locked => style("LOCKED").red(),
    };
    let display = if snapshot.display.is_empty() {
        "-"
    } else {
        snapshot.display.as_str()
    };
    format!(
        "  {}  [{}/{}] {}",
        style(display).cyan().bold(),
        snapshot.logical_count,
        snapshot.capacity,
        state
    )
}

/// Multi-line text rendering of a snapshot.
pub fn format_snapshot(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&status_line(snapshot));
    out.push('\n');
    if let Some(axis) = snapshot.pending {
        out.push_str(&format!(
            "  Pending:    R{} (no angle chosen)\n",
            axis.to_string().to_uppercase()
        ));
    }
    out.push_str(&format!("  Window:     {:?}\n", snapshot.window));
    out.push_str(&format!("  Operations: {}\n", snapshot.operations.len()));
    for (i, op) in snapshot.operations.iter().enumerate() {
        out.push_str(&format!("    {:>2}. {op}\n", i + 1));
    }
    out
}
