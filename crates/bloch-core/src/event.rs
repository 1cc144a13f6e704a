//! UI events consumed by a session.

use std::fmt;
use std::str::FromStr;

use bloch_ir::Operation;

use crate::error::ParseEventError;
use crate::rotation::AngleChoice;
use crate::session::{PressOutcome, VisualizeOutcome};
use crate::token::GateToken;

/// One event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A gate button was pressed.
    Gate(GateToken),
    /// An angle was chosen in the rotation dialog.
    Angle(AngleChoice),
    Clear,
    Visualize,
    About,
    Quit,
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::Gate(token) => write!(f, "{token}"),
            UiEvent::Angle(choice) => write!(f, "{choice}"),
            UiEvent::Clear => f.write_str("clear"),
            UiEvent::Visualize => f.write_str("visualize"),
            UiEvent::About => f.write_str("about"),
            UiEvent::Quit => f.write_str("quit"),
        }
    }
}

impl FromStr for UiEvent {
    type Err = ParseEventError;

    /// Keywords first, then gate symbols, then angle choices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if word.is_empty() {
            return Err(ParseEventError::Empty);
        }
        match word.to_ascii_lowercase().as_str() {
            "clear" | "c" => return Ok(UiEvent::Clear),
            "visualize" | "viz" | "v" => return Ok(UiEvent::Visualize),
            "about" | "help" | "?" => return Ok(UiEvent::About),
            "quit" | "exit" | "q" => return Ok(UiEvent::Quit),
            _ => {}
        }
        if let Ok(token) = word.parse::<GateToken>() {
            return Ok(UiEvent::Gate(token));
        }
        if let Ok(choice) = word.parse::<AngleChoice>() {
            return Ok(UiEvent::Angle(choice));
        }
        Err(ParseEventError::UnknownEvent(word.to_string()))
    }
}

/// What dispatching an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Gate(PressOutcome),
    /// The pending rotation was committed.
    AngleCommitted(Operation),
    Cleared,
    Visualize(VisualizeOutcome),
    /// Text for the About screen.
    About(&'static str),
    /// The session ended at the user's request.
    Quit,
}
