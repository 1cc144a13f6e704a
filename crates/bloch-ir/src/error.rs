//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur when appending to a circuit.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not present in the single-qubit circuit.
    #[error("Qubit {qubit} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Rotation gate applied without an angle.
    #[error("Gate '{0}' requires an angle")]
    MissingAngle(String),

    /// Fixed gate applied with an angle.
    #[error("Gate '{gate_name}' takes no angle, got {angle}")]
    UnexpectedAngle {
        /// Name of the gate.
        gate_name: String,
        /// The angle that was supplied.
        angle: f64,
    },

    /// Angle is NaN or infinite.
    #[error("Gate '{gate_name}' got non-finite angle {angle}")]
    NonFiniteAngle {
        /// Name of the gate.
        gate_name: String,
        /// The offending angle.
        angle: f64,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IrError::QubitNotFound {
            qubit: QubitId(3),
            gate_name: Some("h".into()),
        };
        assert_eq!(err.to_string(), "Qubit q3 not found in circuit (gate: h)");

        let err = IrError::MissingAngle("rx".into());
        assert_eq!(err.to_string(), "Gate 'rx' requires an angle");
    }
}
