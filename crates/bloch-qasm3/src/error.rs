//! Error types for the QASM3 emitter.

use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// Angle cannot be written as a QASM literal.
    #[error("Gate '{gate}' at position {position} has non-finite angle {angle}")]
    NonFiniteAngle {
        gate: String,
        position: usize,
        angle: f64,
    },
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
