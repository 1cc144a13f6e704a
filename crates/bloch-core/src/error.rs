//! Error types for the session crate.

use bloch_ir::IrError;
use thiserror::Error;

use crate::visualize::VisualizationError;

/// Errors raised by session operations.
///
/// Capacity exhaustion and refused input are outcomes, not errors. Everything
/// here is either a defect in the caller or a visualizer failure that is not
/// the capability error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// The hosting window has been destroyed.
    #[error("Session is closed")]
    Closed,

    /// An angle was chosen with no rotation awaiting one.
    #[error("No rotation is awaiting an angle")]
    NoPendingRotation,

    /// Circuit rejected an operation.
    #[error("Circuit error: {0}")]
    Circuit(#[from] IrError),

    /// Visualizer failed with something other than the capability error.
    #[error(transparent)]
    Visualization(#[from] VisualizationError),
}

/// Errors parsing a UI event from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    #[error("Unknown angle: {0} (expected one of PI/4, PI/2, PI, 2*PI and negatives)")]
    UnknownAngle(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Empty event")]
    Empty,
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
