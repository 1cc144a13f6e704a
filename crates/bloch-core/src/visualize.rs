//! Visualization invoker.
//!
//! Hands a finished circuit to an external Bloch sphere renderer. The renderer
//! is a black box behind [`Visualizer`]; the only failure this module absorbs
//! is [`VisualizationError::Unsupported`], which closes the requesting window.
//! Every other error kind propagates to the caller.

use bloch_ir::Circuit;
use thiserror::Error;
use tracing::{info, warn};

/// Errors reported by a visualizer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VisualizationError {
    /// The renderer cannot visualize this operation sequence.
    #[error("Visualization not possible: {0}")]
    Unsupported(String),

    /// I/O failure while handing the circuit over.
    #[error("Visualizer I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other renderer failure.
    #[error("Visualizer error: {0}")]
    Backend(String),
}

impl VisualizationError {
    /// Check if this is the capability error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, VisualizationError::Unsupported(_))
    }
}

/// An external capability that renders a single-qubit state trajectory.
pub trait Visualizer {
    /// Get the name of this visualizer.
    fn name(&self) -> &str;

    /// Render the transition produced by `circuit`.
    ///
    /// MUST return [`VisualizationError::Unsupported`] when the sequence
    /// itself cannot be visualized, and another variant for any other fault.
    fn render(&mut self, circuit: &Circuit) -> Result<(), VisualizationError>;
}

/// How a visualize request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeOutcome {
    /// The renderer took over.
    Rendered,
    /// The renderer refused the sequence; the hosting window must close.
    WindowClosed,
}

/// Submit `circuit` to `visualizer`, failing closed on the capability error.
pub fn invoke(
    circuit: &Circuit,
    visualizer: &mut dyn Visualizer,
) -> Result<InvokeOutcome, VisualizationError> {
    info!(
        visualizer = visualizer.name(),
        operations = circuit.len(),
        "submitting circuit for visualization"
    );
    match visualizer.render(circuit) {
        Ok(()) => Ok(InvokeOutcome::Rendered),
        Err(VisualizationError::Unsupported(reason)) => {
            warn!(%reason, "visualization not possible, closing window");
            Ok(InvokeOutcome::WindowClosed)
        }
        Err(e) => Err(e),
    }
}
