//! Hand-off to the Bloch sphere renderer.
//!
//! The renderer itself is an external program that reads OpenQASM 3. This
//! visualizer enforces its capability limits and writes the program where the
//! renderer picks it up.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use bloch_core::{VisualizationError, Visualizer, VisualizerConfig};
use bloch_ir::Circuit;

/// Writes the circuit as OpenQASM 3 for the external renderer.
pub struct QasmHandoff {
    max_gates: usize,
    output: Option<PathBuf>,
}

impl QasmHandoff {
    pub fn new(config: &VisualizerConfig) -> Self {
        Self {
            max_gates: config.max_gates,
            output: config.output.clone(),
        }
    }

    /// Reject sequences the renderer cannot animate.
    fn check(&self, circuit: &Circuit) -> Result<(), VisualizationError> {
        if circuit.num_qubits() != 1 {
            return Err(VisualizationError::Unsupported(format!(
                "renderer shows one qubit, circuit has {}",
                circuit.num_qubits()
            )));
        }
        if circuit.is_empty() {
            return Err(VisualizationError::Unsupported(
                "no operations to show".into(),
            ));
        }
        if circuit.len() > self.max_gates {
            return Err(VisualizationError::Unsupported(format!(
                "{} operations exceed the renderer limit of {}",
                circuit.len(),
                self.max_gates
            )));
        }
        Ok(())
    }
}

impl Visualizer for QasmHandoff {
    fn name(&self) -> &str {
        "qasm-handoff"
    }

    fn render(&mut self, circuit: &Circuit) -> Result<(), VisualizationError> {
        self.check(circuit)?;

        let program = bloch_qasm3::emit(circuit)
            .map_err(|e| VisualizationError::Backend(e.to_string()))?;

        match &self.output {
            Some(path) => {
                fs::write(path, &program)?;
                info!(path = %path.display(), "QASM program written");
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(program.as_bytes())?;
                stdout.flush()?;
                debug!("QASM program written to stdout");
            }
        }
        Ok(())
    }
}
