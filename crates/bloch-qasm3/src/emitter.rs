//! QASM3 emitter for serializing circuits.

use std::f64::consts::PI;

use bloch_ir::{Circuit, Operation};

use crate::error::{EmitError, EmitResult};

/// Symbolic spellings for the canonical rotation angles.
const NAMED_ANGLES: [(f64, &str); 8] = [
    (PI / 4.0, "pi/4"),
    (PI / 2.0, "pi/2"),
    (PI, "pi"),
    (2.0 * PI, "2*pi"),
    (-PI / 4.0, "-pi/4"),
    (-PI / 2.0, "-pi/2"),
    (-PI, "-pi"),
    (-2.0 * PI, "-2*pi"),
];

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> EmitResult<String> {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit)
}

/// Format an angle the way the emitter writes gate parameters.
pub fn format_angle(angle: f64) -> String {
    NAMED_ANGLES
        .iter()
        .find(|(value, _)| (angle - value).abs() < 1e-10)
        .map_or_else(|| format!("{angle:.6}"), |(_, name)| (*name).to_string())
}

/// QASM3 emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> EmitResult<String> {
        // Version
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        self.writeln(&format!("qubit[{}] q;", circuit.num_qubits()));
        self.writeln("");

        for (position, op) in circuit.operations().iter().enumerate() {
            self.emit_operation(position, op)?;
        }

        Ok(std::mem::take(&mut self.output))
    }

    fn emit_operation(&mut self, position: usize, op: &Operation) -> EmitResult<()> {
        let qubit = format!("q[{}]", op.qubit.0);
        match op.angle {
            Some(angle) if !angle.is_finite() => {
                return Err(EmitError::NonFiniteAngle {
                    gate: op.name().into(),
                    position,
                    angle,
                });
            }
            Some(angle) => {
                self.writeln(&format!("{}({}) {qubit};", op.name(), format_angle(angle)));
            }
            None => self.writeln(&format!("{} {qubit};", op.name())),
        }
        Ok(())
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
