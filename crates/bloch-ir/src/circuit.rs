//! Single-qubit circuit model.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::instruction::Operation;
use crate::qubit::QubitId;

/// A single-qubit quantum circuit.
///
/// The circuit is an ordered, append-only log of operations on `QubitId(0)`.
/// An operation is either appended whole or rejected with the log untouched.
/// No length limit is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Applied operations, in issue order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Number of qubits every circuit holds.
    pub const NUM_QUBITS: usize = 1;

    /// Create a new circuit in the identity state.
    pub fn new() -> Self {
        Self { operations: vec![] }
    }

    /// Discard all operations.
    pub fn reset(&mut self) {
        self.operations.clear();
    }

    /// Append one gate, with an angle in radians for rotation gates.
    pub fn apply(&mut self, kind: GateKind, angle: Option<f64>) -> IrResult<&mut Self> {
        self.push(Operation::new(kind, angle, QubitId::ZERO)?)
    }

    /// Append a prepared operation.
    pub fn push(&mut self, op: Operation) -> IrResult<&mut Self> {
        if op.qubit != QubitId::ZERO {
            return Err(IrError::QubitNotFound {
                qubit: op.qubit,
                gate_name: Some(op.name().into()),
            });
        }
        self.operations.push(op);
        Ok(self)
    }

    // =========================================================================
    // Fixed gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::H, None)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::X, None)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::Y, None)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::Z, None)
    }

    /// Apply S gate.
    pub fn s(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::S, None)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::Sdg, None)
    }

    /// Apply T gate.
    pub fn t(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::T, None)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self) -> IrResult<&mut Self> {
        self.apply(GateKind::Tdg, None)
    }

    // =========================================================================
    // Rotation gates
    // =========================================================================

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64) -> IrResult<&mut Self> {
        self.apply(GateKind::Rx, Some(theta))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64) -> IrResult<&mut Self> {
        self.apply(GateKind::Ry, Some(theta))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64) -> IrResult<&mut Self> {
        self.apply(GateKind::Rz, Some(theta))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the applied operations in order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Get the number of applied operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if no operation has been applied.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        Self::NUM_QUBITS
    }
}
