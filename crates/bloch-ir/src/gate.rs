//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single-qubit gates a Bloch circuit can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    // Pauli gates
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Rotation gates
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
}

impl GateKind {
    /// Every supported gate, fixed gates first.
    pub const ALL: [GateKind; 11] = [
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::H,
        GateKind::S,
        GateKind::Sdg,
        GateKind::T,
        GateKind::Tdg,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
    ];

    /// Get the OpenQASM name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
        }
    }

    /// Check if this gate takes a rotation angle.
    #[inline]
    pub fn is_rotation(&self) -> bool {
        matches!(self, GateKind::Rx | GateKind::Ry | GateKind::Rz)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
