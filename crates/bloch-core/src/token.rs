//! Gate tokens as they appear in the display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use bloch_ir::GateKind;

use crate::error::ParseEventError;

/// Axis of a parameterized rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The rotation gate about this axis.
    pub fn rotation_gate(self) -> GateKind {
        match self {
            Axis::X => GateKind::Rx,
            Axis::Y => GateKind::Ry,
            Axis::Z => GateKind::Rz,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// What pressing a gate button does to the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAction {
    /// Append this gate immediately.
    Fixed(GateKind),
    /// Open the angle dialog for this axis.
    Rotation(Axis),
}

/// One user-issued gate symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateToken {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
    S,
    Sd,
    T,
    Td,
    H,
}

impl GateToken {
    /// All tokens in button order.
    pub const ALL: [GateToken; 11] = [
        GateToken::X,
        GateToken::Y,
        GateToken::Z,
        GateToken::Rx,
        GateToken::Ry,
        GateToken::Rz,
        GateToken::S,
        GateToken::Sd,
        GateToken::T,
        GateToken::Td,
        GateToken::H,
    ];

    /// Text appended to the display.
    pub fn symbol(self) -> &'static str {
        match self {
            GateToken::X => "X",
            GateToken::Y => "Y",
            GateToken::Z => "Z",
            GateToken::Rx => "RX",
            GateToken::Ry => "RY",
            GateToken::Rz => "RZ",
            GateToken::S => "S",
            GateToken::Sd => "SD",
            GateToken::T => "T",
            GateToken::Td => "TD",
            GateToken::H => "H",
        }
    }

    pub fn action(self) -> TokenAction {
        match self {
            GateToken::X => TokenAction::Fixed(GateKind::X),
            GateToken::Y => TokenAction::Fixed(GateKind::Y),
            GateToken::Z => TokenAction::Fixed(GateKind::Z),
            GateToken::S => TokenAction::Fixed(GateKind::S),
            GateToken::Sd => TokenAction::Fixed(GateKind::Sdg),
            GateToken::T => TokenAction::Fixed(GateKind::T),
            GateToken::Td => TokenAction::Fixed(GateKind::Tdg),
            GateToken::H => TokenAction::Fixed(GateKind::H),
            GateToken::Rx => TokenAction::Rotation(Axis::X),
            GateToken::Ry => TokenAction::Rotation(Axis::Y),
            GateToken::Rz => TokenAction::Rotation(Axis::Z),
        }
    }
}

impl fmt::Display for GateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for GateToken {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(GateToken::X),
            "Y" => Ok(GateToken::Y),
            "Z" => Ok(GateToken::Z),
            "RX" => Ok(GateToken::Rx),
            "RY" => Ok(GateToken::Ry),
            "RZ" => Ok(GateToken::Rz),
            "S" => Ok(GateToken::S),
            "SD" | "SDG" => Ok(GateToken::Sd),
            "T" => Ok(GateToken::T),
            "TD" | "TDG" => Ok(GateToken::Td),
            "H" => Ok(GateToken::H),
            _ => Err(ParseEventError::UnknownGate(s.trim().to_string())),
        }
    }
}
