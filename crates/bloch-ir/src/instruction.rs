//! Circuit operations combining a gate with its operand.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// One applied gate in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The kind of gate.
    pub kind: GateKind,
    /// Rotation angle in radians, present only for rotation gates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// Qubit this operation acts on.
    pub qubit: QubitId,
}

impl Operation {
    /// Create a fixed (angle-free) gate operation.
    pub fn fixed(kind: GateKind, qubit: QubitId) -> IrResult<Self> {
        Self::new(kind, None, qubit)
    }

    /// Create a rotation operation.
    pub fn rotation(kind: GateKind, angle: f64, qubit: QubitId) -> IrResult<Self> {
        Self::new(kind, Some(angle), qubit)
    }

    /// Create an operation, checking that the angle matches the gate.
    pub fn new(kind: GateKind, angle: Option<f64>, qubit: QubitId) -> IrResult<Self> {
        match (kind.is_rotation(), angle) {
            (true, None) => return Err(IrError::MissingAngle(kind.name().into())),
            (false, Some(angle)) => {
                return Err(IrError::UnexpectedAngle {
                    gate_name: kind.name().into(),
                    angle,
                });
            }
            (true, Some(angle)) if !angle.is_finite() => {
                return Err(IrError::NonFiniteAngle {
                    gate_name: kind.name().into(),
                    angle,
                });
            }
            _ => {}
        }
        Ok(Self { kind, angle, qubit })
    }

    /// Get the name of the operation's gate.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle {
            Some(angle) => write!(f, "{}({angle}, {})", self.kind.name().to_uppercase(), self.qubit.0),
            None => write!(f, "{}({})", self.kind.name().to_uppercase(), self.qubit.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fixed_operation() {
        let op = Operation::fixed(GateKind::H, QubitId::ZERO).unwrap();
        assert_eq!(op.name(), "h");
        assert_eq!(op.angle, None);
        assert_eq!(op.to_string(), "H(0)");
    }

    #[test]
    fn test_rotation_operation() {
        let op = Operation::rotation(GateKind::Rx, PI / 4.0, QubitId::ZERO).unwrap();
        assert_eq!(op.angle, Some(PI / 4.0));
        assert!(op.to_string().starts_with("RX(0.785"));
    }

    #[test]
    fn test_angle_mismatch() {
        assert_eq!(
            Operation::new(GateKind::Ry, None, QubitId::ZERO),
            Err(IrError::MissingAngle("ry".into()))
        );
        assert!(matches!(
            Operation::new(GateKind::T, Some(1.0), QubitId::ZERO),
            Err(IrError::UnexpectedAngle { .. })
        ));
        assert!(matches!(
            Operation::rotation(GateKind::Rz, f64::NAN, QubitId::ZERO),
            Err(IrError::NonFiniteAngle { .. })
        ));
    }
}
