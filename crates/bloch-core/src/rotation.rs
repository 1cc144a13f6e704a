//! Rotation resolver.
//!
//! Turns one of eight fixed multiples of π into a concrete angle and commits
//! the rotation to the circuit. The choices cover [-2π, 2π] exactly, so no
//! range check is needed.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use bloch_ir::{Circuit, IrResult, Operation};
use tracing::debug;

use crate::error::ParseEventError;
use crate::token::Axis;

/// The angle choices offered for a rotation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleChoice {
    QuarterPi,
    HalfPi,
    Pi,
    TwoPi,
    NegQuarterPi,
    NegHalfPi,
    NegPi,
    NegTwoPi,
}

impl AngleChoice {
    /// All choices, positive row first.
    pub const ALL: [AngleChoice; 8] = [
        AngleChoice::QuarterPi,
        AngleChoice::HalfPi,
        AngleChoice::Pi,
        AngleChoice::TwoPi,
        AngleChoice::NegQuarterPi,
        AngleChoice::NegHalfPi,
        AngleChoice::NegPi,
        AngleChoice::NegTwoPi,
    ];

    /// Multiple of π this choice stands for.
    pub fn multiplier(self) -> f64 {
        match self {
            AngleChoice::QuarterPi => 0.25,
            AngleChoice::HalfPi => 0.5,
            AngleChoice::Pi => 1.0,
            AngleChoice::TwoPi => 2.0,
            AngleChoice::NegQuarterPi => -0.25,
            AngleChoice::NegHalfPi => -0.5,
            AngleChoice::NegPi => -1.0,
            AngleChoice::NegTwoPi => -2.0,
        }
    }

    /// Angle in radians.
    pub fn radians(self) -> f64 {
        self.multiplier() * PI
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            AngleChoice::QuarterPi => "PI/4",
            AngleChoice::HalfPi => "PI/2",
            AngleChoice::Pi => "PI",
            AngleChoice::TwoPi => "2*PI",
            AngleChoice::NegQuarterPi => "-PI/4",
            AngleChoice::NegHalfPi => "-PI/2",
            AngleChoice::NegPi => "-PI",
            AngleChoice::NegTwoPi => "-2*PI",
        }
    }

    /// Look up the choice for an exact multiplier.
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.multiplier() == multiplier)
    }
}

impl fmt::Display for AngleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AngleChoice {
    type Err = ParseEventError;

    /// Accepts a label (`pi/4`, `-2*pi`, `2pi`) or a decimal multiplier (`0.25`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_uppercase().replace('*', "");
        let by_label = Self::ALL
            .into_iter()
            .find(|c| c.label().replace('*', "") == norm);
        by_label
            .or_else(|| norm.parse::<f64>().ok().and_then(Self::from_multiplier))
            .ok_or_else(|| ParseEventError::UnknownAngle(s.trim().to_string()))
    }
}

/// A rotation waiting for its angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRotation {
    /// Axis of the rotation gate that was pressed.
    pub axis: Axis,
}

/// Apply the rotation about `axis` by `choice` and return the committed operation.
pub fn resolve(circuit: &mut Circuit, axis: Axis, choice: AngleChoice) -> IrResult<Operation> {
    let angle = choice.radians();
    let op = Operation::rotation(axis.rotation_gate(), angle, bloch_ir::QubitId::ZERO)?;
    circuit.push(op.clone())?;
    debug!(%axis, angle, label = choice.label(), "rotation committed");
    Ok(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloch_ir::GateKind;

    #[test]
    fn test_resolve_quarter_pi_on_x() {
        let mut circuit = Circuit::new();
        let op = resolve(&mut circuit, Axis::X, AngleChoice::QuarterPi).unwrap();

        assert_eq!(op.kind, GateKind::Rx);
        assert_eq!(op.angle, Some(PI / 4.0));
        assert_eq!(circuit.operations(), [op]);
    }

    #[test]
    fn test_all_angles_within_range() {
        for choice in AngleChoice::ALL {
            let angle = choice.radians();
            assert!((-2.0 * PI..=2.0 * PI).contains(&angle));
            assert_eq!(angle, choice.multiplier() * PI);
        }
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("pi/4".parse::<AngleChoice>().unwrap(), AngleChoice::QuarterPi);
        assert_eq!("-2*PI".parse::<AngleChoice>().unwrap(), AngleChoice::NegTwoPi);
        assert_eq!("2pi".parse::<AngleChoice>().unwrap(), AngleChoice::TwoPi);
        assert_eq!("-0.5".parse::<AngleChoice>().unwrap(), AngleChoice::NegHalfPi);
        assert_eq!("1".parse::<AngleChoice>().unwrap(), AngleChoice::Pi);
        assert!("0.3".parse::<AngleChoice>().is_err());
        assert!("3*PI".parse::<AngleChoice>().is_err());
    }

    #[test]
    fn test_labels_roundtrip() {
        for choice in AngleChoice::ALL {
            assert_eq!(choice.label().parse::<AngleChoice>().unwrap(), choice);
        }
    }
}
