//! Bloch Circuit Model
//!
//! This crate holds the single-qubit circuit that the Bloch sequence builder
//! accumulates while a user picks gates. It is a pure append-only log: capacity
//! limits, display tokens and the angle dialog live in `bloch-core`.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`]; a circuit always addresses exactly `QubitId(0)`
//! - **Gates**: [`GateKind`] for the eleven supported single-qubit gates
//! - **Operations**: [`Operation`] combining a gate with its optional angle
//! - **Circuit**: [`Circuit`] with `apply`/`reset` and fluent appenders
//!
//! # Example
//!
//! ```rust
//! use bloch_ir::{Circuit, GateKind};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::new();
//! circuit.h().unwrap().x().unwrap();
//! circuit.apply(GateKind::Rz, Some(PI)).unwrap();
//!
//! assert_eq!(circuit.len(), 3);
//! assert_eq!(circuit.operations()[2].angle, Some(PI));
//!
//! circuit.reset();
//! assert!(circuit.is_empty());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Angle | Description |
//! |------|-------|-------------|
//! | `X`, `Y`, `Z` | - | Pauli gates |
//! | `H` | - | Hadamard gate |
//! | `S`, `Sdg` | - | S and S-dagger gates |
//! | `T`, `Tdg` | - | T and T-dagger gates |
//! | `Rx`, `Ry`, `Rz` | radians | Rotation gates |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use instruction::Operation;
pub use qubit::QubitId;
