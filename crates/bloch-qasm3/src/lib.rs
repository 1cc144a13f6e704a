//! `OpenQASM` 3 Emitter for Bloch circuits
//!
//! Serializes a finished single-qubit [`Circuit`](bloch_ir::Circuit) as an
//! `OpenQASM` 3.0 program, the format handed to an external Bloch sphere
//! renderer.
//!
//! # Example
//!
//! ```rust
//! use bloch_ir::Circuit;
//! use bloch_qasm3::emit;
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::new();
//! circuit.h().unwrap().rz(PI).unwrap();
//!
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.contains("OPENQASM 3.0;"));
//! assert!(qasm.contains("h q[0];"));
//! assert!(qasm.contains("rz(pi) q[0];"));
//! ```
//!
//! # Angle Formatting
//!
//! Angles equal to ±π/4, ±π/2, ±π and ±2π are written symbolically
//! (`pi/4`, `-2*pi`); anything else is written with six decimals.

mod emitter;
mod error;

pub use emitter::{emit, format_angle};
pub use error::{EmitError, EmitResult};
