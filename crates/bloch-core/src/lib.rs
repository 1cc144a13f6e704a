//! Bloch Gate-Sequence Session
//!
//! The state machine behind the Bloch sequence builder: a user presses gate
//! buttons, picks angles for rotations, and finally asks for the resulting
//! state trajectory to be visualized.
//!
//! # Components
//!
//! - [`GateSequenceTracker`]: display string, logical token count, OPEN/LOCKED
//! - [`rotation`]: the eight angle choices and the resolver that commits them
//! - [`visualize`]: the [`Visualizer`] seam and the fail-closed invoker
//! - [`Session`]: owns circuit, tracker, pending rotation and window state
//! - [`UiEvent`]: text-parsable events a presentation layer dispatches
//!
//! # Example
//!
//! ```rust
//! use bloch_core::{AngleChoice, GateToken, Session, TrackerState};
//! use std::f64::consts::PI;
//!
//! let mut session = Session::default();
//! session.press(GateToken::H).unwrap();
//! session.press(GateToken::X).unwrap();
//! session.press(GateToken::Rz).unwrap();
//! session.choose_angle(AngleChoice::Pi).unwrap();
//!
//! assert_eq!(session.display(), "HXRZ");
//! assert_eq!(session.logical_count(), 3);
//! assert_eq!(session.tracker_state(), TrackerState::Open);
//! assert_eq!(session.circuit().operations()[2].angle, Some(PI));
//! ```

pub mod about;
pub mod config;
pub mod error;
pub mod event;
pub mod rotation;
pub mod session;
pub mod token;
pub mod tracker;
pub mod visualize;

pub use about::ABOUT;
pub use config::{Config, ConfigError, LoggingConfig, SessionConfig, VisualizerConfig};
pub use error::{ParseEventError, SessionError, SessionResult};
pub use event::{EventOutcome, UiEvent};
pub use rotation::{AngleChoice, PendingRotation};
pub use session::{PressOutcome, Refusal, Session, SessionSnapshot, VisualizeOutcome, WindowState};
pub use token::{Axis, GateToken, TokenAction};
pub use tracker::{GateSequenceTracker, TrackerState};
pub use visualize::{InvokeOutcome, VisualizationError, Visualizer};
