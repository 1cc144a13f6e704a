//! The owned session state.
//!
//! A [`Session`] holds the circuit, the tracker, the pending rotation and the
//! window state, and is passed explicitly to every operation. All operations
//! run to completion on the caller's thread.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use bloch_ir::{Circuit, Operation, QubitId};

use crate::about::ABOUT;
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::event::{EventOutcome, UiEvent};
use crate::rotation::{self, AngleChoice, PendingRotation};
use crate::token::{Axis, GateToken, TokenAction};
use crate::tracker::{GateSequenceTracker, TrackerState};
use crate::visualize::{self, InvokeOutcome, Visualizer};

/// Whether the hosting window still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Open,
    /// Terminal: destroyed by Quit or by a failed visualization.
    Closed,
}

/// Why a gate press was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The tracker is locked at capacity.
    Locked,
    /// A rotation is waiting for its angle.
    RotationPending(Axis),
}

/// Result of pressing a gate button.
#[derive(Debug, Clone, PartialEq)]
pub enum PressOutcome {
    /// A fixed gate was shown and appended to the circuit.
    Applied { operation: Operation, count: usize },
    /// A rotation token was shown; the circuit waits for an angle.
    AwaitingAngle { axis: Axis, count: usize },
    /// Nothing changed.
    Refused(Refusal),
}

/// Result of a visualize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizeOutcome {
    /// The renderer took over.
    Rendered,
    /// The renderer refused the sequence and the window was closed.
    WindowClosed,
    /// Refused while a rotation waits for its angle.
    RotationPending(Axis),
}

/// Point-in-time view for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub display: String,
    pub logical_count: usize,
    pub capacity: usize,
    pub tracker: TrackerState,
    pub pending: Option<Axis>,
    pub window: WindowState,
    pub operations: Vec<Operation>,
}

/// One interactive gate-sequence session.
#[derive(Debug, Clone)]
pub struct Session {
    circuit: Circuit,
    tracker: GateSequenceTracker,
    pending: Option<PendingRotation>,
    window: WindowState,
}

impl Session {
    /// Create a fresh session.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            circuit: Circuit::new(),
            tracker: GateSequenceTracker::new(config.capacity),
            pending: None,
            window: WindowState::Open,
        }
    }

    /// Press a gate button.
    ///
    /// Fixed gates are shown and appended together. Rotation tokens are shown
    /// at once, but their operation is only appended by [`Self::choose_angle`].
    #[instrument(skip(self), fields(display = %self.tracker.display()))]
    pub fn press(&mut self, token: GateToken) -> SessionResult<PressOutcome> {
        self.ensure_open()?;

        if let Some(pending) = self.pending {
            debug!(axis = %pending.axis, "gate refused, rotation pending");
            return Ok(PressOutcome::Refused(Refusal::RotationPending(pending.axis)));
        }
        match token.action() {
            TokenAction::Fixed(kind) => {
                let operation = Operation::fixed(kind, QubitId::ZERO)?;
                let Some(count) = self.tracker.record(token) else {
                    return Ok(PressOutcome::Refused(Refusal::Locked));
                };
                self.circuit.push(operation.clone())?;
                debug!(%operation, count, "gate applied");
                Ok(PressOutcome::Applied { operation, count })
            }
            TokenAction::Rotation(axis) => {
                let Some(count) = self.tracker.record(token) else {
                    return Ok(PressOutcome::Refused(Refusal::Locked));
                };
                self.pending = Some(PendingRotation { axis });
                debug!(%axis, count, "rotation awaiting angle");
                Ok(PressOutcome::AwaitingAngle { axis, count })
            }
        }
    }

    /// Choose the angle for the pending rotation and commit it.
    #[instrument(skip(self))]
    pub fn choose_angle(&mut self, choice: AngleChoice) -> SessionResult<Operation> {
        self.ensure_open()?;
        let pending = self.pending.ok_or(SessionError::NoPendingRotation)?;
        let operation = rotation::resolve(&mut self.circuit, pending.axis, choice)?;
        self.pending = None;
        Ok(operation)
    }

    /// Reset circuit, display and tracker together.
    ///
    /// A pending rotation is dropped along with its displayed token.
    pub fn clear(&mut self) -> SessionResult<()> {
        self.ensure_open()?;
        self.circuit.reset();
        self.tracker.clear();
        self.pending = None;
        info!("session cleared");
        Ok(())
    }

    /// Hand the circuit to `visualizer`, closing the window if it is refused.
    pub fn visualize(&mut self, visualizer: &mut dyn Visualizer) -> SessionResult<VisualizeOutcome> {
        self.ensure_open()?;
        if let Some(pending) = self.pending {
            return Ok(VisualizeOutcome::RotationPending(pending.axis));
        }
        match visualize::invoke(&self.circuit, visualizer)? {
            InvokeOutcome::Rendered => Ok(VisualizeOutcome::Rendered),
            InvokeOutcome::WindowClosed => {
                self.window = WindowState::Closed;
                Ok(VisualizeOutcome::WindowClosed)
            }
        }
    }

    /// Destroy the window.
    pub fn quit(&mut self) -> SessionResult<()> {
        self.ensure_open()?;
        self.window = WindowState::Closed;
        info!("session closed by user");
        Ok(())
    }

    /// Route one UI event to the matching operation.
    pub fn dispatch(
        &mut self,
        event: UiEvent,
        visualizer: &mut dyn Visualizer,
    ) -> SessionResult<EventOutcome> {
        match event {
            UiEvent::Gate(token) => self.press(token).map(EventOutcome::Gate),
            UiEvent::Angle(choice) => self.choose_angle(choice).map(EventOutcome::AngleCommitted),
            UiEvent::Clear => self.clear().map(|()| EventOutcome::Cleared),
            UiEvent::Visualize => self.visualize(visualizer).map(EventOutcome::Visualize),
            UiEvent::About => {
                self.ensure_open()?;
                Ok(EventOutcome::About(ABOUT))
            }
            UiEvent::Quit => self.quit().map(|()| EventOutcome::Quit),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            display: self.tracker.display().to_string(),
            logical_count: self.tracker.logical_count(),
            capacity: self.tracker.capacity(),
            tracker: self.tracker.state(),
            pending: self.pending.map(|p| p.axis),
            window: self.window,
            operations: self.circuit.operations().to_vec(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn display(&self) -> &str {
        self.tracker.display()
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    pub fn logical_count(&self) -> usize {
        self.tracker.logical_count()
    }

    pub fn pending(&self) -> Option<PendingRotation> {
        self.pending
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    pub fn is_closed(&self) -> bool {
        self.window == WindowState::Closed
    }

    fn ensure_open(&self) -> SessionResult<()> {
        match self.window {
            WindowState::Open => Ok(()),
            WindowState::Closed => Err(SessionError::Closed),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
