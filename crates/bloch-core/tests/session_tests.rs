//! Session scenarios: sequencing, capacity, rotation and visualization.

use std::f64::consts::PI;

use bloch_core::{
    AngleChoice, Axis, EventOutcome, GateToken, PressOutcome, Refusal, Session, SessionConfig,
    SessionError, TrackerState, UiEvent, VisualizationError, VisualizeOutcome, Visualizer,
    WindowState,
};
use bloch_ir::{Circuit, GateKind, Operation, QubitId};

/// Visualizer that records what it was given and answers with a fixed result.
struct Recording {
    answer: fn() -> Result<(), VisualizationError>,
    seen: Vec<Circuit>,
}

impl Recording {
    fn accepting() -> Self {
        Self {
            answer: || Ok(()),
            seen: vec![],
        }
    }

    fn refusing() -> Self {
        Self {
            answer: || Err(VisualizationError::Unsupported("gate not supported".into())),
            seen: vec![],
        }
    }

    fn failing() -> Self {
        Self {
            answer: || {
                Err(VisualizationError::Io(std::io::Error::other(
                    "renderer pipe closed",
                )))
            },
            seen: vec![],
        }
    }
}

impl Visualizer for Recording {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(&mut self, circuit: &Circuit) -> Result<(), VisualizationError> {
        self.seen.push(circuit.clone());
        (self.answer)()
    }
}

fn op(kind: GateKind, angle: Option<f64>) -> Operation {
    Operation::new(kind, angle, QubitId::ZERO).unwrap()
}

#[test]
fn h_x_rz_pi_scenario() {
    let mut session = Session::default();
    session.press(GateToken::H).unwrap();
    session.press(GateToken::X).unwrap();
    assert_eq!(
        session.press(GateToken::Rz).unwrap(),
        PressOutcome::AwaitingAngle {
            axis: Axis::Z,
            count: 3
        }
    );
    session.choose_angle(AngleChoice::Pi).unwrap();

    assert_eq!(
        session.circuit().operations(),
        [
            op(GateKind::H, None),
            op(GateKind::X, None),
            op(GateKind::Rz, Some(PI)),
        ]
    );
    assert_eq!(session.display(), "HXRZ");
    assert_eq!(session.logical_count(), 3);
    assert_eq!(session.tracker_state(), TrackerState::Open);
}

#[test]
fn ten_single_character_gates_lock() {
    let mut session = Session::default();
    let gates = [
        GateToken::X,
        GateToken::Y,
        GateToken::Z,
        GateToken::S,
        GateToken::T,
        GateToken::H,
        GateToken::X,
        GateToken::Y,
        GateToken::Z,
    ];
    for token in gates {
        session.press(token).unwrap();
        assert_eq!(session.tracker_state(), TrackerState::Open);
    }
    session.press(GateToken::H).unwrap();
    assert_eq!(session.tracker_state(), TrackerState::Locked);

    let before = session.snapshot();
    assert_eq!(
        session.press(GateToken::T).unwrap(),
        PressOutcome::Refused(Refusal::Locked)
    );
    assert_eq!(
        session.press(GateToken::Rx).unwrap(),
        PressOutcome::Refused(Refusal::Locked)
    );
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.circuit().len(), 10);
}

#[test]
fn tenth_token_may_be_a_rotation() {
    let mut session = Session::default();
    for _ in 0..9 {
        session.press(GateToken::Sd).unwrap();
    }
    assert_eq!(session.logical_count(), 9);

    session.press(GateToken::Rx).unwrap();
    assert_eq!(session.logical_count(), 10);
    assert_eq!(session.tracker_state(), TrackerState::Locked);

    // The locked tracker still lets the pending rotation complete.
    let committed = session.choose_angle(AngleChoice::NegQuarterPi).unwrap();
    assert_eq!(committed, op(GateKind::Rx, Some(-PI / 4.0)));
    assert_eq!(session.circuit().len(), 10);
}

#[test]
fn rotation_commits_exact_multiple_of_pi() {
    for axis_token in [GateToken::Rx, GateToken::Ry, GateToken::Rz] {
        for choice in AngleChoice::ALL {
            let mut session = Session::default();
            session.press(axis_token).unwrap();
            assert!(session.circuit().is_empty());

            let committed = session.choose_angle(choice).unwrap();
            assert_eq!(committed.angle, Some(choice.multiplier() * PI));
            assert_eq!(session.circuit().operations(), [committed]);
            assert!(session.pending().is_none());
        }
    }
}

#[test]
fn pending_rotation_must_be_resolved() {
    let mut session = Session::default();
    session.press(GateToken::Ry).unwrap();

    assert_eq!(
        session.press(GateToken::H).unwrap(),
        PressOutcome::Refused(Refusal::RotationPending(Axis::Y))
    );
    let mut viz = Recording::accepting();
    assert_eq!(
        session.visualize(&mut viz).unwrap(),
        VisualizeOutcome::RotationPending(Axis::Y)
    );
    assert!(viz.seen.is_empty());
    assert_eq!(session.display(), "RY");

    session.choose_angle(AngleChoice::HalfPi).unwrap();
    assert!(matches!(
        session.press(GateToken::H).unwrap(),
        PressOutcome::Applied { count: 2, .. }
    ));
}

#[test]
fn angle_without_pending_rotation_is_an_error() {
    let mut session = Session::default();
    assert!(matches!(
        session.choose_angle(AngleChoice::Pi),
        Err(SessionError::NoPendingRotation)
    ));
    assert!(session.circuit().is_empty());
}

#[test]
fn clear_resets_from_any_state() {
    let mut session = Session::new(&SessionConfig { capacity: 2 });
    session.press(GateToken::H).unwrap();
    session.press(GateToken::Rz).unwrap();
    assert_eq!(session.tracker_state(), TrackerState::Locked);
    assert!(session.pending().is_some());

    session.clear().unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.display, "");
    assert_eq!(snap.tracker, TrackerState::Open);
    assert_eq!(snap.pending, None);
    assert!(snap.operations.is_empty());

    session.clear().unwrap();
    assert_eq!(session.tracker_state(), TrackerState::Open);
}

#[test]
fn visualize_hands_over_the_circuit() {
    let mut session = Session::default();
    session.press(GateToken::T).unwrap();
    session.press(GateToken::Td).unwrap();

    let mut viz = Recording::accepting();
    assert_eq!(session.visualize(&mut viz).unwrap(), VisualizeOutcome::Rendered);
    assert_eq!(viz.seen.len(), 1);
    assert_eq!(viz.seen[0], *session.circuit());
    assert_eq!(session.window(), WindowState::Open);
}

#[test]
fn unsupported_visualization_closes_window() {
    let mut session = Session::default();
    session.press(GateToken::H).unwrap();

    let mut viz = Recording::refusing();
    assert_eq!(
        session.visualize(&mut viz).unwrap(),
        VisualizeOutcome::WindowClosed
    );
    assert!(session.is_closed());

    assert!(matches!(session.press(GateToken::X), Err(SessionError::Closed)));
    assert!(matches!(session.clear(), Err(SessionError::Closed)));
}

#[test]
fn other_visualization_errors_propagate() {
    let mut session = Session::default();
    let mut viz = Recording::failing();
    let err = session.visualize(&mut viz).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Visualization(VisualizationError::Io(_))
    ));
    assert_eq!(session.window(), WindowState::Open);
}

#[test]
fn dispatch_routes_events() {
    let mut session = Session::default();
    let mut viz = Recording::accepting();

    let script = ["h", "rx", "pi/2", "sd", "about", "visualize", "clear", "quit"];
    let outcomes: Vec<_> = script
        .iter()
        .map(|s| {
            let event: UiEvent = s.parse().unwrap();
            session.dispatch(event, &mut viz).unwrap()
        })
        .collect();

    assert!(matches!(outcomes[0], EventOutcome::Gate(PressOutcome::Applied { .. })));
    assert!(matches!(
        outcomes[1],
        EventOutcome::Gate(PressOutcome::AwaitingAngle { axis: Axis::X, .. })
    ));
    assert_eq!(
        outcomes[2],
        EventOutcome::AngleCommitted(op(GateKind::Rx, Some(PI / 2.0)))
    );
    assert!(matches!(outcomes[4], EventOutcome::About(text) if text.contains("RX")));
    assert_eq!(outcomes[5], EventOutcome::Visualize(VisualizeOutcome::Rendered));
    assert_eq!(viz.seen[0].len(), 3);
    assert_eq!(outcomes[6], EventOutcome::Cleared);
    assert_eq!(outcomes[7], EventOutcome::Quit);
    assert!(session.is_closed());
}

#[test]
fn snapshot_serializes() {
    let mut session = Session::default();
    session.press(GateToken::Rx).unwrap();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["display"], "RX");
    assert_eq!(json["logical_count"], 1);
    assert_eq!(json["tracker"], "open");
    assert_eq!(json["pending"], "x");
    assert_eq!(json["window"], "open");
}
