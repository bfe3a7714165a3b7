//! Raw input events bound to the controller.

use pawn_actions::TouchIndex;
use serde::{Deserialize, Serialize};

/// Movement axis an [`InputEvent::Axis`] value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAxis {
    /// Right/left; positive is right.
    MoveRight,
    /// Forward/backward; positive is forward.
    MoveForward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputPhase {
    Pressed,
    Released,
}

/// One raw input signal, as produced by device bindings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Current value of a movement axis.
    Axis { axis: MoveAxis, value: f32 },
    /// Mouse button that drives the targeted move.
    SetDestination(InputPhase),
    /// Finger press or release on a touch screen.
    Touch { finger: TouchIndex, phase: InputPhase },
    /// Voluntary jump.
    Jump,
}
