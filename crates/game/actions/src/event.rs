//! Lifecycle events recorded by the arbitrator.

use crate::action::{ActionId, ActionKind};
use crate::error::ActionError;
use crate::priority::ActionPriority;
use crate::status::{AbortMode, ActionResult};

/// One arbitration or lifecycle transition.
///
/// The arbitrator appends these to an outbox in the order they happen;
/// the controller drains and publishes them after each call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionEvent {
    /// An action was created and started.
    Started {
        id: ActionId,
        kind: ActionKind,
        priority: ActionPriority,
    },

    /// A request is waiting for the incumbent to finish.
    Queued {
        kind: ActionKind,
        priority: ActionPriority,
    },

    /// A request was not granted.
    Rejected { error: ActionError },

    /// The running action was asked to abort.
    Aborted {
        id: ActionId,
        kind: ActionKind,
        mode: AbortMode,
    },

    /// An action was released.
    Finished {
        id: ActionId,
        kind: ActionKind,
        result: ActionResult,
    },
}

impl ActionEvent {
    /// Kind of the action the event is about.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Started { kind, .. }
            | Self::Queued { kind, .. }
            | Self::Aborted { kind, .. }
            | Self::Finished { kind, .. } => *kind,
            Self::Rejected { error } => match error {
                ActionError::PriorityRejected { requested, .. } => *requested,
                ActionError::Superseded { kind }
                | ActionError::NoPawnBound { kind }
                | ActionError::StartFailed { kind, .. } => *kind,
                ActionError::MissingHit => ActionKind::TargetedMove,
            },
        }
    }
}
