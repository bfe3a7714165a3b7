//! Arbitration and action errors.
//!
//! None of these propagate to the host as a hard failure. Each is absorbed by
//! the component that detects it and degrades to "no movement this tick" or
//! "request not granted". They exist so that outcomes can be logged and
//! asserted on with a stable code.

use crate::action::ActionKind;
use crate::priority::ActionPriority;

/// Severity of an [`ActionError`], used to pick a log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorSeverity {
    /// Normal control-flow outcome; nothing went wrong.
    ///
    /// Examples: request outranked by the incumbent, request superseded
    Expected,

    /// Condition that may clear up on a later tick.
    ///
    /// Examples: pawn despawned, pointer trace missed
    Transient,

    /// The action could not be used as requested.
    ///
    /// Examples: start refused
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expected => "expected",
            Self::Transient => "transient",
            Self::Validation => "validation",
        }
    }
}

/// Reasons a request or a tick did not do what was asked.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionError {
    /// The incumbent outranks the request.
    #[error("{requested} ({priority}) rejected: {incumbent} ({incumbent_priority}) is running")]
    PriorityRejected {
        requested: ActionKind,
        priority: ActionPriority,
        incumbent: ActionKind,
        incumbent_priority: ActionPriority,
    },

    /// A later or more urgent request was started instead.
    #[error("{kind} superseded by another request")]
    Superseded { kind: ActionKind },

    /// The controlled pawn could not be resolved.
    #[error("{kind} has no pawn bound")]
    NoPawnBound { kind: ActionKind },

    /// The pointer trace hit nothing.
    #[error("pointer trace hit nothing")]
    MissingHit,

    /// The action refused to start.
    #[error("{kind} failed to start: {reason}")]
    StartFailed {
        kind: ActionKind,
        reason: &'static str,
    },
}

impl ActionError {
    /// Returns the severity level of this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PriorityRejected { .. } | Self::Superseded { .. } => ErrorSeverity::Expected,
            Self::NoPawnBound { .. } | Self::MissingHit => ErrorSeverity::Transient,
            Self::StartFailed { .. } => ErrorSeverity::Validation,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PriorityRejected { .. } => "ACTION_PRIORITY_REJECTED",
            Self::Superseded { .. } => "ACTION_SUPERSEDED",
            Self::NoPawnBound { .. } => "ACTION_NO_PAWN_BOUND",
            Self::MissingHit => "ACTION_MISSING_HIT",
            Self::StartFailed { .. } => "ACTION_START_FAILED",
        }
    }

    /// Creates a StartFailed error.
    pub fn start_failed(kind: ActionKind, reason: &'static str) -> Self {
        Self::StartFailed { kind, reason }
    }
}
