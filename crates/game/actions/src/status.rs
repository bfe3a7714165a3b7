//! Lifecycle states and results reported by actions.

/// Lifecycle state of an action instance.
///
/// ```text
/// Inactive ──start──▶ Running ──finish──────────────▶ Finished
///                       │                                 ▲
///                       └─graceful abort─▶ AbortPending ──┘
/// ```
///
/// A forced abort, or a graceful abort the action completes in one step, goes
/// straight from `Running` to `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionState {
    /// Created but not started yet.
    Inactive,
    /// Started and receiving ticks and events.
    Running,
    /// A graceful abort was requested and the action is winding down.
    AbortPending,
    /// Done; the arbitrator has released it.
    Finished,
}

impl ActionState {
    /// Returns `true` while the action still occupies the arbitrator.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, ActionState::Running | ActionState::AbortPending)
    }
}

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionResult {
    /// The action reached its own stopping point.
    Success,
    /// The action gave up on its own.
    Failed,
    /// The action was aborted gracefully.
    Aborted,
    /// The action was aborted without a chance to wind down.
    ForciblyAborted,
}

impl ActionResult {
    /// Returns `true` if this result is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, ActionResult::Success)
    }

    /// Returns `true` if the action ended through the abort path.
    #[inline]
    pub fn is_aborted(self) -> bool {
        matches!(self, ActionResult::Aborted | ActionResult::ForciblyAborted)
    }
}

/// How an abort request treats the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AbortMode {
    /// The incumbent may answer [`AbortState::Pending`] and finish later.
    Graceful,
    /// The incumbent is finished in the same call, whatever it answers.
    Forced,
}

impl AbortMode {
    /// Result recorded for an action that ends through this abort mode.
    #[inline]
    pub fn result(self) -> ActionResult {
        match self {
            AbortMode::Graceful => ActionResult::Aborted,
            AbortMode::Forced => ActionResult::ForciblyAborted,
        }
    }
}

/// Answer of an action to an abort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbortState {
    /// Cleanup is complete; the action can be released now.
    Done,
    /// The action needs more ticks to reach a clean stopping point.
    Pending,
}

/// What the arbitrator should do with an action after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Progress {
    /// Keep the action running.
    Continue,
    /// Release the action with the given result.
    Finish(ActionResult),
}

impl Progress {
    /// Shorthand for `Progress::Finish(ActionResult::Success)`.
    pub const SUCCESS: Progress = Progress::Finish(ActionResult::Success);

    /// Returns `true` if this is `Finish`.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Progress::Finish(_))
    }
}
