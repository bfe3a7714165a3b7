//! Core action trait.
//!
//! This module defines the [`PawnAction`] trait, the single capability
//! interface every concrete action implements. The arbitrator only ever holds
//! a `Box<dyn PawnAction>`; it never needs the concrete type.

use core::fmt;

use crate::env::{ActionContext, HitResult};
use crate::error::ActionError;
use crate::status::{AbortMode, AbortState, Progress};

/// Identifier assigned by the arbitrator to each started action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionId(pub u64);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Label identifying what an action does, known before the action exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionKind {
    /// Continuous axis-driven motion.
    DirectionalMove,
    /// Motion toward the point under the cursor or finger.
    TargetedMove,
    /// Control suspended while airborne.
    FallingReaction,
    /// Host-defined action.
    Custom(&'static str),
}

impl ActionKind {
    /// Returns a stable name for logging.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::DirectionalMove => "directional_move",
            ActionKind::TargetedMove => "targeted_move",
            ActionKind::FallingReaction => "falling_reaction",
            ActionKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// External notifications routed to the running action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PawnEvent {
    /// The pawn touched ground after being airborne.
    Landed(HitResult),
}

/// A unit of pawn behavior managed by [`ActionsComponent`](crate::ActionsComponent).
///
/// # Lifecycle
///
/// 1. [`start`](Self::start) is called once when the arbitrator grants the request
/// 2. [`tick`](Self::tick) and [`on_event`](Self::on_event) are called while the
///    action is running or winding down after a graceful abort
/// 3. [`abort`](Self::abort) is called at most once, when a request displaces it
///
/// Returning [`Progress::Finish`] from any callback releases the action.
/// Cleanup that must happen on every exit path belongs in `Drop`.
pub trait PawnAction {
    /// Returns what this action does.
    fn kind(&self) -> ActionKind;

    /// Starts the action.
    ///
    /// # Returns
    ///
    /// - `Ok(Progress::Continue)` if the action is now running
    /// - `Ok(Progress::Finish(_))` if there was nothing to do
    /// - `Err(_)` if the action refuses to start
    fn start(&mut self, ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError>;

    /// Advances the action by one simulation tick.
    fn tick(&mut self, _ctx: &mut ActionContext<'_>, _delta_seconds: f32) -> Progress {
        Progress::Continue
    }

    /// Handles an abort request.
    ///
    /// The default completes the abort immediately.
    fn abort(&mut self, _ctx: &mut ActionContext<'_>, _mode: AbortMode) -> AbortState {
        AbortState::Done
    }

    /// Handles an external notification.
    fn on_event(&mut self, _ctx: &mut ActionContext<'_>, _event: &PawnEvent) -> Progress {
        Progress::Continue
    }
}

/// Blanket implementation for boxed actions.
impl PawnAction for Box<dyn PawnAction> {
    #[inline]
    fn kind(&self) -> ActionKind {
        (**self).kind()
    }

    #[inline]
    fn start(&mut self, ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
        (**self).start(ctx)
    }

    #[inline]
    fn tick(&mut self, ctx: &mut ActionContext<'_>, delta_seconds: f32) -> Progress {
        (**self).tick(ctx, delta_seconds)
    }

    #[inline]
    fn abort(&mut self, ctx: &mut ActionContext<'_>, mode: AbortMode) -> AbortState {
        (**self).abort(ctx, mode)
    }

    #[inline]
    fn on_event(&mut self, ctx: &mut ActionContext<'_>, event: &PawnEvent) -> Progress {
        (**self).on_event(ctx, event)
    }
}
