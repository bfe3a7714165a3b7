//! Airborne reaction that ends on landing.

use tracing::debug;

use crate::action::{ActionKind, PawnAction, PawnEvent};
use crate::component::ActionRequest;
use crate::delegate::LandedSubscription;
use crate::env::ActionContext;
use crate::error::ActionError;
use crate::priority::ActionPriority;
use crate::status::{AbortMode, AbortState, Progress};

/// Holds the pawn while it is airborne and ends when it lands.
///
/// Blocks every Logic request for its whole duration. The landing
/// subscription lives in the action, so dropping the action releases it.
#[derive(Debug, Default)]
pub struct FallingReaction {
    subscription: Option<LandedSubscription>,
}

impl FallingReaction {
    pub const PRIORITY: ActionPriority = ActionPriority::Reaction;

    pub fn new() -> Self {
        Self::default()
    }

    /// Request issued when the pawn leaves the ground.
    ///
    /// A voluntary jump lets the running action finish first; any other
    /// fall cuts it off.
    pub fn request(was_jump: bool) -> ActionRequest {
        ActionRequest::new(ActionKind::FallingReaction, Self::PRIORITY, Self::new)
            .abort_current(!was_jump)
    }

    /// Returns `true` while the landing subscription is held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

impl PawnAction for FallingReaction {
    fn kind(&self) -> ActionKind {
        ActionKind::FallingReaction
    }

    fn start(&mut self, ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
        let Some(pawn) = ctx.pawn() else {
            return Err(ActionError::start_failed(self.kind(), "no pawn bound"));
        };

        if !pawn.is_falling() {
            // Queued behind another action and the pawn landed meanwhile
            debug!("pawn already grounded");
            return Ok(Progress::SUCCESS);
        }

        self.subscription = Some(pawn.landed().subscribe());
        Ok(Progress::Continue)
    }

    fn tick(&mut self, _ctx: &mut ActionContext<'_>, _delta_seconds: f32) -> Progress {
        // Landing broadcast by the pawn itself
        match self.subscription.as_ref().and_then(LandedSubscription::take_landed) {
            Some(hit) => {
                debug!(location = %hit.location, "landed");
                self.subscription = None;
                Progress::SUCCESS
            }
            None => Progress::Continue,
        }
    }

    fn abort(&mut self, _ctx: &mut ActionContext<'_>, _mode: AbortMode) -> AbortState {
        self.subscription = None;
        AbortState::Done
    }

    fn on_event(&mut self, _ctx: &mut ActionContext<'_>, event: &PawnEvent) -> Progress {
        match event {
            PawnEvent::Landed(hit) if self.subscription.take().is_some() => {
                debug!(location = %hit.location, "landed");
                Progress::SUCCESS
            }
            PawnEvent::Landed(_) => Progress::Continue,
        }
    }
}
