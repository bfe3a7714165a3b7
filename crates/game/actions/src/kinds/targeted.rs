//! Movement toward the point under the pointer.

use tracing::trace;

use crate::action::{ActionKind, PawnAction};
use crate::component::ActionRequest;
use crate::env::{ActionContext, ControllerId, HitResult, TouchIndex, TraceChannel};
use crate::error::ActionError;
use crate::priority::ActionPriority;
use crate::status::{AbortMode, AbortState, Progress};

/// Which trace the targeted move runs under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraceSettings {
    pub channel: TraceChannel,
    /// Finger traced while the pointer is a touch.
    pub finger: TouchIndex,
}

/// Moves the pawn toward whatever is under the cursor or finger.
///
/// Runs while the pointer is held. A trace that hits nothing costs a tick of
/// movement but does not end the action.
#[derive(Debug, Default)]
pub struct TargetedMove {
    settings: TraceSettings,
    controller: Option<ControllerId>,
}

impl TargetedMove {
    pub const PRIORITY: ActionPriority = ActionPriority::Logic;

    pub fn new(settings: TraceSettings) -> Self {
        Self {
            settings,
            controller: None,
        }
    }

    /// Request issued by the tick driver; aborts whatever it outranks.
    pub fn request(settings: TraceSettings) -> ActionRequest {
        ActionRequest::new(ActionKind::TargetedMove, Self::PRIORITY, move || {
            Self::new(settings)
        })
        .abort_current(true)
    }

    fn trace_pointer(&self, ctx: &ActionContext<'_>) -> Result<HitResult, ActionError> {
        // Only the controller that issued the move may steer it
        let view = ctx
            .view()
            .filter(|view| Some(view.id()) == self.controller)
            .ok_or(ActionError::MissingHit)?;

        let TraceSettings { channel, finger } = self.settings;
        let hit = if ctx.intent.is_touch() {
            view.hit_under_finger(finger, channel)
        } else {
            view.hit_under_cursor(channel)
        };
        hit.ok_or(ActionError::MissingHit)
    }
}

impl PawnAction for TargetedMove {
    fn kind(&self) -> ActionKind {
        ActionKind::TargetedMove
    }

    fn start(&mut self, ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
        ctx.intent.set_targeted_active(true);
        self.controller = ctx.view().map(|view| view.id());
        Ok(Progress::Continue)
    }

    fn tick(&mut self, ctx: &mut ActionContext<'_>, _delta_seconds: f32) -> Progress {
        if !ctx.intent.pointer_pressed() {
            ctx.intent.set_targeted_active(false);
            return Progress::SUCCESS;
        }

        let hit = match self.trace_pointer(ctx) {
            Ok(hit) => hit,
            Err(error) => {
                trace!(%error, channel = %self.settings.channel, "no movement this tick");
                return Progress::Continue;
            }
        };

        let Some(pawn) = ctx.pawn_mut() else {
            trace!(error = %ActionError::NoPawnBound { kind: self.kind() }, "tick skipped");
            return Progress::Continue;
        };

        let direction = (hit.location - pawn.location()).normalize_or_zero();
        pawn.add_movement_input(direction, 1.0, false);
        Progress::Continue
    }

    fn abort(&mut self, ctx: &mut ActionContext<'_>, _mode: AbortMode) -> AbortState {
        ctx.intent.set_targeted_active(false);
        AbortState::Done
    }
}
