//! Axis-driven movement relative to the pawn camera.

use glam::Vec3;
use tracing::trace;

use crate::action::{ActionKind, PawnAction};
use crate::component::ActionRequest;
use crate::env::{ActionContext, CameraId};
use crate::error::ActionError;
use crate::priority::ActionPriority;
use crate::status::{AbortMode, AbortState, Progress};

/// Moves the pawn along the movement axes, relative to its camera yaw.
///
/// Runs until both axes read zero.
#[derive(Debug, Default)]
pub struct DirectionalMove {
    camera: Option<CameraId>,
}

impl DirectionalMove {
    pub const PRIORITY: ActionPriority = ActionPriority::Logic;

    pub fn new() -> Self {
        Self::default()
    }

    /// Request issued by the tick driver; aborts whatever it outranks.
    pub fn request() -> ActionRequest {
        ActionRequest::new(ActionKind::DirectionalMove, Self::PRIORITY, Self::new)
            .abort_current(true)
    }
}

/// Forward and right axes of a yaw-only rotation given in degrees.
pub fn movement_basis(yaw_degrees: f32) -> (Vec3, Vec3) {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    (Vec3::new(cos, sin, 0.0), Vec3::new(-sin, cos, 0.0))
}

impl PawnAction for DirectionalMove {
    fn kind(&self) -> ActionKind {
        ActionKind::DirectionalMove
    }

    fn start(&mut self, ctx: &mut ActionContext<'_>) -> Result<Progress, ActionError> {
        ctx.intent.set_directional_active(true);
        self.camera = ctx.pawn().and_then(|pawn| pawn.find_camera());
        Ok(Progress::Continue)
    }

    fn tick(&mut self, ctx: &mut ActionContext<'_>, _delta_seconds: f32) -> Progress {
        if !ctx.intent.has_directional_input() {
            ctx.intent.set_directional_active(false);
            return Progress::SUCCESS;
        }

        let (move_x, move_y) = (ctx.intent.move_x(), ctx.intent.move_y());
        let Some(pawn) = ctx.pawn_mut() else {
            trace!(error = %ActionError::NoPawnBound { kind: self.kind() }, "tick skipped");
            return Progress::Continue;
        };

        // No camera means world-aligned axes
        let yaw = self
            .camera
            .and_then(|camera| pawn.camera_yaw(camera))
            .unwrap_or(0.0);
        let (forward, right) = movement_basis(yaw);
        pawn.add_movement_input(forward * move_y + right * move_x, 1.0, false);

        Progress::Continue
    }

    fn abort(&mut self, ctx: &mut ActionContext<'_>, _mode: AbortMode) -> AbortState {
        ctx.intent.set_directional_active(false);
        AbortState::Done
    }
}
