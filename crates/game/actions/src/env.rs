//! Collaborators supplied by the host and the per-call action context.
//!
//! The arbitrator never computes physics or talks to input devices. The host
//! exposes the controlled pawn through [`Pawn`] and pointer hit queries
//! through [`PlayerView`], and hands both to the actions in an
//! [`ActionContext`] together with the controller's [`IntentState`].

use glam::Vec3;

use crate::delegate::LandedDelegate;
use crate::intent::IntentState;

/// Handle to a camera attached to a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(pub u32);

/// Identifier of the player controller issuing hit queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(pub u32);

/// Result of a world trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitResult {
    /// World location of the impact.
    pub location: Vec3,
    /// Surface normal at the impact.
    pub normal: Vec3,
}

impl HitResult {
    /// Creates a hit at `location` on an upward-facing surface.
    pub fn at(location: Vec3) -> Self {
        Self {
            location,
            normal: Vec3::Z,
        }
    }
}

/// Collision channel used for pointer traces.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TraceChannel {
    /// Anything that blocks sight.
    #[default]
    Visibility,
    /// Anything that blocks the camera.
    Camera,
}

/// Finger used for touch traces.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TouchIndex {
    #[default]
    Touch1,
    Touch2,
    Touch3,
    Touch4,
    Touch5,
}

/// The controlled pawn as seen by actions.
pub trait Pawn {
    /// Current world location.
    fn location(&self) -> Vec3;

    /// Queues movement input for this frame.
    ///
    /// The input is accumulated and clamped by the movement component; callers
    /// do not normalize it.
    fn add_movement_input(&mut self, world_direction: Vec3, scale: f32, force: bool);

    /// Finds the camera attached to this pawn, if any.
    fn find_camera(&self) -> Option<CameraId>;

    /// Yaw of the given camera in degrees, or `None` if it no longer exists.
    fn camera_yaw(&self, camera: CameraId) -> Option<f32>;

    /// Returns `true` while the pawn is airborne.
    fn is_falling(&self) -> bool;

    /// Starts a voluntary jump.
    fn jump(&mut self);

    /// Landing notification owned by this pawn.
    fn landed(&self) -> &LandedDelegate;
}

/// Pointer hit queries of the issuing player controller.
pub trait PlayerView {
    /// Identifies the controller answering the queries.
    fn id(&self) -> ControllerId;

    /// Traces the world under the mouse cursor.
    fn hit_under_cursor(&self, channel: TraceChannel) -> Option<HitResult>;

    /// Traces the world under the given finger.
    fn hit_under_finger(&self, finger: TouchIndex, channel: TraceChannel) -> Option<HitResult>;
}

/// Everything an action may touch during a callback.
///
/// The context is rebuilt by the controller for every call into the
/// arbitrator. A missing pawn is a transient condition: actions skip their
/// per-tick work rather than fail.
pub struct ActionContext<'a> {
    /// Shared intent blackboard of the owning controller.
    pub intent: &'a mut IntentState,
    pawn: Option<&'a mut dyn Pawn>,
    view: Option<&'a dyn PlayerView>,
}

impl<'a> ActionContext<'a> {
    /// Creates a context with no pawn and no view bound.
    pub fn new(intent: &'a mut IntentState) -> Self {
        Self {
            intent,
            pawn: None,
            view: None,
        }
    }

    /// Binds the controlled pawn (builder pattern).
    #[must_use]
    pub fn with_pawn(mut self, pawn: &'a mut dyn Pawn) -> Self {
        self.pawn = Some(pawn);
        self
    }

    /// Binds the issuing controller's view (builder pattern).
    #[must_use]
    pub fn with_view(mut self, view: &'a dyn PlayerView) -> Self {
        self.view = Some(view);
        self
    }

    /// Returns the controlled pawn, if bound.
    pub fn pawn(&self) -> Option<&dyn Pawn> {
        self.pawn.as_deref()
    }

    /// Returns the controlled pawn mutably, if bound.
    pub fn pawn_mut(&mut self) -> Option<&mut (dyn Pawn + 'a)> {
        self.pawn.as_deref_mut()
    }

    /// Returns the issuing controller's view, if bound.
    pub fn view(&self) -> Option<&'a dyn PlayerView> {
        self.view
    }
}
