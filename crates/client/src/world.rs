//! Flat-plane demo world standing in for a game engine.
//!
//! Gives the controller a pawn with just enough kinematics to walk, jump,
//! get knocked airborne and land.

use glam::Vec3;
use pawn_actions::{
    CameraId, ControllerId, HitResult, LandedDelegate, Pawn, PlayerView, TouchIndex, TraceChannel,
};

/// Movement-mode change reported by [`DemoPawn::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    BeganAirborne { was_jump: bool },
    Landed(HitResult),
}

/// Pawn on an infinite plane at `z = 0`.
#[derive(Debug)]
pub struct DemoPawn {
    location: Vec3,
    velocity: Vec3,
    pending_input: Vec3,
    camera_yaw: f32,
    falling: bool,
    jump_requested: bool,
    landed: LandedDelegate,
}

impl DemoPawn {
    /// Ground speed at full input, in units per second.
    pub const WALK_SPEED: f32 = 6.0;
    pub const JUMP_SPEED: f32 = 8.0;
    pub const GRAVITY: f32 = -20.0;

    pub fn new(camera_yaw: f32) -> Self {
        Self {
            location: Vec3::ZERO,
            velocity: Vec3::ZERO,
            pending_input: Vec3::ZERO,
            camera_yaw,
            falling: false,
            jump_requested: false,
            landed: LandedDelegate::new(),
        }
    }

    /// Launches the pawn upward as if hit by something.
    pub fn knock_up(&mut self, speed: f32) {
        self.velocity.z = self.velocity.z.max(speed);
    }

    /// Integrates one tick of movement and consumes the accumulated input.
    pub fn step(&mut self, dt: f32) -> Option<Transition> {
        let input = std::mem::take(&mut self.pending_input).clamp_length_max(1.0);
        let mut transition = None;

        if !self.falling {
            self.velocity.x = input.x * Self::WALK_SPEED;
            self.velocity.y = input.y * Self::WALK_SPEED;

            let was_jump = std::mem::take(&mut self.jump_requested);
            if was_jump {
                self.velocity.z = Self::JUMP_SPEED;
            }
            if self.velocity.z > 0.0 {
                self.falling = true;
                transition = Some(Transition::BeganAirborne { was_jump });
            }
        } else {
            self.velocity.z += Self::GRAVITY * dt;
        }

        self.location += self.velocity * dt;

        if self.falling && self.location.z <= 0.0 {
            self.location.z = 0.0;
            self.velocity = Vec3::ZERO;
            self.falling = false;
            transition = Some(Transition::Landed(HitResult::at(self.location)));
        }

        transition
    }
}

impl Pawn for DemoPawn {
    fn location(&self) -> Vec3 {
        self.location
    }

    fn add_movement_input(&mut self, world_direction: Vec3, scale: f32, _force: bool) {
        self.pending_input += world_direction * scale;
    }

    fn find_camera(&self) -> Option<CameraId> {
        Some(CameraId(0))
    }

    fn camera_yaw(&self, camera: CameraId) -> Option<f32> {
        (camera == CameraId(0)).then_some(self.camera_yaw)
    }

    fn is_falling(&self) -> bool {
        self.falling
    }

    fn jump(&mut self) {
        if !self.falling {
            self.jump_requested = true;
        }
    }

    fn landed(&self) -> &LandedDelegate {
        &self.landed
    }
}

/// Pointer that always hits the plane at a scripted point.
#[derive(Debug)]
pub struct DemoView {
    id: ControllerId,
    pointer: Option<Vec3>,
}

impl DemoView {
    pub fn new(id: ControllerId) -> Self {
        Self { id, pointer: None }
    }

    pub fn set_pointer(&mut self, location: Vec3) {
        self.pointer = Some(location.with_z(0.0));
    }

    fn hit(&self) -> Option<HitResult> {
        self.pointer.map(HitResult::at)
    }
}

impl PlayerView for DemoView {
    fn id(&self) -> ControllerId {
        self.id
    }

    fn hit_under_cursor(&self, _channel: TraceChannel) -> Option<HitResult> {
        self.hit()
    }

    fn hit_under_finger(&self, _finger: TouchIndex, _channel: TraceChannel) -> Option<HitResult> {
        self.hit()
    }
}
