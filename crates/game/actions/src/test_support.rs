//! Mock collaborators for unit tests.

use std::cell::Cell;

use glam::Vec3;

use crate::delegate::LandedDelegate;
use crate::env::{CameraId, ControllerId, HitResult, Pawn, PlayerView, TouchIndex, TraceChannel};

#[derive(Debug, Default)]
pub struct MockPawn {
    pub location: Vec3,
    pub camera_yaw: Option<f32>,
    pub falling: bool,
    pub jumps: u32,
    pub inputs: Vec<(Vec3, f32, bool)>,
    pub landed: LandedDelegate,
}

impl MockPawn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(mut self, yaw_degrees: f32) -> Self {
        self.camera_yaw = Some(yaw_degrees);
        self
    }

    pub fn falling(mut self) -> Self {
        self.falling = true;
        self
    }
}

impl Pawn for MockPawn {
    fn location(&self) -> Vec3 {
        self.location
    }

    fn add_movement_input(&mut self, world_direction: Vec3, scale: f32, force: bool) {
        self.inputs.push((world_direction, scale, force));
    }

    fn find_camera(&self) -> Option<CameraId> {
        self.camera_yaw.map(|_| CameraId(0))
    }

    fn camera_yaw(&self, _camera: CameraId) -> Option<f32> {
        self.camera_yaw
    }

    fn is_falling(&self) -> bool {
        self.falling
    }

    fn jump(&mut self) {
        self.jumps += 1;
        self.falling = true;
    }

    fn landed(&self) -> &LandedDelegate {
        &self.landed
    }
}

#[derive(Debug)]
pub struct MockView {
    pub id: ControllerId,
    pub cursor: Option<HitResult>,
    pub finger: Option<HitResult>,
    pub cursor_queries: Cell<u32>,
    pub last_finger: Cell<Option<(TouchIndex, TraceChannel)>>,
}

impl MockView {
    pub fn new(id: u32) -> Self {
        Self {
            id: ControllerId(id),
            cursor: None,
            finger: None,
            cursor_queries: Cell::new(0),
            last_finger: Cell::new(None),
        }
    }

    pub fn with_cursor(mut self, location: Vec3) -> Self {
        self.cursor = Some(HitResult::at(location));
        self
    }

    pub fn with_finger(mut self, location: Vec3) -> Self {
        self.finger = Some(HitResult::at(location));
        self
    }
}

impl PlayerView for MockView {
    fn id(&self) -> ControllerId {
        self.id
    }

    fn hit_under_cursor(&self, _channel: TraceChannel) -> Option<HitResult> {
        self.cursor_queries.set(self.cursor_queries.get() + 1);
        self.cursor
    }

    fn hit_under_finger(&self, finger: TouchIndex, channel: TraceChannel) -> Option<HitResult> {
        self.last_finger.set(Some((finger, channel)));
        self.finger
    }
}
