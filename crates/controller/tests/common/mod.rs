//! Shared test fixtures for controller scenarios.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use glam::Vec3;
use pawn_actions::{
    CameraId, ControllerId, HitResult, LandedDelegate, Pawn, PlayerView, TouchIndex, TraceChannel,
};
use pawn_controller::{ControllerConfig, PlayerController};

pub const DT: f32 = 1.0 / 60.0;

pub fn controller() -> PlayerController {
    let mut controller = PlayerController::new(ControllerId(1), &ControllerConfig::default());
    controller.possess();
    controller
}

/// Pawn that records every movement input.
#[derive(Debug, Default)]
pub struct TestPawn {
    pub location: Vec3,
    pub falling: bool,
    pub jumps: u32,
    pub inputs: Vec<Vec3>,
    pub landed: LandedDelegate,
}

impl TestPawn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pawn for TestPawn {
    fn location(&self) -> Vec3 {
        self.location
    }

    fn add_movement_input(&mut self, world_direction: Vec3, scale: f32, _force: bool) {
        self.inputs.push(world_direction * scale);
    }

    fn find_camera(&self) -> Option<CameraId> {
        None
    }

    fn camera_yaw(&self, _camera: CameraId) -> Option<f32> {
        None
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

/// View answering pointer traces from a script, then with misses.
#[derive(Debug)]
pub struct ScriptedView {
    pub id: ControllerId,
    pub hits: RefCell<VecDeque<Option<HitResult>>>,
    pub queries: Cell<u32>,
}

impl ScriptedView {
    pub fn new(hits: impl IntoIterator<Item = Option<Vec3>>) -> Self {
        Self {
            id: ControllerId(1),
            hits: RefCell::new(hits.into_iter().map(|hit| hit.map(HitResult::at)).collect()),
            queries: Cell::new(0),
        }
    }

    /// View whose every trace hits `location`.
    pub fn always(location: Vec3) -> Self {
        Self::new(std::iter::repeat_n(Some(location), 1024))
    }

    fn next_hit(&self) -> Option<HitResult> {
        self.queries.set(self.queries.get() + 1);
        self.hits.borrow_mut().pop_front().flatten()
    }
}

impl PlayerView for ScriptedView {
    fn id(&self) -> ControllerId {
        self.id
    }

    fn hit_under_cursor(&self, _channel: TraceChannel) -> Option<HitResult> {
        self.next_hit()
    }

    fn hit_under_finger(&self, _finger: TouchIndex, _channel: TraceChannel) -> Option<HitResult> {
        self.next_hit()
    }
}
