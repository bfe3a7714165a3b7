//! Scripted input scenarios stored as RON.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::Vec3;
use pawn_controller::InputEvent;
use serde::{Deserialize, Serialize};

/// A timed sequence of inputs replayed by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// Yaw of the pawn camera, in degrees.
    #[serde(default)]
    pub camera_yaw: f32,
    #[serde(default)]
    pub frames: Vec<ScenarioFrame>,
}

/// Everything that happens before the controller ticks on one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFrame {
    pub tick: u64,
    #[serde(default)]
    pub inputs: Vec<InputEvent>,
    /// Moves the point under the cursor and finger.
    #[serde(default)]
    pub pointer: Option<Vec3>,
    /// Launches the pawn upward at this speed without a jump.
    #[serde(default)]
    pub knock_up: Option<f32>,
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        Self::from_ron(&content)
            .with_context(|| format!("Failed to load scenario {}", path.display()))
    }

    /// Parse a scenario; frames are ordered by tick.
    pub fn from_ron(content: &str) -> Result<Self> {
        let mut scenario: Scenario =
            ron::from_str(content).context("Failed to parse scenario RON")?;
        ensure!(scenario.ticks > 0, "scenario '{}' has no ticks", scenario.name);

        scenario.frames.sort_by_key(|frame| frame.tick);
        Ok(scenario)
    }

    /// Frames scheduled for `tick`.
    pub fn frames_at(&self, tick: u64) -> impl Iterator<Item = &ScenarioFrame> {
        self.frames.iter().filter(move |frame| frame.tick == tick)
    }
}
