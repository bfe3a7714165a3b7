//! Controller configuration structures and loaders.

use std::env;
use std::path::Path;

use anyhow::Context;
use pawn_actions::{TouchIndex, TraceChannel, TraceSettings};
use serde::{Deserialize, Serialize};

use crate::events::EventBus;

/// Controller settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub input: InputConfig,
    pub events: EventConfig,
}

impl ControllerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PAWN_TRACE_CHANNEL` - Pointer trace channel (default: visibility)
    /// - `PAWN_TOUCH_FINGER` - Finger traced for touch input (default: touch1)
    /// - `PAWN_EVENT_CAPACITY` - Lifecycle event buffer per subscriber (default: 256)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overrides fields that are set in the environment.
    pub fn apply_env(&mut self) {
        if let Some(channel) = read_env::<TraceChannel>("PAWN_TRACE_CHANNEL") {
            self.input.trace_channel = channel;
        }
        if let Some(finger) = read_env::<TouchIndex>("PAWN_TOUCH_FINGER") {
            self.input.touch_finger = finger;
        }
        if let Some(capacity) = read_env::<usize>("PAWN_EVENT_CAPACITY") {
            self.events.capacity = capacity.max(1);
        }
    }
}

/// Pointer trace settings for targeted moves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub trace_channel: TraceChannel,
    pub touch_finger: TouchIndex,
}

impl InputConfig {
    pub fn trace_settings(&self) -> TraceSettings {
        TraceSettings {
            channel: self.trace_channel,
            finger: self.touch_finger,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub capacity: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            capacity: EventBus::DEFAULT_CAPACITY,
        }
    }
}

/// Loader for controller configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`ControllerConfig`] from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<ControllerConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        let mut config: ControllerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))?;

        config.events.capacity = config.events.capacity.max(1);
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
