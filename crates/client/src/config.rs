//! Client configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use pawn_controller::{ConfigLoader, ControllerConfig};

/// Headless client settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// RON scenario to replay.
    pub scenario: PathBuf,
    /// Optional TOML controller settings.
    pub controller_config: Option<PathBuf>,
    pub tick_hz: u32,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario: PathBuf::from(Self::DEFAULT_SCENARIO),
            controller_config: None,
            tick_hz: Self::DEFAULT_TICK_HZ,
            session_id: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_SCENARIO: &'static str = "demos/scenario.ron";
    pub const DEFAULT_TICK_HZ: u32 = 60;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TOPDOWN_SCENARIO` - Scenario file (default: demos/scenario.ron)
    /// - `TOPDOWN_CONFIG` - Controller TOML file (default: none)
    /// - `TOPDOWN_TICK_HZ` - Simulation rate (default: 60)
    /// - `TOPDOWN_SESSION_ID` - Log directory name (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("TOPDOWN_SCENARIO") {
            config.scenario = path;
        }
        config.controller_config = read_env::<PathBuf>("TOPDOWN_CONFIG");
        if let Some(hz) = read_env::<u32>("TOPDOWN_TICK_HZ") {
            config.tick_hz = hz.clamp(1, 1000);
        }
        config.session_id = env::var("TOPDOWN_SESSION_ID")
            .ok()
            .filter(|id| !id.is_empty());

        config
    }

    /// Resolves controller settings: the TOML file if one is configured,
    /// then `PAWN_*` environment overrides.
    pub fn controller(&self) -> Result<ControllerConfig> {
        let mut config = match &self.controller_config {
            Some(path) => ConfigLoader::load(path)?,
            None => ControllerConfig::default(),
        };
        config.apply_env();
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
