//! Client builder.

use anyhow::{Context, Result, ensure};
use pawn_actions::ControllerId;
use pawn_controller::{ControllerConfig, PlayerController};

use crate::config::ClientConfig;
use crate::scenario::Scenario;
use crate::world::{DemoPawn, DemoView};
use crate::{Client, DemoWorld};

/// Builder for constructing a [`Client`].
///
/// The scenario is required; controller settings and tick rate default.
#[derive(Default)]
pub struct ClientBuilder {
    scenario: Option<Scenario>,
    controller: Option<ControllerConfig>,
    tick_hz: Option<u32>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scenario (required).
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn controller(mut self, config: ControllerConfig) -> Self {
        self.controller = Some(config);
        self
    }

    pub fn tick_hz(mut self, tick_hz: u32) -> Self {
        self.tick_hz = Some(tick_hz);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not set or the tick rate is zero.
    pub fn build(self) -> Result<Client> {
        let scenario = self
            .scenario
            .context("Scenario is required. Use .scenario() to set it.")?;
        let tick_hz = self.tick_hz.unwrap_or(ClientConfig::DEFAULT_TICK_HZ);
        ensure!(tick_hz > 0, "tick rate must be positive");

        let id = ControllerId(0);
        let controller = PlayerController::new(id, &self.controller.unwrap_or_default());
        let world = DemoWorld {
            pawn: DemoPawn::new(scenario.camera_yaw),
            view: DemoView::new(id),
        };

        Ok(Client {
            controller,
            world,
            scenario,
            tick_hz,
        })
    }
}
