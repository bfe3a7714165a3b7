//! Headless top-down client.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ Scenario (timed inputs read from RON)
//!   ├─→ DemoWorld (flat-plane pawn and pointer)
//!   └─→ PlayerController (intent, driver, arbitrator, event bus)
//! ```
//!
//! Each tick the client applies the scenario frame, steps the demo pawn,
//! forwards movement-mode changes to the controller, then runs the
//! controller tick. A background task prints every lifecycle event as one
//! JSON line.

mod builder;
pub mod config;
pub mod logging;
pub mod scenario;
pub mod world;

pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use scenario::{Scenario, ScenarioFrame};
pub use world::{DemoPawn, DemoView, Transition};

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use glam::Vec3;
use pawn_actions::Pawn;
use pawn_controller::{ControllerEvent, PlayerController};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// What a finished run looked like.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub events: usize,
    pub final_location: Vec3,
}

/// Pawn and pointer of the demo world.
#[derive(Debug)]
pub struct DemoWorld {
    pub pawn: DemoPawn,
    pub view: DemoView,
}

/// Replays one scenario against one controller.
pub struct Client {
    controller: PlayerController,
    world: DemoWorld,
    scenario: Scenario,
    tick_hz: u32,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the scenario to completion.
    ///
    /// Ticks on a fixed interval, releases the pawn at the end and waits for
    /// the event printer to drain.
    pub async fn run(self, out: impl Write + Send + 'static) -> Result<RunSummary> {
        let Self {
            mut controller,
            mut world,
            scenario,
            tick_hz,
        } = self;

        let printer = tokio::spawn(print_events(controller.subscribe_events(), out));

        let period = Duration::from_secs_f64(1.0 / f64::from(tick_hz));
        let dt = period.as_secs_f32();
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(scenario = %scenario.name, ticks = scenario.ticks, tick_hz, "running scenario");
        controller.possess();
        for tick in 0..scenario.ticks {
            interval.tick().await;
            step(&mut controller, &mut world, &scenario, tick, dt);
        }
        controller.unpossess(Some(&mut world.pawn), Some(&world.view));

        // Closing the bus ends the printer
        drop(controller);
        let events = printer.await.context("Event printer panicked")??;

        let summary = RunSummary {
            ticks: scenario.ticks,
            events,
            final_location: world.pawn.location(),
        };
        info!(events, location = %summary.final_location, "scenario finished");
        Ok(summary)
    }
}

fn step(
    controller: &mut PlayerController,
    world: &mut DemoWorld,
    scenario: &Scenario,
    tick: u64,
    dt: f32,
) {
    for frame in scenario.frames_at(tick) {
        if let Some(pointer) = frame.pointer {
            world.view.set_pointer(pointer);
        }
        if let Some(speed) = frame.knock_up {
            world.pawn.knock_up(speed);
        }
        for input in &frame.inputs {
            controller.handle_input(*input, Some(&mut world.pawn));
        }
    }

    match world.pawn.step(dt) {
        Some(Transition::BeganAirborne { was_jump }) => {
            controller.on_begin_airborne(was_jump, Some(&mut world.pawn), Some(&world.view));
        }
        Some(Transition::Landed(hit)) => {
            controller.on_landed(hit, Some(&mut world.pawn), Some(&world.view));
        }
        None => {}
    }

    controller.player_tick(dt, Some(&mut world.pawn), Some(&world.view));
}

/// Writes each event as a JSON line until the bus closes. Returns the count.
async fn print_events(
    mut rx: broadcast::Receiver<ControllerEvent>,
    mut out: impl Write,
) -> Result<usize> {
    let mut count = 0;
    loop {
        match rx.recv().await {
            Ok(event) => {
                let line = serde_json::to_string(&event).context("Failed to encode event")?;
                writeln!(out, "{line}").context("Failed to write event")?;
                count += 1;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "event printer lagging");
            }
            Err(RecvError::Closed) => break,
        }
    }
    out.flush().context("Failed to flush events")?;
    debug!(count, "event printer done");
    Ok(count)
}
