//! Headless top-down client binary.
//!
//! Replays a RON input scenario against a demo pawn and prints every action
//! lifecycle event to stdout as a JSON line.
//!
//! ```bash
//! TOPDOWN_SCENARIO=demos/scenario.ron TOPDOWN_CONFIG=demos/controller.toml \
//!     cargo run -p topdown-client
//! ```

use anyhow::Result;
use topdown_client::{Client, ClientConfig, Scenario, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on exit
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    // 3. Load scenario and controller settings
    let scenario = Scenario::load(&config.scenario)?;
    let controller = config.controller()?;
    tracing::debug!(?controller, "controller settings");

    // 4. Build and run
    let summary = Client::builder()
        .scenario(scenario)
        .controller(controller)
        .tick_hz(config.tick_hz)
        .build()?
        .run(std::io::stdout())
        .await?;

    tracing::info!(
        ticks = summary.ticks,
        events = summary.events,
        "Done"
    );
    Ok(())
}
