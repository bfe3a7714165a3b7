//! Player controller for top-down pawns.
//!
//! [`PlayerController`] turns raw input into intent state, runs the
//! per-tick driver that requests directional and targeted moves, triggers the
//! falling reaction on airborne transitions, and publishes every action
//! lifecycle event on an [`EventBus`].
//!
//! The pawn and the pointer queries stay owned by the host and are lent to
//! the controller for the duration of each call.

pub mod config;
pub mod controller;
pub mod events;
pub mod input;

pub use config::{ConfigLoader, ControllerConfig, EventConfig, InputConfig};
pub use controller::PlayerController;
pub use events::{ControllerEvent, EventBus};
pub use input::{InputEvent, InputPhase, MoveAxis};
