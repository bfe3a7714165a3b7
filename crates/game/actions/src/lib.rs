//! Priority-arbitrated pawn actions for top-down locomotion.
//!
//! A pawn runs at most one action at a time. Competing movement intents are
//! reduced to that single action by [`ActionsComponent`], which compares the
//! priority of each request against the incumbent and aborts, queues or drops
//! accordingly.
//!
//! - **Single-threaded**: starts, aborts and ticks run synchronously inside the
//!   frame update; abort is a cooperative call into the running action
//! - **Explicit context**: actions read and write [`IntentState`] through an
//!   [`ActionContext`] instead of global state
//! - **Collaborators as traits**: the pawn body and pointer queries are
//!   supplied by the host through [`Pawn`] and [`PlayerView`]
//!
//! # Architecture
//!
//! - [`PawnAction`]: Core trait for all actions
//! - [`ActionsComponent`]: The arbitrator owning the running action
//! - Concrete actions: [`DirectionalMove`], [`TargetedMove`], [`FallingReaction`]
//! - [`LandedDelegate`]: Landing notification with scoped subscriptions

pub mod action;
pub mod component;
pub mod delegate;
pub mod env;
pub mod error;
pub mod event;
pub mod intent;
pub mod kinds;
pub mod priority;
pub mod status;

pub use action::{ActionId, ActionKind, PawnAction, PawnEvent};
pub use component::{ActionFactory, ActionRequest, ActionsComponent, RequestOutcome};
pub use delegate::{LandedDelegate, LandedSubscription, SubscriptionId};
pub use env::{
    ActionContext, CameraId, ControllerId, HitResult, Pawn, PlayerView, TouchIndex, TraceChannel,
};
pub use error::{ActionError, ErrorSeverity};
pub use event::ActionEvent;
pub use intent::{IntentFlags, IntentState};
pub use kinds::{DirectionalMove, FallingReaction, TargetedMove, TraceSettings};
pub use priority::ActionPriority;
pub use status::{AbortMode, AbortState, ActionResult, ActionState, Progress};

#[cfg(test)]
pub(crate) mod test_support;
