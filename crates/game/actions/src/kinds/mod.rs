//! Concrete locomotion actions.
//!
//! - [`DirectionalMove`]: axis-driven motion relative to the pawn camera
//! - [`TargetedMove`]: motion toward the point under the cursor or finger
//! - [`FallingReaction`]: holds control until the pawn lands

mod directional;
mod falling;
mod targeted;

pub use directional::{DirectionalMove, movement_basis};
pub use falling::FallingReaction;
pub use targeted::{TargetedMove, TraceSettings};
