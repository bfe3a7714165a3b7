//! Request priorities.

use crate::status::AbortMode;

/// Priority class attached to an action when it is requested.
///
/// Variants are declared in ascending urgency, so the derived ordering is the
/// arbitration order.
///
/// # Arbitration
///
/// A request displaces the incumbent when its priority is greater than **or
/// equal to** the incumbent's. Ties favor the newer request.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionPriority {
    /// Scripted behavior that anything may interrupt.
    SoftScript,
    /// Deliberate movement driven by player intent.
    Logic,
    /// Scripted behavior that deliberate movement may not interrupt.
    HardScript,
    /// Instinctive reactions such as falling.
    Reaction,
    /// Reserved for overrides that must always win.
    Ultimate,
}

impl ActionPriority {
    /// Returns `true` if a request at this priority may displace an incumbent
    /// running at `incumbent`.
    #[inline]
    pub fn can_displace(self, incumbent: Self) -> bool {
        self >= incumbent
    }

    /// Abort mode used when a request at this priority aborts the incumbent.
    ///
    /// Only reactions force the incumbent out; everything else lets it wind down.
    #[inline]
    pub const fn abort_mode(self) -> AbortMode {
        match self {
            Self::Reaction => AbortMode::Forced,
            _ => AbortMode::Graceful,
        }
    }
}
