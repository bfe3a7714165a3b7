//! Shared intent blackboard.
//!
//! Input producers write the axis and pointer fields; the movement actions
//! write their own "active" flag on start, abort and finish. The tick driver
//! reads everything once per tick, after input and before actions run.

use bitflags::bitflags;

bitflags! {
    /// Boolean part of [`IntentState`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct IntentFlags: u8 {
        /// The targeted-move trigger (mouse button or finger) is held.
        const POINTER_PRESSED    = 1 << 0;
        /// The pointer is a touch device.
        const TOUCH              = 1 << 1;
        /// A directional move is running.
        const DIRECTIONAL_ACTIVE = 1 << 2;
        /// A targeted move is running.
        const TARGETED_ACTIVE    = 1 << 3;
    }
}

/// Latest raw input plus the derived "action active" flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntentState {
    move_x: f32,
    move_y: f32,
    flags: IntentFlags,
}

impl IntentState {
    /// Creates a zeroed intent state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Right/left axis value.
    #[inline]
    pub fn move_x(&self) -> f32 {
        self.move_x
    }

    /// Forward/backward axis value.
    #[inline]
    pub fn move_y(&self) -> f32 {
        self.move_y
    }

    pub fn set_move_x(&mut self, value: f32) {
        self.move_x = value;
    }

    pub fn set_move_y(&mut self, value: f32) {
        self.move_y = value;
    }

    /// Returns `true` if either axis is nonzero.
    #[inline]
    pub fn has_directional_input(&self) -> bool {
        self.move_x != 0.0 || self.move_y != 0.0
    }

    #[inline]
    pub fn pointer_pressed(&self) -> bool {
        self.flags.contains(IntentFlags::POINTER_PRESSED)
    }

    pub fn set_pointer_pressed(&mut self, pressed: bool) {
        self.flags.set(IntentFlags::POINTER_PRESSED, pressed);
    }

    #[inline]
    pub fn is_touch(&self) -> bool {
        self.flags.contains(IntentFlags::TOUCH)
    }

    pub fn set_touch(&mut self, touch: bool) {
        self.flags.set(IntentFlags::TOUCH, touch);
    }

    #[inline]
    pub fn directional_active(&self) -> bool {
        self.flags.contains(IntentFlags::DIRECTIONAL_ACTIVE)
    }

    /// Written only by [`DirectionalMove`](crate::DirectionalMove).
    pub fn set_directional_active(&mut self, active: bool) {
        self.flags.set(IntentFlags::DIRECTIONAL_ACTIVE, active);
    }

    #[inline]
    pub fn targeted_active(&self) -> bool {
        self.flags.contains(IntentFlags::TARGETED_ACTIVE)
    }

    /// Written only by [`TargetedMove`](crate::TargetedMove).
    pub fn set_targeted_active(&mut self, active: bool) {
        self.flags.set(IntentFlags::TARGETED_ACTIVE, active);
    }

    /// Raw flag set, for diagnostics.
    #[inline]
    pub fn flags(&self) -> IntentFlags {
        self.flags
    }
}
