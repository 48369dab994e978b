//! Position tracking for stepper motors.
//!
//! Tracks the absolute step count and the last commanded absolute target.

use crate::config::units::{Degrees, Steps};

/// Motor position tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Steps actually issued from origin
    current: Steps,
    /// Last commanded absolute target
    target: Steps,
}

impl Position {
    /// Create a new position tracker at the origin.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a position tracker at a specific position.
    #[inline]
    pub fn at(steps: Steps) -> Self {
        Self {
            current: steps,
            target: steps,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn current(&self) -> Steps {
        self.current
    }

    /// Get the last commanded target in steps.
    #[inline]
    pub fn target(&self) -> Steps {
        self.target
    }

    /// Record a new commanded target.
    #[inline]
    pub fn set_target(&mut self, target: Steps) {
        self.target = target;
    }

    /// Move by a number of steps.
    #[inline]
    pub fn move_steps(&mut self, delta: i64) {
        self.current = self.current.offset(delta);
    }

    /// Set the current position and target as the new origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.current = Steps::default();
        self.target = Steps::default();
    }

    /// Whole revolutions from origin, truncated toward zero.
    #[inline]
    pub fn revolutions(&self, steps_per_revolution: u16) -> i64 {
        self.current.0 / steps_per_revolution as i64
    }

    /// Angle within the current revolution.
    ///
    /// Uses the truncating remainder, so the angle is negative when the
    /// position is negative.
    #[inline]
    pub fn angle(&self, steps_per_revolution: u16) -> Degrees {
        let spr = steps_per_revolution as i64;
        Degrees((self.current.0 % spr) as f32 * (360.0 / spr as f32))
    }
}
