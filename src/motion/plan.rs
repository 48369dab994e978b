//! Move planning.
//!
//! Moves run at a constant cadence, so a plan is just a direction and a
//! pulse count.

use core::fmt;

use crate::config::units::Steps;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward (positive step count, DIR high).
    Forward,
    /// Backward (negative step count, DIR low). The limit switch sits this way.
    Backward,
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Upper-case label used in console responses.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "FORWARD",
            Direction::Backward => "BACKWARD",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A planned constant-speed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// Direction of travel.
    pub direction: Direction,
    /// Number of step pulses to emit.
    pub steps: u64,
}

impl MovePlan {
    /// Plan the move from `current` to `target`.
    ///
    /// Returns `None` when already at the target.
    pub fn between(current: Steps, target: Steps) -> Option<Self> {
        if target == current {
            return None;
        }

        let direction = if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        };

        Some(Self {
            direction,
            steps: target.0.abs_diff(current.0),
        })
    }
}
