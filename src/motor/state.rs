//! Runtime motor state.

use crate::config::units::StepDelay;

use super::position::Position;

/// Mutable state of a single axis.
///
/// Owned by [`StepperMotor`](super::StepperMotor) and only changed through its
/// operations. `position` always reflects the pulses actually issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorState {
    /// Current and target position.
    pub position: Position,
    /// Idle time between step pulses.
    pub step_delay: StepDelay,
    /// Driver energized. Only true while a move or homing is stepping.
    pub enabled: bool,
    /// Full steps per revolution.
    pub steps_per_revolution: u16,
}

impl MotorState {
    /// Power-up state: at origin, driver disabled.
    pub fn new(step_delay: StepDelay, steps_per_revolution: u16) -> Self {
        Self {
            position: Position::new(),
            step_delay,
            enabled: false,
            steps_per_revolution,
        }
    }
}

/// Result of a completed `move_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target equals the current position; no pin was touched.
    AlreadyAtTarget,
    /// The move ran to completion.
    Moved {
        /// Executed plan.
        plan: crate::motion::MovePlan,
        /// Final position in steps.
        position: i64,
    },
}
