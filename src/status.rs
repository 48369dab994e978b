//! Human-readable status of the axis.

use core::fmt;

use crate::config::units::Degrees;
use crate::motor::MotorState;

/// Read-only snapshot of motor state, derived for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    /// Absolute position in steps.
    pub position: i64,
    /// Whole revolutions, truncated toward zero.
    pub revolutions: i64,
    /// Angle within the current revolution. Negative for negative positions.
    pub angle: Degrees,
    /// Step delay in microseconds.
    pub step_delay_us: u32,
}

impl StatusReport {
    /// Derive a report from motor state.
    pub fn from_state(state: &MotorState) -> Self {
        let spr = state.steps_per_revolution;
        Self {
            position: state.position.current().value(),
            revolutions: state.position.revolutions(spr),
            angle: state.position.angle(spr),
            step_delay_us: state.step_delay.micros(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Status ---")?;
        writeln!(f, "Position: {} steps", self.position)?;
        writeln!(f, "Full revs: {}", self.revolutions)?;
        writeln!(f, "Angle: {:.1}°", self.angle.value())?;
        write!(f, "Step delay: {} us/step", self.step_delay_us)
    }
}
