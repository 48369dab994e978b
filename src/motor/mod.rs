//! Motor module for stepper-console.
//!
//! Provides the stepper motor driver with enable sequencing, homing and
//! position tracking.

mod builder;
mod driver;
mod position;
mod state;

pub use builder::StepperMotorBuilder;
pub use driver::StepperMotor;
pub use position::Position;
pub use state::{MotorState, MoveOutcome};
