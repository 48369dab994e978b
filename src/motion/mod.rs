//! Motion module for stepper-console.
//!
//! Provides direction handling and constant-speed move planning.

mod plan;

pub use plan::{Direction, MovePlan};
