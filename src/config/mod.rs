//! Configuration module for stepper-console.
//!
//! Provides types for loading and validating the motor, timing and homing
//! configuration from TOML files (with `std` feature) or pre-parsed data.

mod motor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{MotorConfig, TimingConfig};
pub use system::{ConsoleConfig, HomingConfig, SystemConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, StepDelay, Steps};
