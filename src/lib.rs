//! # stepper-console
//!
//! Single-axis stepper motor controller driven by text commands over a
//! serial link, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Line-based commands**: `MOVE`, `GOTO`, `HOME`, `SPEED`, `STATUS`
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR/EN, `InputPin` for the
//!   limit switch, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Constant-speed stepping**: fixed delay between pulses, adjustable at runtime
//! - **Bounded homing**: search against a limit switch with a step limit
//! - **Position tracking**: Absolute position kept in step with every pulse
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_console::{CommandInterpreter, StepperMotor};
//!
//! let config = stepper_console::load_config("axis.toml")?;
//!
//! let motor = StepperMotor::builder()
//!     .from_config(&config)
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .enable_pin(en_pin)
//!     .limit_pin(limit_pin)
//!     .delay(delay)
//!     .build()?;
//!
//! let mut console = CommandInterpreter::from_config(motor, &config);
//! console.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and the blocking session loop
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod fmt;

// Core modules
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod motion;
pub mod motor;
pub mod status;

// Re-exports for ergonomic API
pub use command::{Command, CommandParser};
pub use config::{validate_config, SystemConfig};
pub use console::{CommandInterpreter, LineBuffer};
pub use error::{Error, Result};
pub use motion::{Direction, MovePlan};
pub use motor::{MotorState, MoveOutcome, StepperMotor, StepperMotorBuilder};
pub use status::StatusReport;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, StepDelay, Steps};
