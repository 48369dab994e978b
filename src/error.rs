//! Error types for stepper-console.
//!
//! Provides unified error handling across configuration, motor control, and command handling.

use core::fmt;

use crate::config::units::{MAX_DELAY_US, MIN_DELAY_US, MIN_PULSE_WIDTH_US};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-console operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// Command line handling error
    Command(CommandError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Step delay outside the accepted range
    StepDelayOutOfRange(i64),
    /// Steps per revolution must be non-zero
    InvalidStepsPerRevolution(u16),
    /// STEP pulse shorter than the driver requires
    PulseWidthTooShort(u32),
    /// Homing search bound must be non-zero
    InvalidHomingLimit(u32),
    /// Builder was missing a required field
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
    /// Homing search ran past its bound without the limit switch engaging
    LimitSwitchNotFound {
        /// Position reached when the search was abandoned
        position: i64,
    },
}

/// Command line errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Incoming line did not fit in the line buffer
    LineTooLong,
    /// Numeric argument rejected in strict mode
    InvalidNumber(heapless::String<32>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::StepDelayOutOfRange(v) => write!(
                f,
                "Step delay {} us out of range. Must be {}-{}",
                v, MIN_DELAY_US, MAX_DELAY_US
            ),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::PulseWidthTooShort(v) => write!(
                f,
                "Pulse width {} us too short. Must be >= {}",
                v, MIN_PULSE_WIDTH_US
            ),
            ConfigError::InvalidHomingLimit(v) => {
                write!(f, "Invalid homing limit: {}. Must be > 0", v)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::LimitSwitchNotFound { position } => {
                write!(f, "Limit switch not found, stopped at {}", position)
            }
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::LineTooLong => write!(f, "Line too long"),
            CommandError::InvalidNumber(arg) => write!(f, "Invalid number '{}'", arg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
