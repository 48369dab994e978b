//! Unit types for physical quantities.
//!
//! Provides type-safe representations of step counts, step delays and angles
//! to prevent unit confusion at compile time.

use serde::Deserialize;

use crate::error::ConfigError;

/// Shortest accepted delay between step pulses, in microseconds.
pub const MIN_DELAY_US: u32 = 500;

/// Longest accepted delay between step pulses, in microseconds.
pub const MAX_DELAY_US: u32 = 10_000;

/// Step delay at power-up, in microseconds.
pub const DEFAULT_DELAY_US: u32 = 1_500;

/// Minimum STEP high time the driver accepts, in microseconds.
pub const MIN_PULSE_WIDTH_US: u32 = 10;

/// Full steps per revolution of a 1.8° motor.
pub const FULL_STEPS_PER_REVOLUTION: u16 = 200;

/// Angular position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Motor position in steps (absolute from origin).
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Offset by a signed delta, saturating at the i64 range.
    #[inline]
    pub fn offset(self, delta: i64) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

/// Idle time between consecutive step pulses, in microseconds.
///
/// Validated at construction to lie within [`MIN_DELAY_US`]..=[`MAX_DELAY_US`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StepDelay(u32);

impl StepDelay {
    /// Create a new StepDelay with range validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::StepDelayOutOfRange` if `us` lies outside the accepted range.
    pub fn new(us: i64) -> Result<Self, ConfigError> {
        if Self::is_valid(us) {
            Ok(Self(us as u32))
        } else {
            Err(ConfigError::StepDelayOutOfRange(us))
        }
    }

    /// Get the delay in microseconds.
    #[inline]
    pub const fn micros(self) -> u32 {
        self.0
    }

    /// Check if a value is valid.
    #[inline]
    pub fn is_valid(us: i64) -> bool {
        (MIN_DELAY_US as i64..=MAX_DELAY_US as i64).contains(&us)
    }
}

impl Default for StepDelay {
    fn default() -> Self {
        Self(DEFAULT_DELAY_US)
    }
}

impl<'de> Deserialize<'de> for StepDelay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = i64::deserialize(deserializer)?;
        StepDelay::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
