//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::units::MIN_PULSE_WIDTH_US;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Steps per revolution is non-zero
/// - STEP pulse width meets the driver minimum
/// - Homing bound is non-zero
///
/// The step delay range is enforced when the value is deserialized.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_motor(&config.motor)?;

    if config.timing.pulse_width_us < MIN_PULSE_WIDTH_US {
        return Err(Error::Config(ConfigError::PulseWidthTooShort(
            config.timing.pulse_width_us,
        )));
    }

    if config.homing.max_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidHomingLimit(
            config.homing.max_steps,
        )));
    }

    Ok(())
}

fn validate_motor(config: &super::MotorConfig) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SystemConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_steps_per_revolution() {
        let mut config = SystemConfig::default();
        config.motor.steps_per_revolution = 0;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_short_pulse_width() {
        let mut config = SystemConfig::default();
        config.timing.pulse_width_us = 2;

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::PulseWidthTooShort(2)))
        );
    }
}
