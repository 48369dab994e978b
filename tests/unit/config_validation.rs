//! Unit tests for configuration validation.

use stepper_console::config::{parse_config, validate_config, SystemConfig};
use stepper_console::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[motor]
steps_per_revolution = 200
step_delay_us = 1500

[timing]
pulse_width_us = 10

[homing]
max_steps = 10000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero steps-per-revolution.
#[test]
fn test_zero_steps_per_revolution() {
    let config: SystemConfig =
        toml::from_str("[motor]\nsteps_per_revolution = 0").expect("Failed to parse TOML");

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));
}

/// Test validation fails for a pulse shorter than the driver accepts.
#[test]
fn test_pulse_width_too_short() {
    let result = parse_config("[timing]\npulse_width_us = 2");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::PulseWidthTooShort(2)))
    ));
}

/// Test validation fails for an empty homing search.
#[test]
fn test_zero_homing_limit() {
    let result = parse_config("[homing]\nmax_steps = 0");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidHomingLimit(0)))
    ));
}
