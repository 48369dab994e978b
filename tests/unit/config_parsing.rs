//! Unit tests for TOML configuration parsing.

use stepper_console::config::{load_config, parse_config, SystemConfig};
use stepper_console::error::{ConfigError, Error};

/// Test parsing a complete axis configuration.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motor]
name = "carriage"
steps_per_revolution = 400
step_delay_us = 900
invert_direction = true
limit_active_high = false
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.motor.name.as_str(), "carriage");
    assert_eq!(config.motor.steps_per_revolution, 400);
    assert_eq!(config.motor.step_delay.micros(), 900);
    assert!(config.motor.invert_direction);
    assert!(!config.motor.limit_active_high);
    assert!((config.motor.degrees_per_step() - 0.9).abs() < 1e-6);
}

/// Test that omitted sections fall back to the reference hardware.
#[test]
fn test_sections_default_independently() {
    let config = parse_config(
        r#"
[timing]
enable_wake_us = 250
"#,
    )
    .expect("Failed to parse TOML");

    assert_eq!(config.timing.enable_wake_us, 250);
    assert_eq!(config.timing.pulse_width_us, 10);
    assert_eq!(config.timing.direction_setup_us, 5);
    assert_eq!(config.motor.name.as_str(), "axis");
    assert_eq!(config.motor.steps_per_revolution, 200);
    assert_eq!(config.homing.max_steps, 10_000);
}

/// Test step delay bounds are enforced at parse time.
#[test]
fn test_step_delay_bounds() {
    assert!(parse_config("[motor]\nstep_delay_us = 500").is_ok());
    assert!(parse_config("[motor]\nstep_delay_us = 10000").is_ok());

    for bad in ["[motor]\nstep_delay_us = 499", "[motor]\nstep_delay_us = 10001"] {
        assert!(matches!(
            parse_config(bad),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}

/// Test wrong value types surface as parse errors.
#[test]
fn test_type_mismatch_is_parse_error() {
    let result = parse_config("[console]\nstrict_arguments = \"yes\"");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("stepper-console-load-test.toml");
    std::fs::write(&path, "[homing]\nmax_steps = 1234\n").expect("write temp config");

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.homing.max_steps, 1234);

    let _ = std::fs::remove_file(&path);
}
