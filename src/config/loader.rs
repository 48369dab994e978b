//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_console::load_config;
///
/// let config = load_config("axis.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// toml messages can exceed the heapless capacity; keep what fits.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.motor.steps_per_revolution, 200);
        assert_eq!(config.motor.step_delay.micros(), 1500);
        assert_eq!(config.homing.max_steps, 10_000);
        assert!(!config.console.strict_arguments);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[motor]
name = "Carriage"
steps_per_revolution = 400
step_delay_us = 800
invert_direction = true
limit_active_high = true

[timing]
pulse_width_us = 20
direction_setup_us = 10
enable_wake_us = 250

[homing]
max_steps = 2000

[console]
strict_arguments = true
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.motor.name.as_str(), "Carriage");
        assert_eq!(config.motor.steps_per_revolution, 400);
        assert_eq!(config.motor.step_delay.micros(), 800);
        assert!(config.motor.invert_direction);
        assert!(config.motor.limit_active_high);
        assert_eq!(config.timing.pulse_width_us, 20);
        assert_eq!(config.timing.enable_wake_us, 250);
        assert_eq!(config.homing.max_steps, 2000);
        assert!(config.console.strict_arguments);
    }

    #[test]
    fn test_step_delay_out_of_range_rejected() {
        let toml = r#"
[motor]
step_delay_us = 100
"#;

        let err = parse_config(toml).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/axis.toml").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::IoError(_))));
    }

    #[test]
    fn test_truncated_message() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
    }
}
