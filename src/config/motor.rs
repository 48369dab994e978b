//! Motor and driver timing configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::{StepDelay, FULL_STEPS_PER_REVOLUTION, MIN_PULSE_WIDTH_US};

/// Motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Full steps per revolution (200 for 1.8° motors).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,

    /// Step delay at power-up.
    #[serde(default, rename = "step_delay_us")]
    pub step_delay: StepDelay,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Limit switch reads high when engaged (default: active low with pull-up).
    #[serde(default)]
    pub limit_active_high: bool,
}

fn default_name() -> String<32> {
    let mut name = String::new();
    let _ = name.push_str("axis");
    name
}

fn default_steps_per_revolution() -> u16 {
    FULL_STEPS_PER_REVOLUTION
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            steps_per_revolution: default_steps_per_revolution(),
            step_delay: StepDelay::default(),
            invert_direction: false,
            limit_active_high: false,
        }
    }
}

impl MotorConfig {
    /// Degrees of shaft rotation per step.
    pub fn degrees_per_step(&self) -> f32 {
        360.0 / self.steps_per_revolution as f32
    }
}

/// Driver chip timing requirements, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// STEP high time per pulse.
    #[serde(default = "default_pulse_width")]
    pub pulse_width_us: u32,

    /// Settling time after a DIR change before the next pulse.
    #[serde(default = "default_direction_setup")]
    pub direction_setup_us: u32,

    /// Wake-up time after EN is asserted.
    #[serde(default = "default_enable_wake")]
    pub enable_wake_us: u32,
}

fn default_pulse_width() -> u32 {
    MIN_PULSE_WIDTH_US
}

fn default_direction_setup() -> u32 {
    5
}

fn default_enable_wake() -> u32 {
    100
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pulse_width_us: default_pulse_width(),
            direction_setup_us: default_direction_setup(),
            enable_wake_us: default_enable_wake(),
        }
    }
}
