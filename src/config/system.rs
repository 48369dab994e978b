//! System configuration - root configuration structure.

use serde::Deserialize;

use super::motor::{MotorConfig, TimingConfig};

/// Homing search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HomingConfig {
    /// Search is abandoned once the position drops below `-max_steps`.
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

fn default_max_steps() -> u32 {
    10_000
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

/// Command console behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ConsoleConfig {
    /// Reject malformed numeric arguments instead of reading them as 0.
    #[serde(default)]
    pub strict_arguments: bool,
}

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document yields the reference hardware setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Motor parameters.
    #[serde(default)]
    pub motor: MotorConfig,

    /// Driver timing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Homing search.
    #[serde(default)]
    pub homing: HomingConfig,

    /// Command console.
    #[serde(default)]
    pub console: ConsoleConfig,
}
