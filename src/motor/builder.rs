//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::StepDelay;
use crate::config::{HomingConfig, MotorConfig, SystemConfig, TimingConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::StepperMotor;
use super::state::MotorState;

/// Builder for creating StepperMotor instances.
pub struct StepperMotorBuilder<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    limit_pin: Option<LIMIT>,
    delay: Option<DELAY>,
    motor: MotorConfig,
    timing: TimingConfig,
    homing: HomingConfig,
}

impl<STEP, DIR, EN, LIMIT, DELAY> Default for StepperMotorBuilder<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, EN, LIMIT, DELAY> StepperMotorBuilder<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with reference hardware defaults.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            enable_pin: None,
            limit_pin: None,
            delay: None,
            motor: MotorConfig::default(),
            timing: TimingConfig::default(),
            homing: HomingConfig::default(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the active-low EN pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the limit switch input.
    pub fn limit_pin(mut self, pin: LIMIT) -> Self {
        self.limit_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        if let Ok(name) = heapless::String::try_from(name) {
            self.motor.name = name;
        }
        self
    }

    /// Set full steps per revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.motor.steps_per_revolution = steps;
        self
    }

    /// Set the initial step delay.
    pub fn step_delay(mut self, delay: StepDelay) -> Self {
        self.motor.step_delay = delay;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.motor.invert_direction = invert;
        self
    }

    /// Treat a high limit input as engaged.
    pub fn limit_active_high(mut self, active_high: bool) -> Self {
        self.motor.limit_active_high = active_high;
        self
    }

    /// Set driver timing.
    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Set the homing search bound in steps.
    pub fn homing_max_steps(mut self, max_steps: u32) -> Self {
        self.homing.max_steps = max_steps;
        self
    }

    /// Configure from a SystemConfig.
    pub fn from_config(mut self, config: &SystemConfig) -> Self {
        self.motor = config.motor.clone();
        self.timing = config.timing;
        self.homing = config.homing;
        self
    }

    /// Build the StepperMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin or the delay is missing, or the resulting
    /// configuration fails validation.
    pub fn build(self) -> Result<StepperMotor<STEP, DIR, EN, LIMIT, DELAY>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;
        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;
        let enable_pin = self
            .enable_pin
            .ok_or(Error::Config(ConfigError::MissingField("enable_pin")))?;
        let limit_pin = self
            .limit_pin
            .ok_or(Error::Config(ConfigError::MissingField("limit_pin")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        crate::config::validate_config(&SystemConfig {
            motor: self.motor.clone(),
            timing: self.timing,
            homing: self.homing,
            console: Default::default(),
        })?;

        let state = MotorState::new(self.motor.step_delay, self.motor.steps_per_revolution);

        Ok(StepperMotor::new(
            step_pin,
            dir_pin,
            enable_pin,
            limit_pin,
            delay,
            state,
            self.timing,
            self.homing,
            self.motor.name,
            self.motor.invert_direction,
            self.motor.limit_active_high,
        ))
    }
}
