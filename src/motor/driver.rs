//! Stepper motor driver.
//!
//! Generic over embedded-hal 1.0 pin types. Steps at a constant cadence and
//! keeps the driver de-energized between commands.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::{StepDelay, Steps};
use crate::config::{HomingConfig, TimingConfig};
use crate::error::{MotorError, Result};
use crate::motion::{Direction, MovePlan};

use super::builder::StepperMotorBuilder;
use super::state::{MotorState, MoveOutcome};

/// Single-axis stepper motor driver.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: active-low enable pin type (must implement `OutputPin`)
/// - `LIMIT`: limit switch input (must implement `InputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepperMotor<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = forward, unless inverted).
    dir_pin: DIR,

    /// EN pin (low = driver energized).
    enable_pin: EN,

    /// Homing limit switch.
    limit_pin: LIMIT,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Position, step delay and enable flag.
    state: MotorState,

    /// Driver timing requirements.
    timing: TimingConfig,

    /// Homing search bound.
    homing: HomingConfig,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Whether the limit switch reads high when engaged.
    limit_active_high: bool,
}

impl<STEP, DIR, EN, LIMIT, DELAY> StepperMotor<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        limit_pin: LIMIT,
        delay: DELAY,
        state: MotorState,
        timing: TimingConfig,
        homing: HomingConfig,
        name: heapless::String<32>,
        invert_direction: bool,
        limit_active_high: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            limit_pin,
            delay,
            state,
            timing,
            homing,
            name,
            invert_direction,
            limit_active_high,
        }
    }

    /// Start building a motor.
    pub fn builder() -> StepperMotorBuilder<STEP, DIR, EN, LIMIT, DELAY> {
        StepperMotorBuilder::new()
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the full motor state.
    #[inline]
    pub fn state(&self) -> &MotorState {
        &self.state
    }

    /// Get current position in steps.
    #[inline]
    pub fn position_steps(&self) -> Steps {
        self.state.position.current()
    }

    /// Get the last commanded absolute target.
    #[inline]
    pub fn target_steps(&self) -> Steps {
        self.state.position.target()
    }

    /// Get the step delay.
    #[inline]
    pub fn step_delay(&self) -> StepDelay {
        self.state.step_delay
    }

    /// Change the idle time between step pulses.
    pub fn set_step_delay(&mut self, delay: StepDelay) {
        debug!("{}: step delay {} us", self.name.as_str(), delay.micros());
        self.state.step_delay = delay;
    }

    /// Whether the driver is currently energized.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// Plan a move to `target` from the current position.
    ///
    /// Returns `None` when already there.
    #[inline]
    pub fn plan_move(&self, target: i64) -> Option<MovePlan> {
        MovePlan::between(self.state.position.current(), Steps(target))
    }

    /// Give back the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, EN, LIMIT, DELAY) {
        (
            self.step_pin,
            self.dir_pin,
            self.enable_pin,
            self.limit_pin,
            self.delay,
        )
    }

    /// Emit one step pulse, then idle for the step delay.
    ///
    /// Does not touch the position; callers account for each pulse.
    pub fn step_once(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(self.timing.pulse_width_us);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(self.state.step_delay.micros());
        Ok(())
    }

    /// Drive DIR for `direction` and wait for the driver's setup time.
    ///
    /// The pin is written every time, even if unchanged.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        let pin_high = match direction {
            Direction::Forward => !self.invert_direction,
            Direction::Backward => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.delay.delay_us(self.timing.direction_setup_us);
        Ok(())
    }

    /// Energize the driver (EN low) and wait for it to wake.
    pub fn enable(&mut self) -> Result<()> {
        self.enable_pin.set_low().map_err(|_| MotorError::PinError)?;
        self.state.enabled = true;
        self.delay.delay_us(self.timing.enable_wake_us);
        Ok(())
    }

    /// De-energize the driver (EN high).
    pub fn disable(&mut self) -> Result<()> {
        self.enable_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.state.enabled = false;
        Ok(())
    }

    /// Read the limit switch.
    pub fn limit_engaged(&mut self) -> Result<bool> {
        let level_high = self.limit_pin.is_high().map_err(|_| MotorError::PinError)?;
        Ok(level_high == self.limit_active_high)
    }

    /// Move by `delta` steps from the current position.
    pub fn move_relative(&mut self, delta: i64) -> Result<MoveOutcome> {
        let target = self.state.position.current().offset(delta);
        self.move_to(target.0)
    }

    /// Move to an absolute position in steps.
    ///
    /// Position is updated after every pulse, so it stays consistent with
    /// the physical steps taken if a pin error cuts the move short.
    pub fn move_to(&mut self, target: i64) -> Result<MoveOutcome> {
        self.state.position.set_target(Steps(target));

        let Some(plan) = self.plan_move(target) else {
            debug!("{}: already at {}", self.name.as_str(), target);
            return Ok(MoveOutcome::AlreadyAtTarget);
        };

        info!(
            "{}: moving {} steps {}",
            self.name.as_str(),
            plan.steps,
            plan.direction.label()
        );

        self.while_enabled(|motor| {
            motor.set_direction(plan.direction)?;
            for _ in 0..plan.steps {
                motor.step_once()?;
                motor.state.position.move_steps(plan.direction.sign());
            }
            Ok(())
        })?;

        let position = self.state.position.current().0;
        info!("{}: move done at {}", self.name.as_str(), position);
        Ok(MoveOutcome::Moved { plan, position })
    }

    /// Drive backward until the limit switch engages, then zero the position.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::LimitSwitchNotFound` once the position drops
    /// below `-homing.max_steps` without the switch engaging. The position is
    /// left where the search stopped.
    pub fn home_sequence(&mut self) -> Result<()> {
        let bound = -(self.homing.max_steps as i64);
        info!("{}: homing", self.name.as_str());

        self.while_enabled(|motor| {
            motor.set_direction(Direction::Backward)?;
            loop {
                if motor.limit_engaged()? {
                    return Ok(());
                }

                motor.step_once()?;
                motor.state.position.move_steps(-1);
                trace!("homing at {}", motor.state.position.current().0);

                let position = motor.state.position.current().0;
                if position < bound {
                    warn!("limit switch not found, stopped at {}", position);
                    return Err(MotorError::LimitSwitchNotFound { position }.into());
                }
            }
        })?;

        self.state.position.set_origin();
        info!("{}: home found", self.name.as_str());
        Ok(())
    }

    /// Run `op` with the driver energized, disabling it on every exit path.
    fn while_enabled<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let result = self.enable().and_then(|()| op(self));
        let disabled = self.disable();
        let value = result?;
        disabled?;
        Ok(value)
    }
}
