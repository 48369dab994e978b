//! Serial console example.
//!
//! Runs the command console on stdin/stdout against simulated pins. The
//! simulated carriage sits 300 steps away from its limit switch, so `HOME`
//! succeeds once the motor has walked back far enough.
//!
//! ```text
//! cargo run --example serial_console [config.toml]
//! ```

use std::cell::Cell;
use std::rc::Rc;

use stepper_console::{CommandInterpreter, StepperMotorBuilder, SystemConfig};

/// Delay provider backed by the OS scheduler.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Output pin that only remembers its level.
struct SimPin {
    state: bool,
}

impl SimPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

/// STEP pin that moves the simulated carriage on each rising edge.
struct CarriageStep {
    pin: SimPin,
    dir: Rc<Cell<bool>>,
    /// DIR level that moves away from the switch.
    away_level: bool,
    distance: Rc<Cell<i64>>,
}

impl embedded_hal::digital::ErrorType for CarriageStep {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for CarriageStep {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.pin.state {
            let delta = if self.dir.get() == self.away_level { 1 } else { -1 };
            self.distance.set(self.distance.get() + delta);
        }
        self.pin.set_high()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }
}

/// DIR pin shared with the carriage.
struct CarriageDir {
    level: Rc<Cell<bool>>,
}

impl embedded_hal::digital::ErrorType for CarriageDir {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for CarriageDir {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }
}

/// Switch engaged at distance zero.
struct LimitSwitch {
    distance: Rc<Cell<i64>>,
    active_high: bool,
}

impl LimitSwitch {
    fn engaged(&self) -> bool {
        self.distance.get() <= 0
    }
}

impl embedded_hal::digital::ErrorType for LimitSwitch {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for LimitSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.engaged() == self.active_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.engaged() != self.active_high)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => stepper_console::load_config(path)?,
        None => SystemConfig::default(),
    };

    let dir = Rc::new(Cell::new(false));
    let distance = Rc::new(Cell::new(300));

    let motor = StepperMotorBuilder::new()
        .from_config(&config)
        .name("demo_axis")
        .step_pin(CarriageStep {
            pin: SimPin::new(),
            dir: dir.clone(),
            away_level: !config.motor.invert_direction,
            distance: distance.clone(),
        })
        .dir_pin(CarriageDir { level: dir })
        .enable_pin(SimPin::new())
        .limit_pin(LimitSwitch {
            distance: distance.clone(),
            active_high: config.motor.limit_active_high,
        })
        .delay(SleepDelay)
        .build()?;

    println!("Simulated carriage {} steps from the limit switch.", distance.get());

    let mut console = CommandInterpreter::from_config(motor, &config);
    console.run(std::io::stdin().lock(), std::io::stdout())?;

    Ok(())
}
