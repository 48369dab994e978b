//! Recording pin doubles for driving a motor without hardware.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use stepper_console::{StepperMotor, StepperMotorBuilder};

/// Something observable that happened on the pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Step(bool),
    Dir(bool),
    Enable(bool),
    LimitRead,
    DelayUs(u32),
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

#[derive(Clone, Copy)]
pub enum Role {
    Step,
    Dir,
    Enable,
}

/// Output pin that logs every level change.
pub struct SimPin {
    role: Role,
    journal: Journal,
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }
}

impl SimPin {
    fn record(&self, level: bool) {
        let event = match self.role {
            Role::Step => Event::Step(level),
            Role::Dir => Event::Dir(level),
            Role::Enable => Event::Enable(level),
        };
        self.journal.borrow_mut().push(event);
    }
}

/// Active-low limit switch that engages after a number of clear reads.
pub struct SimLimit {
    clear_reads: Option<usize>,
    reads: Rc<Cell<usize>>,
    journal: Journal,
}

impl ErrorType for SimLimit {
    type Error = Infallible;
}

impl InputPin for SimLimit {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let n = self.reads.get();
        self.reads.set(n + 1);
        self.journal.borrow_mut().push(Event::LimitRead);
        // Pulled high while clear.
        Ok(match self.clear_reads {
            Some(clear) => n < clear,
            None => true,
        })
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Delay provider that logs instead of sleeping.
pub struct SimDelay {
    journal: Journal,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.journal.borrow_mut().push(Event::DelayUs(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.journal.borrow_mut().push(Event::DelayUs(us));
    }
}

pub type SimMotor = StepperMotor<SimPin, SimPin, SimPin, SimLimit, SimDelay>;
pub type SimBuilder = StepperMotorBuilder<SimPin, SimPin, SimPin, SimLimit, SimDelay>;

/// Shared view of what the simulated hardware saw.
pub struct Rig {
    pub journal: Journal,
    pub limit_reads: Rc<Cell<usize>>,
}

impl Rig {
    pub fn events(&self) -> Vec<Event> {
        self.journal.borrow().clone()
    }

    pub fn clear(&self) {
        self.journal.borrow_mut().clear();
    }

    pub fn step_pulses(&self) -> usize {
        self.journal
            .borrow()
            .iter()
            .filter(|e| **e == Event::Step(true))
            .count()
    }
}

/// Attach simulated pins to a builder.
///
/// `clear_reads`: number of limit reads before the switch engages, `None`
/// for a switch that never engages.
pub fn wire(builder: SimBuilder, clear_reads: Option<usize>) -> (SimBuilder, Rig) {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    let limit_reads = Rc::new(Cell::new(0));
    let pin = |role| SimPin {
        role,
        journal: journal.clone(),
    };

    let builder = builder
        .step_pin(pin(Role::Step))
        .dir_pin(pin(Role::Dir))
        .enable_pin(pin(Role::Enable))
        .limit_pin(SimLimit {
            clear_reads,
            reads: limit_reads.clone(),
            journal: journal.clone(),
        })
        .delay(SimDelay {
            journal: journal.clone(),
        });

    (
        builder,
        Rig {
            journal,
            limit_reads,
        },
    )
}

/// Motor with reference defaults and simulated pins.
pub fn sim_motor(clear_reads: Option<usize>) -> (SimMotor, Rig) {
    let (builder, rig) = wire(StepperMotorBuilder::new(), clear_reads);
    (builder.build().expect("default motor should build"), rig)
}
