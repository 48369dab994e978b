//! Command dispatch and console responses.

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::command::{Command, CommandParser};
use crate::config::units::{StepDelay, MAX_DELAY_US, MIN_DELAY_US};
use crate::config::SystemConfig;
use crate::error::{CommandError, Error, MotorError};
use crate::motor::{MoveOutcome, StepperMotor};
use crate::status::StatusReport;

use super::line::LineBuffer;

/// Executes console commands against a motor and writes the responses.
///
/// Fully synchronous: a command runs to completion, including any move or
/// homing search, before the call returns.
pub struct CommandInterpreter<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    motor: StepperMotor<STEP, DIR, EN, LIMIT, DELAY>,
    parser: CommandParser,
}

impl<STEP, DIR, EN, LIMIT, DELAY> CommandInterpreter<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    /// Creates an interpreter with lenient argument parsing.
    pub fn new(motor: StepperMotor<STEP, DIR, EN, LIMIT, DELAY>) -> Self {
        Self::with_parser(motor, CommandParser::new())
    }

    /// Creates an interpreter with an explicit parser.
    pub fn with_parser(motor: StepperMotor<STEP, DIR, EN, LIMIT, DELAY>, parser: CommandParser) -> Self {
        Self { motor, parser }
    }

    /// Creates an interpreter using the console section of `config`.
    pub fn from_config(motor: StepperMotor<STEP, DIR, EN, LIMIT, DELAY>, config: &SystemConfig) -> Self {
        Self::with_parser(motor, CommandParser::from_config(&config.console))
    }

    /// The driven motor.
    pub fn motor(&self) -> &StepperMotor<STEP, DIR, EN, LIMIT, DELAY> {
        &self.motor
    }

    /// Gives back the motor.
    pub fn into_motor(self) -> StepperMotor<STEP, DIR, EN, LIMIT, DELAY> {
        self.motor
    }

    /// Current status snapshot.
    pub fn status(&self) -> StatusReport {
        StatusReport::from_state(self.motor.state())
    }

    /// Writes the start-up banner.
    pub fn banner<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "Stepper controller ready.")?;
        writeln!(out, "Commands:")?;
        writeln!(out, "  MOVE <steps>  relative move, negative is backward")?;
        writeln!(out, "  GOTO <pos>    absolute move")?;
        writeln!(out, "  HOME          seek limit switch and zero position")?;
        writeln!(
            out,
            "  SPEED <us>    step delay, {}-{} us",
            MIN_DELAY_US, MAX_DELAY_US
        )?;
        writeln!(out, "  STATUS        report position")
    }

    /// Feeds one byte from a serial receiver, running the command once the
    /// line is complete.
    pub fn receive<const N: usize, W: Write>(
        &mut self,
        buffer: &mut LineBuffer<N>,
        byte: u8,
        out: &mut W,
    ) -> fmt::Result {
        match buffer.push(byte) {
            Ok(false) => Ok(()),
            Ok(true) => {
                let result = self.handle_line(buffer.line(), out);
                buffer.clear();
                result
            }
            Err(e) => self.report(&Error::Command(e), out),
        }
    }

    /// Parses and runs one line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> fmt::Result {
        match self.parser.parse(line) {
            Ok(command) => self.execute(&command, out),
            Err(e) => self.report(&Error::Command(e), out),
        }
    }

    /// Runs a parsed command.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> fmt::Result {
        match command {
            Command::Move(delta) => {
                let target = self.motor.position_steps().offset(*delta).value();
                self.announce(target, out)?;
                let outcome = self.motor.move_relative(*delta);
                self.finish_move(outcome, out)
            }
            Command::Goto(target) => {
                self.announce(*target, out)?;
                let outcome = self.motor.move_to(*target);
                self.finish_move(outcome, out)
            }
            Command::Home => {
                writeln!(out, "Homing...")?;
                match self.motor.home_sequence() {
                    Ok(()) => writeln!(out, "Home found. Position reset to 0."),
                    Err(e) => self.report(&e, out),
                }
            }
            Command::SetSpeed(us) => match StepDelay::new(*us) {
                Ok(delay) => {
                    self.motor.set_step_delay(delay);
                    writeln!(out, "Speed set: {} us/step", delay.micros())
                }
                Err(_) => {
                    warn!("speed {} rejected", *us);
                    writeln!(
                        out,
                        "Speed out of range ({}–{} us)",
                        MIN_DELAY_US, MAX_DELAY_US
                    )
                }
            },
            Command::Status => writeln!(out, "{}", self.status()),
            Command::Unknown(raw) => {
                warn!("unknown command '{}'", raw.as_str());
                writeln!(out, "Unknown command. Use: MOVE, GOTO, HOME, SPEED, STATUS")
            }
        }
    }

    fn announce<W: Write>(&self, target: i64, out: &mut W) -> fmt::Result {
        match self.motor.plan_move(target) {
            Some(plan) => writeln!(out, "Moving {} steps {}...", plan.steps, plan.direction),
            None => Ok(()),
        }
    }

    fn finish_move<W: Write>(&self, outcome: crate::Result<MoveOutcome>, out: &mut W) -> fmt::Result {
        match outcome {
            Ok(MoveOutcome::AlreadyAtTarget) => writeln!(out, "Already at target."),
            Ok(MoveOutcome::Moved { position, .. }) => writeln!(out, "Done. Position: {}", position),
            Err(e) => self.report(&e, out),
        }
    }

    fn report<W: Write>(&self, error: &Error, out: &mut W) -> fmt::Result {
        info!("command failed at position {}", self.motor.position_steps().value());
        match error {
            Error::Motor(MotorError::LimitSwitchNotFound { .. }) => {
                writeln!(out, "ERROR: Limit switch not found. Stopping.")
            }
            Error::Motor(MotorError::PinError) => writeln!(out, "ERROR: Pin I/O failed."),
            Error::Command(CommandError::LineTooLong) => writeln!(out, "ERROR: Line too long."),
            Error::Command(CommandError::InvalidNumber(arg)) => {
                writeln!(out, "ERROR: Invalid number '{}'", arg)
            }
            Error::Config(e) => writeln!(out, "ERROR: {}", e),
        }
    }
}
