//! Text commands accepted over the serial console.
//!
//! A line is trimmed and upper-cased, then matched against the command
//! grammar:
//!
//! | Input          | Command              |
//! |----------------|----------------------|
//! | `MOVE <n>`     | [`Command::Move`]    |
//! | `GOTO <n>`     | [`Command::Goto`]    |
//! | `HOME`         | [`Command::Home`]    |
//! | `SPEED <us>`   | [`Command::SetSpeed`]|
//! | `STATUS`       | [`Command::Status`]  |
//! | anything else  | [`Command::Unknown`] |

mod number;
mod parser;

pub use number::{parse_lenient, parse_strict};
pub use parser::{normalize, CommandParser, MAX_LINE_LEN};

/// Text kept from an unrecognized line.
pub type RawText = heapless::String<32>;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Relative move by a signed number of steps.
    Move(i64),
    /// Absolute move to a step position.
    Goto(i64),
    /// Homing search against the limit switch.
    Home,
    /// New step delay in microseconds (range checked on execution).
    SetSpeed(i64),
    /// Status report.
    Status,
    /// Unrecognized input, normalized and truncated.
    Unknown(RawText),
}
