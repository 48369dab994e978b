//! Serial command console.
//!
//! Ties line input, command parsing and the motor together. Responses are
//! written to any `core::fmt::Write` sink; with the `std` feature a whole
//! session can run over `BufRead`/`Write`.

mod interpreter;
mod line;
#[cfg(feature = "std")]
mod session;

pub use interpreter::CommandInterpreter;
pub use line::LineBuffer;
