//! Blocking console session over std I/O (std only).

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::interpreter::CommandInterpreter;

impl<STEP, DIR, EN, LIMIT, DELAY> CommandInterpreter<STEP, DIR, EN, LIMIT, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    LIMIT: InputPin,
    DELAY: DelayNs,
{
    /// Prints the banner, then serves one command per input line until
    /// end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so line noise ends up
    /// as an unknown command.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut response = String::new();
        self.banner(&mut response).map_err(format_error)?;
        output.write_all(response.as_bytes())?;
        output.flush()?;

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&raw);
            if let Cow::Owned(_) = line {
                warn!("replaced invalid UTF-8 in input line");
            }

            response.clear();
            self.handle_line(&line, &mut response).map_err(format_error)?;
            output.write_all(response.as_bytes())?;
            output.flush()?;
        }

        Ok(())
    }
}

fn format_error(_: core::fmt::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, "response formatting failed")
}
