//! Assembling lines from a byte-oriented serial receiver.

use crate::error::CommandError;

/// Bounded line accumulator.
///
/// Bytes are pushed one at a time as they arrive from the UART. `\r` is
/// dropped and `\n` completes the line.
///
/// Each byte is stored as the char with the same code point, so a non-ASCII
/// byte becomes a Latin-1 character taking two bytes of capacity. The
/// command grammar is ASCII, so such lines parse as unknown commands.
///
/// # Type Parameters
///
/// - `N`: capacity of the buffer in bytes.
#[derive(Debug, Default)]
pub struct LineBuffer<const N: usize> {
    buffer: heapless::String<N>,
    overflowed: bool,
}

impl<const N: usize> LineBuffer<N> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: heapless::String::new(),
            overflowed: false,
        }
    }

    /// Feeds one received byte.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: a complete line is available from [`LineBuffer::line`].
    /// - `Ok(false)`: more bytes are needed.
    /// - `Err(CommandError::LineTooLong)`: the line just terminated did not
    ///   fit; its content was discarded.
    pub fn push(&mut self, byte: u8) -> Result<bool, CommandError> {
        match byte {
            b'\n' => {
                if self.overflowed {
                    self.clear();
                    Err(CommandError::LineTooLong)
                } else {
                    Ok(true)
                }
            }
            b'\r' => Ok(false),
            _ => {
                if !self.overflowed && self.buffer.push(byte as char).is_err() {
                    self.overflowed = true;
                }
                Ok(false)
            }
        }
    }

    /// The line assembled so far.
    pub fn line(&self) -> &str {
        self.buffer.as_str()
    }

    /// Discards the current line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }
}
