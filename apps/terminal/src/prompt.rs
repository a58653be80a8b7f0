//! # Console Prompts
//!
//! Line-based numeric input with the retry loop every prompt in the
//! app shares. Generic over reader and writer so tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::TerminalError;

/// Prompts until the customer types something that parses as an
/// integer.
///
/// Each attempt prints `prompt` (pass `""` when the caller has already
/// printed its own), flushes so the text appears before the program
/// blocks on input, then reads one line. A line that does not parse
/// gets `Invalid input. Please enter a number.` and another attempt.
/// Whole lines are consumed, so trailing junk like `2 please` is a
/// retry rather than left-over input for the next prompt.
///
/// Lines are read as raw bytes: input that is not valid UTF-8 is just
/// another failed parse, not an I/O error.
///
/// ## Errors
/// [`TerminalError::InputClosed`] when the reader hits end-of-stream;
/// the session turns that into a quiet exit.
pub fn read_int<R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<i64, TerminalError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(TerminalError::InputClosed);
        }

        match String::from_utf8_lossy(&line).trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Invalid input. Please enter a number.")?,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
