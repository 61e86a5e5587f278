//! # Raw Integer Input
//!
//! Line-based integer prompting with re-prompt on non-numeric input.
//! End of input surfaces as an error so the menu loops can exit cleanly.

use std::io::{self, BufRead, Write};

/// Reads one integer, re-prompting until a line parses.
///
/// # Errors
///
/// Returns `io::ErrorKind::UnexpectedEof` when the reader runs out of
/// input, and passes through any other read/write error.
pub fn read_int<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<i32> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Invalid input. Please enter an integer.")?,
        }
    }
}

/// Reads one integer within `[low, high]`, re-prompting until valid.
///
/// # Errors
///
/// Same conditions as [`read_int`].
pub fn read_int_in_range<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
    low: i32,
    high: i32,
) -> io::Result<i32> {
    loop {
        let value = read_int(reader, out, prompt)?;
        if (low..=high).contains(&value) {
            return Ok(value);
        }
        writeln!(
            out,
            "Invalid input. Please enter a number between {low} and {high}."
        )?;
    }
}
