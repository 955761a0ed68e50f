//! Greeting through the `core::fmt` template engine.

use std::io::{self, Write};

use super::{ARGC_LABEL, GREETING, Greeter};

/// Interpolates the argument count into a positional template and writes the
/// whole line with one `writeln!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FmtGreeter;

impl Greeter for FmtGreeter {
    fn write_greeting<W: Write + ?Sized>(&self, out: &mut W, argc: usize) -> io::Result<()> {
        writeln!(out, "{GREETING}{ARGC_LABEL}{argc}")
    }
}
