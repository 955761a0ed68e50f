//! Greeting by inserting each piece into the output stream in turn.

use std::io::{self, Write};

use super::{ARGC_LABEL, GREETING, Greeter};

/// Writes the greeting text, then the argument count, then the line
/// terminator, and flushes.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamGreeter;

impl Greeter for StreamGreeter {
    fn write_greeting<W: Write + ?Sized>(&self, out: &mut W, argc: usize) -> io::Result<()> {
        let mut count = itoa::Buffer::new();

        out.write_all(GREETING.as_bytes())?;
        out.write_all(ARGC_LABEL.as_bytes())?;
        out.write_all(count.format(argc).as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}
