//! The greeting line and the strategies that emit it.

use std::io::{self, Write};

use crate::stdout::RawStdout;

mod fmt;
mod stream;

pub use fmt::FmtGreeter;
pub use stream::StreamGreeter;

/// Identifies the running target.
///
/// The hyphen is U+2011 NON-BREAKING HYPHEN, kept exactly as the board's
/// original greeting spelled it.
pub const GREETING: &str = "[A55] Hello from FRDM\u{2011}i.MX93!";

/// Separates [`GREETING`] from the decimal argument count.
pub const ARGC_LABEL: &str = " argc=";

/// Something that can write the greeting line.
///
/// Every implementation writes `GREETING`, `ARGC_LABEL`, `argc` in decimal,
/// and a `\n`, and nothing else.
pub trait Greeter {
    /// Write the greeting line for a process with `argc` arguments to `out`.
    fn write_greeting<W: Write + ?Sized>(&self, out: &mut W, argc: usize) -> io::Result<()>;
}

/// The greeter chosen by the `use-fmt` feature.
#[cfg(feature = "use-fmt")]
pub type SelectedGreeter = FmtGreeter;

/// The greeter chosen by the `use-fmt` feature.
#[cfg(not(feature = "use-fmt"))]
pub type SelectedGreeter = StreamGreeter;

/// The name of the strategy behind [`SelectedGreeter`].
#[inline]
pub const fn strategy_name() -> &'static str {
    if cfg!(feature = "use-fmt") {
        "fmt"
    } else {
        "stream"
    }
}

/// Write the greeting line for a process with `argc` arguments to standard
/// output.
pub fn greet(argc: usize) -> io::Result<()> {
    #[cfg(feature = "log")]
    log::trace!("Greeting with the {} strategy, argc={}", strategy_name(), argc);

    let result = SelectedGreeter::default().write_greeting(&mut RawStdout, argc);

    #[cfg(feature = "log")]
    match &result {
        Ok(()) => log::trace!("Greeting written"),
        Err(err) => log::debug!("Failed to write greeting: {}", err),
    }

    result
}
