//! Print the FRDM-i.MX93 greeting and the argument count.

use std::io;

fn main() -> io::Result<()> {
    #[cfg(feature = "log")]
    a55_hello::log::init();

    // Arguments are only counted, so don't require them to be UTF-8.
    let argc = std::env::args_os().len();

    a55_hello::greet(argc)
}
