//! Hello world for the Cortex-A55 application core of the FRDM-i.MX93 board.
//!
//! The program prints one line announcing the target and the number of
//! process arguments, then exits successfully. How the line is formatted is
//! chosen when the crate is built: the `use-fmt` feature selects the
//! [`FmtGreeter`], and otherwise the [`StreamGreeter`] is used. Both write
//! exactly the same bytes.

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Logger setup for the binary.
#[cfg(feature = "log")]
#[cfg_attr(docsrs, doc(cfg(feature = "log")))]
pub mod log;

pub mod greeter;
pub mod stdout;

pub use greeter::{
    ARGC_LABEL, FmtGreeter, GREETING, Greeter, SelectedGreeter, StreamGreeter, greet,
    strategy_name,
};
pub use stdout::RawStdout;
