//! Logger initialization.

/// Initialize logging, if enabled.
///
/// Messages go to stderr, so standard output carries only the greeting at
/// any log level.
pub fn init() {
    // Initialize the chosen logger.
    #[cfg(feature = "env_logger")]
    let _ = env_logger::try_init();

    log::trace!(
        target: "a55_hello::program",
        "Program started with the {} greeter",
        crate::strategy_name()
    );
}
