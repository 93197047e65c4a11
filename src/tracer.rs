use tracing::Level;

/// Compact INFO-level logging to stderr.
pub fn setup_simple_tracing() -> crate::Result<()> {
    setup_tracing(Level::INFO, false)
}

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// walk output on stdout. Calling this again after a subscriber is set is a
/// no-op.
pub fn setup_tracing(level: Level, json: bool) -> crate::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if let Err(err) = installed {
        tracing::debug!("tracing already initialised: {err}");
    }
    Ok(())
}

/// Maps `-v` repetitions to a level: none is WARN, then INFO, DEBUG, TRACE.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
