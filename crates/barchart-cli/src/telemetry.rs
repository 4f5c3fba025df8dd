// File: crates/barchart-cli/src/telemetry.rs
// Summary: tracing subscriber setup; RUST_LOG wins over -v/-q.

/// Default filter for the given verbosity flags.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Installs a compact fmt subscriber on stderr.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(verbose: u8, quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter(verbose, quiet))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
