//! Tracing setup for the CLI
//!
//! Logs go to stderr so stdout stays clean for `--json` output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use genealogy::config::Verbosity;

/// Default filter directive for a `-v` count and configured verbosity.
///
/// The larger of the two wins.
pub fn default_directive(verbose: u8, verbosity: Verbosity) -> &'static str {
    let from_config = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    let from_flag = match verbose {
        0 => 0,
        n => n.saturating_add(1),
    };
    match from_flag.max(from_config) {
        0 => "genealogy=error",
        1 => "genealogy=warn",
        2 => "genealogy=info",
        3 => "genealogy=debug",
        _ => "genealogy=trace",
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence.
pub fn init(verbose: u8, verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, verbosity)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .without_time(),
    );

    // A second init (tests) is harmless
    let _ = subscriber.try_init();
}
