//! Common logging initializer
//!

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging for the given verbosity level.
///
/// `RUST_LOG` takes precedence when set, otherwise `-v` maps to `debug`
/// and anything above to `trace`.
///
pub fn init_logging(verbose: u8) {
    // Load filters from environment or the verbosity flag
    //
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Combine filter & specific format
    //
    let fmt = fmt::layer().with_target(false).compact();

    tracing_subscriber::registry().with(filter).with(fmt).init();
}
