//! Diagnostic tracing for debugging sessions.
//!
//! Diagnostics always go to stderr so they never interleave with the
//! conversation on stdout. `RUST_LOG` wins over `--verbose` when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "usagi=info",
        _ => "usagi=debug",
    }
}

/// Install the stderr subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=usagi=debug usagi --load weekly.txt
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
