//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise `-v` raises the level one step per use.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
