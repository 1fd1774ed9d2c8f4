//! Initializes the `tracing-subscriber` sink the driver binary uses. Library
//! crates (`zenc-lex`, `zenc-par`, `zenc-emit`) depend only on the `tracing`
//! facade and never call this — they stay usable as plain libraries without
//! forcing a log sink on their callers.

use tracing_subscriber::EnvFilter;

/// `-v`/`--verbose` sets the default level to `debug`; `RUST_LOG` always
/// takes precedence when set, for finer-grained control.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
