//! The `zenc` driver: reads a `.zen` file, runs it through the lexer,
//! parser, and emitter, writes the resulting C translation unit, and
//! optionally spawns a native C compiler on it.

mod cli;
mod config;
mod error;
mod session;
mod tracing_setup;

pub use cli::{Cli, EmitTarget};
pub use config::Config;
pub use error::DriverError;
pub use session::{native_toolchain_available, Session};

use clap::Parser;

/// The driver's entry point, called from `main.rs`. Returns an
/// `anyhow::Result` so I/O and toolchain failures (typed as [`DriverError`])
/// and any future caller-facing error both convert through the same `?`,
/// per the error handling design — `main.rs` downcasts back to
/// [`DriverError`] only when it needs the specific exit code.
pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(cli.verbose);
    let config = Config::from_cli(cli);
    Session::new(config).compile()?;
    Ok(())
}
