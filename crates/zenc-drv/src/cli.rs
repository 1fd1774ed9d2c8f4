//! The `clap`-derived command line surface. Kept separate from [`crate::Config`]
//! so the rest of the driver can be exercised without going through argument
//! parsing at all (see the design notes on why `Config` and `Cli` are split).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Compiles a Zen source file to C and, by default, to a native binary.
#[derive(Parser, Debug)]
#[command(name = "zenc", version, about, long_about = None)]
pub struct Cli {
    /// The `.zen` source file to compile.
    pub input: PathBuf,

    /// Output path, positional form (`zenc input.zen output.c`). Equivalent
    /// to `-o`; present for backward compatibility with the two-argument
    /// invocation style.
    pub output_positional: Option<PathBuf>,

    /// Where to write the emitted C translation unit. Defaults to the
    /// input's file stem with a `.c` extension.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Override which C compiler binary is invoked for the native compile
    /// step. Defaults to searching `cc`, then `gcc`, on `PATH`.
    #[arg(long = "cc")]
    pub cc: Option<PathBuf>,

    /// What to produce. `c` stops after writing the `.c` file; the default
    /// additionally invokes a native C compiler on it.
    #[arg(long = "emit", value_enum)]
    pub emit: Option<EmitTarget>,

    /// Enable `debug`-level tracing of each pipeline stage. Equivalent to
    /// setting `RUST_LOG=debug`, but `RUST_LOG` always wins if both are set.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitTarget {
    /// Write the `.c` file and stop.
    C,
    /// Write the `.c` file and compile it to a native binary (default).
    #[default]
    Binary,
}
