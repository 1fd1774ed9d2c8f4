//! Fully-resolved driver options, built once from a parsed [`crate::Cli`].
//!
//! Separate from `Cli` itself so [`crate::Session`] and its tests never need
//! to construct a `clap` value to exercise the compile pipeline.

use std::path::PathBuf;

use crate::cli::{Cli, EmitTarget};

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    /// The `.c` file the emitter's output is written to.
    pub output: PathBuf,
    pub cc: Option<PathBuf>,
    pub emit: EmitTarget,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let output = cli
            .output
            .or(cli.output_positional)
            .unwrap_or_else(|| cli.input.with_extension("c"));
        Config {
            input: cli.input,
            output,
            cc: cli.cc,
            emit: cli.emit.unwrap_or_default(),
            verbose: cli.verbose,
        }
    }

    /// The native binary path the toolchain step produces: the `.c` output
    /// path with its extension swapped for `out`.
    pub fn native_output(&self) -> PathBuf {
        self.output.with_extension("out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(input: &str) -> Cli {
        Cli {
            input: PathBuf::from(input),
            output_positional: None,
            output: None,
            cc: None,
            emit: None,
            verbose: false,
        }
    }

    #[test]
    fn default_output_mirrors_input_stem_with_c_extension() {
        let config = Config::from_cli(cli("examples/hello.zen"));
        assert_eq!(config.output, PathBuf::from("examples/hello.c"));
    }

    #[test]
    fn positional_output_is_equivalent_to_the_output_flag() {
        let mut c = cli("a.zen");
        c.output_positional = Some(PathBuf::from("b.c"));
        let config = Config::from_cli(c);
        assert_eq!(config.output, PathBuf::from("b.c"));
    }

    #[test]
    fn explicit_output_flag_wins_over_positional() {
        let mut c = cli("a.zen");
        c.output_positional = Some(PathBuf::from("positional.c"));
        c.output = Some(PathBuf::from("flag.c"));
        let config = Config::from_cli(c);
        assert_eq!(config.output, PathBuf::from("flag.c"));
    }

    #[test]
    fn native_output_swaps_extension_to_out() {
        let config = Config::from_cli(cli("a.zen"));
        assert_eq!(config.native_output(), PathBuf::from("a.out"));
    }
}
