//! Compilation session: orchestrates the pipeline (read → lex/parse → emit →
//! write → optional native compile) over a resolved [`Config`], mirroring
//! the `Session`-owns-the-`Config` split the teacher's driver crate uses.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, warn};
use zenc_util::Handler;

use crate::cli::EmitTarget;
use crate::config::Config;
use crate::error::DriverError;

/// Which `cc`-compatible binaries are tried, in order, when `--cc` is not
/// given.
const COMPILER_CANDIDATES: &[&str] = &["cc", "gcc"];

pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full pipeline. Lexical/syntactic diagnostics are reported to
    /// stderr but never abort compilation (see the error handling design
    /// notes); only I/O and toolchain failures return `Err`.
    pub fn compile(&self) -> Result<(), DriverError> {
        debug!(input = %self.config.input.display(), "reading input file");
        let source = std::fs::read_to_string(&self.config.input).map_err(|source| {
            DriverError::ReadInput {
                path: self.config.input.clone(),
                source,
            }
        })?;

        debug!("lexing and parsing");
        let handler = Handler::new();
        let program = zenc_par::parse_program(&source, &handler);
        if handler.has_errors() {
            warn!(count = handler.error_count(), "source has diagnostics");
        }
        report_diagnostics(&handler);

        debug!("emitting C translation unit");
        let c_source = zenc_emit::emit_program(&program);

        debug!(output = %self.config.output.display(), "writing output file");
        std::fs::write(&self.config.output, &c_source).map_err(|source| DriverError::WriteOutput {
            path: self.config.output.clone(),
            source,
        })?;

        if self.config.emit == EmitTarget::C {
            debug!("--emit c requested, skipping native compile");
            return Ok(());
        }

        self.invoke_toolchain()
    }

    fn invoke_toolchain(&self) -> Result<(), DriverError> {
        let cc = match &self.config.cc {
            Some(path) => path.clone(),
            None => locate_compiler().ok_or_else(|| DriverError::NoCompilerFound {
                tried: COMPILER_CANDIDATES.join(", "),
            })?,
        };
        let cc_display = cc.display().to_string();
        let native_output = self.config.native_output();

        debug!(cc = %cc_display, output = %native_output.display(), "invoking native C compiler");
        let status = Command::new(&cc)
            .arg(&self.config.output)
            .arg("-o")
            .arg(&native_output)
            .status()
            .map_err(|source| DriverError::SpawnCompiler {
                cc: cc_display.clone(),
                source,
            })?;

        if !status.success() {
            return Err(DriverError::CompilerFailed {
                cc: cc_display,
                path: self.config.output.clone(),
            });
        }
        Ok(())
    }
}

fn locate_compiler() -> Option<PathBuf> {
    COMPILER_CANDIDATES.iter().find_map(|candidate| {
        let found = Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        found.then(|| PathBuf::from(candidate))
    })
}

fn report_diagnostics(handler: &Handler) {
    for diag in handler.diagnostics() {
        eprintln!("{}: {}", diag.level, diag.message);
        for note in &diag.notes {
            eprintln!("  note: {note}");
        }
        for help in &diag.helps {
            eprintln!("  help: {help}");
        }
    }
}

/// Whether a usable `cc`/`gcc` is reachable, used by integration tests to
/// decide whether they can exercise the native-compile step.
pub fn native_toolchain_available() -> bool {
    locate_compiler().is_some()
}
