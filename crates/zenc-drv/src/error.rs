//! Typed driver errors and their mapping to the process exit codes the
//! external interface promises: 1 for I/O failure, 2 for a toolchain
//! failure. Lexical and syntactic errors never reach this type — they are
//! reported through the shared `Handler`/`Diagnostic` machinery instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no C compiler found on PATH (tried: {tried})")]
    NoCompilerFound { tried: String },

    #[error("failed to spawn {cc}: {source}")]
    SpawnCompiler {
        cc: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{cc} exited with a failure status compiling {path}")]
    CompilerFailed { cc: String, path: PathBuf },
}

impl DriverError {
    /// The process exit code this error should surface as.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::ReadInput { .. } | DriverError::WriteOutput { .. } => 1,
            DriverError::NoCompilerFound { .. }
            | DriverError::SpawnCompiler { .. }
            | DriverError::CompilerFailed { .. } => 2,
        }
    }
}
