//! Error types for the shared utility layer.

use thiserror::Error;

/// Errors raised while looking up or slicing source files through a
/// [`crate::SourceMap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    #[error("file not found in source map")]
    FileNotFound,
    #[error("invalid span: start={start}, end={end}")]
    InvalidSpan { start: usize, end: usize },
    #[error("span out of bounds: file_len={file_len}, span=({span_start}, {span_end})")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },
    #[error("invalid line number {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Errors raised while formatting a diagnostic for display.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("failed to format diagnostic")]
    FormatFailed,
}

pub type UResult<T, E> = Result<T, E>;
