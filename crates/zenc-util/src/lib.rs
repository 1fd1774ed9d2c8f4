//! Shared infrastructure used by every stage of the `zenc` pipeline:
//! symbol interning, source spans, and diagnostic reporting.
//!
//! Kept deliberately small and single-threaded (see the concurrency section
//! of the design notes) — there is no background work in this compiler, so
//! none of these types need to be `Send`/`Sync`.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{DiagnosticError, SourceMapError};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
