//! Syntax-directed C emitter for the Zen AST defined in `zenc_par`.
//!
//! Produces a self-contained C translation unit: the fixed preamble (see
//! [`preamble`]), then every top-level item in source order. There is no
//! intermediate representation between the AST and the text — each node
//! maps directly to the C text it needs, with the minimal type inference
//! and intrinsic lowering described in the design notes.

mod expr;
mod intrinsics;
mod preamble;
mod stmt;
mod types;

pub use intrinsics::Intrinsic;

use tracing::debug;
use zenc_par::Program;

/// Emits `program` as a complete C translation unit.
pub fn emit_program(program: &Program) -> String {
    debug!(items = program.items.len(), "emitting C translation unit");
    let aliases = intrinsics::collect_import_aliases(&program.items);
    let mut emitter = stmt::Emitter::new(&aliases);
    emitter.emit_program(program);

    let mut out = String::with_capacity(preamble::PREAMBLE.len() + 512);
    out.push_str(preamble::PREAMBLE);
    out.push_str(&emitter.finish());
    out
}
