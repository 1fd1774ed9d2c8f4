//! String interning.
//!
//! The compiler is single-threaded end to end (see the concurrency section of
//! the design notes), so the interner is a plain `RefCell`-guarded table
//! rather than the lock-free, atomics-based design a concurrent frontend
//! would need. Interned strings are leaked to get a `'static` lifetime,
//! which is sound because a [`StringTable`] lives for the whole process.

use std::cell::RefCell;
use rustc_hash::FxHashMap;

/// An interned string.
///
/// Two symbols compare equal iff they were interned from equal strings;
/// comparison and hashing are therefore O(1) regardless of string length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `s` in the process-wide table and return a handle to it.
    pub fn intern(s: &str) -> Self {
        STRING_TABLE.with(|table| table.borrow_mut().intern(s))
    }

    /// Look up the original string behind this symbol.
    pub fn as_str(self) -> &'static str {
        STRING_TABLE.with(|table| table.borrow().get(self))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

thread_local! {
    static STRING_TABLE: RefCell<StringTable> = RefCell::new(StringTable::new());
}

/// The backing store for [`Symbol`]: a bidirectional map between strings and
/// dense indices, with strings leaked for a `'static` lifetime.
struct StringTable {
    strings: Vec<&'static str>,
    indices: FxHashMap<&'static str, u32>,
}

impl StringTable {
    fn new() -> Self {
        Self {
            strings: Vec::new(),
            indices: FxHashMap::default(),
        }
    }

    fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&index) = self.indices.get(s) {
            return Symbol(index);
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = self.strings.len() as u32;
        self.strings.push(leaked);
        self.indices.insert(leaked, index);
        Symbol(index)
    }

    fn get(&self, symbol: Symbol) -> &'static str {
        self.strings[symbol.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_string_yields_same_symbol() {
        let a = Symbol::intern("hello");
        let b = Symbol::intern("hello");
        assert_eq!(a, b);
    }

    #[test]
    fn interning_different_strings_yields_different_symbols() {
        let a = Symbol::intern("hello");
        let b = Symbol::intern("world");
        assert_ne!(a, b);
    }

    #[test]
    fn as_str_round_trips() {
        let sym = Symbol::intern("println");
        assert_eq!(sym.as_str(), "println");
    }

    #[test]
    fn display_prints_the_original_string() {
        let sym = Symbol::intern("io");
        assert_eq!(format!("{sym}"), "io");
    }
}
