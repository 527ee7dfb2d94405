//! The primitive catalogue.
//!
//! Each submodule exports a `PRIMITIVES` table of `(name, function)` pairs.
//! A primitive runs with the cursor just past its name, consumes the
//! siblings it needs, and leaves its result in the top frame. Siblings it
//! does not consume are skipped by the enclosing block.

mod clock;
mod control;
mod files;
mod io;
mod logic;
mod math;
mod meta;
mod text;
mod types;

use crate::errors::Signal;
use crate::interpreter::Interpreter;
use crate::scope::{Primitive, ScopeStack};
use crate::value::{Text, Value};

const TABLES: &[&[(&str, Primitive)]] = &[
    clock::PRIMITIVES,
    control::PRIMITIVES,
    files::PRIMITIVES,
    io::PRIMITIVES,
    logic::PRIMITIVES,
    math::PRIMITIVES,
    meta::PRIMITIVES,
    text::PRIMITIVES,
    types::PRIMITIVES,
];

/// Register every primitive into the outermost scope level.
pub(crate) fn register(scopes: &mut ScopeStack) {
    for table in TABLES {
        for &(name, primitive) in *table {
            scopes.register_primitive(name, primitive);
        }
    }
}

/// Names of every primitive, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().flat_map(|table| table.iter().map(|&(name, _)| name))
}

impl Interpreter {
    /// Evaluate the next sibling and take its value.
    pub(crate) fn next_value(&mut self) -> Result<Value, Signal> {
        self.scan_next()?;
        Ok(self.frames.take())
    }

    /// Evaluate the next sibling and take its text.
    pub(crate) fn next_text(&mut self) -> Result<Text, Signal> {
        self.scan_next()?;
        Ok(self.frames.take_text())
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let mut seen = FxHashSet::default();
        for name in names() {
            assert!(seen.insert(name), "duplicate primitive `{name}`");
        }
    }
}
