//! The scope stack: name bindings, receiver methods, and loaded libraries.
//!
//! One [`Level`] per active Function/Expression call (Macros reuse their
//! caller's level). Each level holds three sorted tables plus the program
//! texts it owns; popping a level releases those texts, which turns any
//! code pointer into them stale.
//!
//! Primitives and primitive methods live in the outermost level and cannot
//! be replaced by the declaration primitives. Inner levels may still shadow
//! any user-defined name.

mod table;

use std::fmt;

use tracing::debug;

use crate::errors::Flow;
use crate::interpreter::{Interpreter, Place};
use crate::source::{CodePtr, SourceId, Sources};
use crate::value::{CodeKind, CodeRef, Value};
pub use table::Table;

/// A native operation.
pub type Primitive = fn(&mut Interpreter) -> Flow;

/// A native method. The receiver is addressed by place and re-resolved on
/// each access, since evaluating arguments may move bindings around.
pub type PrimitiveMethod = fn(&mut Interpreter, &Place) -> Flow;

/// What a name is bound to.
#[derive(Clone)]
pub enum Binding {
    Primitive(Primitive),
    Function(CodePtr),
    Expression(CodePtr),
    Macro(CodePtr),
    Variable(Value),
}

impl Binding {
    pub fn from_code(code: CodeRef) -> Self {
        match code.kind {
            CodeKind::Function => Binding::Function(code.entry),
            CodeKind::Expression => Binding::Expression(code.entry),
            CodeKind::Macro => Binding::Macro(code.entry),
        }
    }

    /// Name reported by `token`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Binding::Primitive(_) => "language function",
            Binding::Function(_) => "function",
            Binding::Expression(_) => "expression",
            Binding::Macro(_) => "macro",
            Binding::Variable(_) => "variable",
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Variable(v) => f.debug_tuple("Variable").field(v).finish(),
            Binding::Function(at) | Binding::Expression(at) | Binding::Macro(at) => {
                write!(f, "{}({at:?})", self.kind_name())
            }
            Binding::Primitive(_) => f.write_str("Primitive"),
        }
    }
}

/// A receiver method.
#[derive(Copy, Clone)]
pub enum Method {
    Primitive(PrimitiveMethod),
    User(CodePtr),
}

/// Result of resolving a name, detached from the table borrow.
#[derive(Copy, Clone)]
pub enum Resolved {
    Primitive(Primitive),
    Code(CodeRef),
    /// A variable, found in the level at this index.
    Variable { level: usize },
}

/// One lexical level.
#[derive(Default)]
pub struct Level {
    bindings: Table<Binding>,
    methods: Table<Method>,
    libraries: Table<SourceId>,
    owned: Vec<SourceId>,
}

impl Level {
    fn with_capacity(bindings: usize, methods: usize) -> Self {
        Level {
            bindings: Table::with_capacity(bindings),
            methods: Table::with_capacity(methods),
            libraries: Table::new(),
            owned: Vec::new(),
        }
    }

    fn release(self, sources: &mut Sources) {
        for &id in self.owned.iter().chain(self.libraries.values()) {
            sources.release(id);
        }
    }
}

/// Stack of levels. Never empty.
pub struct ScopeStack {
    levels: Vec<Level>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            levels: vec![Level::with_capacity(128, 32)],
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    fn innermost(&mut self) -> &mut Level {
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }

    pub fn push_scope(&mut self) {
        self.levels.push(Level::default());
    }

    /// Pop the innermost level and release the texts it owns.
    ///
    /// # Panics
    /// If only the outermost level remains.
    pub fn pop_scope(&mut self, sources: &mut Sources) {
        assert!(self.levels.len() > 1, "pop of outermost scope");
        if let Some(level) = self.levels.pop() {
            if !level.owned.is_empty() || !level.libraries.is_empty() {
                debug!(
                    owned = level.owned.len(),
                    libraries = level.libraries.len(),
                    "releasing scope texts"
                );
            }
            level.release(sources);
        }
    }

    /// Innermost-first lookup.
    pub fn lookup(&self, name: &[u8]) -> Option<&Binding> {
        self.levels.iter().rev().find_map(|level| level.bindings.get(name))
    }

    pub fn resolve(&self, name: &[u8]) -> Option<Resolved> {
        self.levels
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, level)| level.bindings.get(name).map(|b| (index, b)))
            .map(|(level, binding)| match *binding {
                Binding::Primitive(f) => Resolved::Primitive(f),
                Binding::Function(at) => Resolved::Code(CodeRef::new(CodeKind::Function, at)),
                Binding::Expression(at) => Resolved::Code(CodeRef::new(CodeKind::Expression, at)),
                Binding::Macro(at) => Resolved::Code(CodeRef::new(CodeKind::Macro, at)),
                Binding::Variable(_) => Resolved::Variable { level },
            })
    }

    /// The variable `name` in `level`, if it is still a variable.
    pub fn variable_mut(&mut self, level: usize, name: &[u8]) -> Option<&mut Value> {
        match self.levels.get_mut(level)?.bindings.get_mut(name)? {
            Binding::Variable(value) => Some(value),
            _ => None,
        }
    }

    /// Bind `name` in the innermost level.
    ///
    /// Returns `false`, binding nothing, if `name` currently resolves to a
    /// primitive.
    pub fn declare(&mut self, name: &[u8], binding: Binding) -> bool {
        if matches!(self.lookup(name), Some(Binding::Primitive(_))) {
            debug!(name = %String::from_utf8_lossy(name), "declaration shadows a primitive; ignored");
            return false;
        }
        self.innermost().bindings.insert(name, binding);
        true
    }

    /// Register a primitive in the outermost level.
    pub fn register_primitive(&mut self, name: &str, primitive: Primitive) {
        self.levels[0]
            .bindings
            .insert(name.as_bytes(), Binding::Primitive(primitive));
    }

    /// Innermost-first method lookup.
    pub fn lookup_method(&self, name: &[u8]) -> Option<Method> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.methods.get(name).copied())
    }

    /// Bind a user method in the innermost level. Primitive methods win.
    pub fn declare_method(&mut self, name: &[u8], method: Method) -> bool {
        if matches!(self.lookup_method(name), Some(Method::Primitive(_))) {
            return false;
        }
        self.innermost().methods.insert(name, method);
        true
    }

    pub fn register_method(&mut self, name: &str, method: PrimitiveMethod) {
        self.levels[0]
            .methods
            .insert(name.as_bytes(), Method::Primitive(method));
    }

    /// Innermost-first library lookup.
    pub fn find_library(&self, name: &[u8]) -> Option<SourceId> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.libraries.get(name).copied())
    }

    /// Record a loaded library in the innermost level, which takes
    /// ownership of its text.
    pub fn record_library(&mut self, name: &[u8], id: SourceId, sources: &mut Sources) {
        if let Some(previous) = self.innermost().libraries.insert(name, id) {
            sources.release(previous);
        }
    }

    /// Give the innermost level ownership of a text.
    pub fn own_source(&mut self, id: SourceId) {
        self.innermost().owned.push(id);
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
