//! Receiver addressing.
//!
//! A method's receiver can be a variable, an args array, a temporary, or an
//! element nested beneath any of those. Evaluating the method's own
//! arguments may grow the stacks that hold these, so the receiver is named
//! by path and looked up again on every access instead of being borrowed.

use smallvec::SmallVec;

use super::Interpreter;
use crate::value::Value;

/// Where a receiver path starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Root {
    /// Variable `name` in scope level `level`.
    Binding { level: usize, name: Box<[u8]> },
    /// Entry of the args stack.
    Args(usize),
    /// Entry of the temporary stack (array heads, `$` literals).
    Temp(usize),
}

/// A receiver: a root plus array indices below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Place {
    root: Root,
    path: SmallVec<[u32; 4]>,
}

impl Place {
    pub fn binding(level: usize, name: &[u8]) -> Self {
        Place {
            root: Root::Binding {
                level,
                name: name.into(),
            },
            path: SmallVec::new(),
        }
    }

    pub fn args(slot: usize) -> Self {
        Place {
            root: Root::Args(slot),
            path: SmallVec::new(),
        }
    }

    pub fn temp(slot: usize) -> Self {
        Place {
            root: Root::Temp(slot),
            path: SmallVec::new(),
        }
    }

    /// Element `index` of this place.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut path = self.path.clone();
        path.push(index);
        Place {
            root: self.root.clone(),
            path,
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }
}

impl Interpreter {
    /// The value at `place`, if it still exists.
    pub fn resolve_place(&mut self, place: &Place) -> Option<&mut Value> {
        let mut value = match &place.root {
            Root::Binding { level, name } => self.scopes.variable_mut(*level, name)?,
            Root::Args(slot) => self.args.get_mut(*slot)?,
            Root::Temp(slot) => self.temps.get_mut(*slot)?,
        };
        for &index in &place.path {
            value = match value {
                Value::Array(list) => list.get_mut(index as usize)?,
                _ => return None,
            };
        }
        Some(value)
    }

    /// A copy of the value at `place`, or `None`.
    pub(crate) fn read_place(&mut self, place: &Place) -> Value {
        self.resolve_place(place).cloned().unwrap_or_default()
    }
}
