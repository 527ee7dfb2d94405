//! Argument binding.

use super::Interpreter;
use crate::errors::Flow;
use crate::value::{List, Value};

impl Interpreter {
    /// Evaluate every remaining sibling in the caller's context and push
    /// the results as the new `args` array.
    ///
    /// On a signal nothing is pushed; the values evaluated so far are
    /// dropped and the signal's value is left in the top frame.
    pub(crate) fn bind_args(&mut self) -> Flow {
        let mut bound = List::new();
        while self.has_next() {
            self.scan_next()?;
            bound.push(self.frames.take());
        }
        self.args.push(Value::Array(bound));
        Ok(())
    }

    /// Pop the `args` array pushed by [`Interpreter::bind_args`].
    pub(crate) fn unbind_args(&mut self) {
        self.args.pop();
    }
}
