//! Head evaluation and calls.
//!
//! When a block's head has been scanned, its value decides what the block
//! does: a code value is called, an array becomes a temporary receiver, and
//! anything else is looked up as a name.

use tracing::{trace, trace_span, warn};

use super::{Interpreter, Place};
use crate::errors::{absorb_return, Flow};
use crate::scope::{Binding, Method, Resolved};
use crate::value::{CodeKind, CodeRef, Value};

/// Array index named by a selector, if the selector is numeric.
fn selector_index(selector: &Value) -> Option<u32> {
    match selector {
        Value::String(_) | Value::Number(_) | Value::Integer(_) | Value::UInteger(_) => selector
            .parse_unsigned()
            .and_then(|index| u32::try_from(index).ok()),
        _ => None,
    }
}

impl Interpreter {
    /// Evaluate the head sitting in the top frame. The cursor is on the
    /// `;` or `}` that ended the head.
    pub(crate) fn evaluate_head(&mut self) -> Flow {
        let has_args = self.has_next();
        if let Some(code) = self.frames.top().code_ref() {
            return self.call_code(code, has_args, None);
        }
        if matches!(self.frames.top(), Value::Array(_)) {
            let array = self.frames.take();
            return self.dispatch_temp(array);
        }

        let name = self.frames.take_text();
        match self.scopes.resolve(name.as_bytes()) {
            None => {
                if has_args {
                    trace!(name = %name, "implicit function definition");
                    self.scopes
                        .declare(name.as_bytes(), Binding::Function(self.cursor));
                }
                Ok(())
            }
            Some(Resolved::Primitive(primitive)) => primitive(self),
            Some(Resolved::Code(code)) => self.call_code(code, has_args, None),
            Some(Resolved::Variable { level }) => {
                self.dispatch_receiver(Place::binding(level, name.as_bytes()))
            }
        }
    }

    /// Call `code`, binding the remaining siblings as `args` when
    /// `has_args`, and `self` when a receiver is given.
    ///
    /// The call's result is left in the top frame. A stale code pointer
    /// yields `None`.
    pub(crate) fn call_code(
        &mut self,
        code: CodeRef,
        has_args: bool,
        receiver: Option<Place>,
    ) -> Flow {
        self.frames.clear_top();
        if !self.sources.is_live(code.entry.source) {
            warn!(entry = ?code.entry, "call through a released code pointer");
            return Ok(());
        }

        let _span = trace_span!("call", kind = ?code.kind, depth = self.scopes.depth()).entered();
        trace!(remaining_stack = ?walker_stack::remaining_stack());

        if has_args {
            self.bind_args()?;
        }
        let caller_receiver = match receiver {
            Some(place) => Some(std::mem::replace(&mut self.receiver, Some(place))),
            None => None,
        };
        if code.is_scoped() {
            self.scopes.push_scope();
        }
        let resume = std::mem::replace(&mut self.cursor, code.entry);

        let flow = match code.kind {
            CodeKind::Expression => self.expr_next(),
            CodeKind::Function | CodeKind::Macro => self.scan_next(),
        };

        self.cursor = resume;
        if code.is_scoped() {
            self.scopes.pop_scope(&mut self.sources);
        }
        if let Some(previous) = caller_receiver {
            self.receiver = previous;
        }
        if has_args {
            self.unbind_args();
        }
        absorb_return(flow)
    }

    /// Index or method dispatch on the value at `place`.
    ///
    /// With no selector the result is a copy of the receiver. A code
    /// selector is called with the receiver as `self`; a numeric one
    /// indexes an array receiver; anything else names a method.
    pub(crate) fn dispatch_receiver(&mut self, place: Place) -> Flow {
        if !self.has_next() {
            let copy = self.read_place(&place);
            self.frames.assume(copy);
            return Ok(());
        }
        self.scan_next()?;
        let has_args = self.has_next();

        if let Some(code) = self.frames.top().code_ref() {
            return self.call_code(code, has_args, Some(place));
        }

        if let Some(index) = selector_index(self.frames.top()) {
            let in_range = matches!(
                self.resolve_place(&place),
                Some(Value::Array(list)) if (index as usize) < list.len()
            );
            if in_range {
                return self.dispatch_receiver(place.child(index));
            }
            self.frames.clear_top();
            return Ok(());
        }

        let name = self.frames.take_text();
        match self.scopes.lookup_method(name.as_bytes()) {
            Some(Method::Primitive(method)) => method(self, &place),
            Some(Method::User(entry)) => self.call_code(
                CodeRef::new(CodeKind::Function, entry),
                has_args,
                Some(place),
            ),
            None => {
                trace!(method = %name, "unknown method");
                Ok(())
            }
        }
    }

    /// Dispatch on a value that is not stored anywhere else. If dispatch
    /// produces nothing, the (possibly mutated) value is the result.
    pub(crate) fn dispatch_temp(&mut self, value: Value) -> Flow {
        self.temps.push(value);
        let flow = self.dispatch_receiver(Place::temp(self.temps.len() - 1));
        let value = self.temps.pop().unwrap_or_default();
        flow?;
        if self.frames.top().is_none() {
            self.frames.assume(value);
        }
        Ok(())
    }
}
