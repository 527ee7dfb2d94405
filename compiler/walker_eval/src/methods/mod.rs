//! Primitive methods.
//!
//! A method runs with the cursor just past its selector and the receiver
//! addressed by a [`Place`]. It may replace the receiver, consume siblings
//! as its arguments, and leaves its result in the top frame.

mod array;
mod file;

use crate::errors::Flow;
use crate::interpreter::{Interpreter, Place};
use crate::scope::{PrimitiveMethod, ScopeStack};
use crate::value::Value;

const TABLES: &[&[(&str, PrimitiveMethod)]] = &[CORE, array::METHODS, file::METHODS];

const CORE: &[(&str, PrimitiveMethod)] = &[
    ("=", assign),
    ("++", increment),
    ("call", call),
    ("type", type_),
];

/// Register every primitive method into the outermost scope level.
pub(crate) fn register(scopes: &mut ScopeStack) {
    for table in TABLES {
        for &(name, method) in *table {
            scopes.register_method(name, method);
        }
    }
}

/// `{x;=;VALUE}`.
fn assign(interp: &mut Interpreter, place: &Place) -> Flow {
    let value = interp.next_value()?;
    if let Some(slot) = interp.resolve_place(place) {
        *slot = value;
    }
    Ok(())
}

/// Add one to a number, or flip a boolean. `None` becomes 1; text is
/// parsed first.
fn increment(interp: &mut Interpreter, place: &Place) -> Flow {
    let Some(slot) = interp.resolve_place(place) else {
        return Ok(());
    };
    match slot {
        Value::None | Value::String(_) => {
            let n = slot.to_number();
            *slot = Value::Number(n + 1.0);
        }
        Value::Number(n) => *n += 1.0,
        Value::Integer(i) => *i = i.wrapping_add(1),
        Value::UInteger(u) => *u = u.wrapping_add(1),
        Value::Boolean(b) => *b = !*b,
        _ => {}
    }
    Ok(())
}

/// Call a code-valued receiver with the remaining siblings as args.
fn call(interp: &mut Interpreter, place: &Place) -> Flow {
    let has_args = interp.has_next();
    match interp.resolve_place(place).and_then(|value| value.code_ref()) {
        Some(code) => interp.call_code(code, has_args, None),
        None => Ok(()),
    }
}

fn type_(interp: &mut Interpreter, place: &Place) -> Flow {
    let kind = interp.read_place(place).kind_name();
    interp.frames.assume(Value::string(kind));
    Ok(())
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn method_names_are_unique() {
        let mut seen = FxHashSet::default();
        for table in TABLES {
            for &(name, _) in *table {
                assert!(seen.insert(name), "duplicate method `{name}`");
            }
        }
    }
}
