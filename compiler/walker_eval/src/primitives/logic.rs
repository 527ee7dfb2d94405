//! Comparison and boolean primitives.

use std::cmp::Ordering;

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::value::Value;

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("=", all_equal),
    ("eq", all_equal),
    ("!=", none_equal),
    ("not", not),
    ("!", not),
    ("bool", bool_),
];

/// Compare every later sibling against the first. Stops at the first
/// sibling for which `accept` fails.
fn compare_to_first(interp: &mut Interpreter, accept: fn(Option<Ordering>) -> bool) -> Flow {
    let first = interp.next_value()?;
    while interp.has_next() {
        let other = interp.next_value()?;
        if !accept(other.compare(&first)) {
            interp.frames.assume(Value::Boolean(false));
            return Ok(());
        }
    }
    interp.frames.assume(Value::Boolean(true));
    Ok(())
}

fn all_equal(interp: &mut Interpreter) -> Flow {
    compare_to_first(interp, |ord| ord == Some(Ordering::Equal))
}

fn none_equal(interp: &mut Interpreter) -> Flow {
    compare_to_first(interp, |ord| ord != Some(Ordering::Equal))
}

fn not(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(Value::Boolean(!value.to_boolean()));
    Ok(())
}

fn bool_(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(Value::Boolean(value.to_boolean()));
    Ok(())
}
