//! Kind inspection and conversion.

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::value::Value;

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("type", type_),
    ("num", num),
    ("f64", num),
    ("int", int),
    ("i64", int),
    ("uint", uint),
    ("u64", uint),
    ("string", string),
];

fn type_(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(Value::string(value.kind_name()));
    Ok(())
}

fn num(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(Value::Number(value.to_number()));
    Ok(())
}

fn int(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(Value::Integer(value.to_integer()));
    Ok(())
}

fn uint(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(Value::UInteger(value.to_unsigned()));
    Ok(())
}

fn string(interp: &mut Interpreter) -> Flow {
    interp.scan_next()?;
    interp.frames.top_mut().stringify();
    Ok(())
}
