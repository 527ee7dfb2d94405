//! Arithmetic. Every result is a `Number`.

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::value::Value;

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("+", add),
    ("-", sub),
    ("*", mul),
    ("/", div),
    ("%", rem),
    ("mod", rem),
    ("**", pow),
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("sqrt", sqrt),
    ("abs", abs),
    ("floor", floor),
    ("ceil", ceil),
    ("round", round),
];

/// Left fold over the siblings, starting from the first one.
fn fold(interp: &mut Interpreter, op: fn(f64, f64) -> f64) -> Flow {
    let mut acc = interp.next_value()?.to_number();
    while interp.has_next() {
        acc = op(acc, interp.next_value()?.to_number());
    }
    interp.frames.assume(Value::Number(acc));
    Ok(())
}

fn unary(interp: &mut Interpreter, op: fn(f64) -> f64) -> Flow {
    let n = interp.next_value()?.to_number();
    interp.frames.assume(Value::Number(op(n)));
    Ok(())
}

/// Sum of every sibling; `{+}` is 0.
fn add(interp: &mut Interpreter) -> Flow {
    let mut sum = 0.0;
    while interp.has_next() {
        sum += interp.next_value()?.to_number();
    }
    interp.frames.assume(Value::Number(sum));
    Ok(())
}

fn sub(interp: &mut Interpreter) -> Flow {
    fold(interp, |a, b| a - b)
}

fn mul(interp: &mut Interpreter) -> Flow {
    fold(interp, |a, b| a * b)
}

fn div(interp: &mut Interpreter) -> Flow {
    fold(interp, |a, b| a / b)
}

fn rem(interp: &mut Interpreter) -> Flow {
    fold(interp, |a, b| a % b)
}

fn pow(interp: &mut Interpreter) -> Flow {
    fold(interp, f64::powf)
}

fn sin(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::sin)
}

fn cos(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::cos)
}

fn tan(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::tan)
}

fn sqrt(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::sqrt)
}

fn abs(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::abs)
}

fn floor(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::floor)
}

fn ceil(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::ceil)
}

fn round(interp: &mut Interpreter) -> Flow {
    unary(interp, f64::round)
}
