//! Text primitives and the structural literals.

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::source::{CLOSE, NEXT, OPEN};
use crate::value::{Text, Value};

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("copy", copy),
    ("length", length),
    ("letter", letter),
    ("newline", newline),
    ("open", open),
    ("next", next),
    ("close", close),
    ("pure", pure),
];

/// `{copy;N;TEXT}`: TEXT repeated N times.
fn copy(interp: &mut Interpreter) -> Flow {
    let count = interp.next_value()?.to_unsigned();
    let text = interp.next_text()?;
    let mut repeated = Text::new();
    for _ in 0..count {
        repeated.append(&text);
    }
    interp.frames.assume(Value::String(repeated));
    Ok(())
}

/// Byte length of the next sibling's text.
fn length(interp: &mut Interpreter) -> Flow {
    let len = interp.next_text()?.len();
    interp.frames.assume(Value::UInteger(len as u64));
    Ok(())
}

/// `{letter;I;TEXT}`: the byte at index I, or `None` out of range.
fn letter(interp: &mut Interpreter) -> Flow {
    let Some(index) = interp.next_value()?.parse_unsigned() else {
        return Ok(());
    };
    let text = interp.next_text()?;
    if let Some(&byte) = usize::try_from(index)
        .ok()
        .and_then(|i| text.as_bytes().get(i))
    {
        interp.frames.assume(Value::string(Text::from_bytes(&[byte])));
    }
    Ok(())
}

fn literal(interp: &mut Interpreter, byte: u8) -> Flow {
    interp.frames.assume(Value::string(Text::from_bytes(&[byte])));
    Ok(())
}

fn newline(interp: &mut Interpreter) -> Flow {
    literal(interp, b'\n')
}

fn open(interp: &mut Interpreter) -> Flow {
    literal(interp, OPEN)
}

fn next(interp: &mut Interpreter) -> Flow {
    literal(interp, NEXT)
}

fn close(interp: &mut Interpreter) -> Flow {
    literal(interp, CLOSE)
}

/// The next sibling's text, unevaluated.
fn pure(interp: &mut Interpreter) -> Flow {
    interp.pure_next();
    Ok(())
}
