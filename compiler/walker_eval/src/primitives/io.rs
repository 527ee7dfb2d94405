//! Console input and output.

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("print", print),
    ("println", println),
    ("scan", scan),
    ("scanln", scanln),
    ("scanc", scanc),
];

/// Print every sibling. Yields `None`.
fn print(interp: &mut Interpreter) -> Flow {
    while interp.has_next() {
        let text = interp.next_text()?;
        interp.print_handler.print(text.as_bytes());
    }
    Ok(())
}

/// Print every sibling, each followed by a newline. Yields `None`.
fn println(interp: &mut Interpreter) -> Flow {
    while interp.has_next() {
        let text = interp.next_text()?;
        interp.print_handler.println(text.as_bytes());
    }
    Ok(())
}

/// Read input until a byte matching `stop`, which is consumed.
fn read_until(interp: &mut Interpreter, stop: fn(u8) -> bool) {
    interp.print_handler.flush();
    interp.frames.clear_top();
    while let Some(byte) = interp.input.read_byte() {
        if stop(byte) {
            break;
        }
        interp.frames.append_byte(byte);
    }
}

/// One whitespace-delimited word.
fn scan(interp: &mut Interpreter) -> Flow {
    read_until(interp, |b| matches!(b, b' ' | b'\t' | b'\n'));
    Ok(())
}

/// One line, without its newline.
fn scanln(interp: &mut Interpreter) -> Flow {
    read_until(interp, |b| b == b'\n');
    Ok(())
}

/// One byte, or `None` at end of input.
fn scanc(interp: &mut Interpreter) -> Flow {
    interp.frames.clear_top();
    if let Some(byte) = interp.input.read_byte() {
        interp.frames.append_byte(byte);
    }
    Ok(())
}
