//! Definitions, code values, receivers and evaluation of other text.

use crate::errors::Flow;
use crate::interpreter::{Interpreter, Place};
use crate::scope::{Binding, Method, Primitive};
use crate::value::{CodeKind, CodeRef, List, Value};

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("let", let_),
    ("arr", arr),
    ("fun", fun),
    ("def", def),
    ("mac", mac),
    ("f", f),
    ("x", x),
    ("m", m),
    ("met", met),
    ("token", token),
    ("quine", quine),
    ("ex", ex),
    ("include", include),
    ("w", w),
    ("self", self_),
    ("args", args),
    ("$", literal_receiver),
];

/// `{let;NAME;VALUE}`.
fn let_(interp: &mut Interpreter) -> Flow {
    let name = interp.next_text()?;
    let value = interp.next_value()?;
    interp
        .scopes
        .declare(name.as_bytes(), Binding::Variable(value));
    Ok(())
}

/// An array of every sibling's value.
fn arr(interp: &mut Interpreter) -> Flow {
    let mut items = List::new();
    while interp.has_next() {
        items.push(interp.next_value()?);
    }
    interp.frames.assume(Value::Array(items));
    Ok(())
}

/// `{fun;NAME;BODY}` and friends. The body is not evaluated; the binding
/// points at it.
fn define(interp: &mut Interpreter, kind: CodeKind) -> Flow {
    let name = interp.next_text()?;
    if !interp.has_next() {
        return Ok(());
    }
    let code = CodeRef::new(kind, interp.cursor);
    interp
        .scopes
        .declare(name.as_bytes(), Binding::from_code(code));
    Ok(())
}

fn fun(interp: &mut Interpreter) -> Flow {
    define(interp, CodeKind::Function)
}

fn def(interp: &mut Interpreter) -> Flow {
    define(interp, CodeKind::Expression)
}

fn mac(interp: &mut Interpreter) -> Flow {
    define(interp, CodeKind::Macro)
}

/// An anonymous code value for the next sibling, or `None` if there is none.
fn anonymous(interp: &mut Interpreter, kind: CodeKind) -> Flow {
    if interp.has_next() {
        let code = CodeRef::new(kind, interp.cursor);
        interp.frames.assume(Value::from_code(code));
    } else {
        interp.frames.clear_top();
    }
    Ok(())
}

fn f(interp: &mut Interpreter) -> Flow {
    anonymous(interp, CodeKind::Function)
}

fn x(interp: &mut Interpreter) -> Flow {
    anonymous(interp, CodeKind::Expression)
}

fn m(interp: &mut Interpreter) -> Flow {
    anonymous(interp, CodeKind::Macro)
}

/// `{met;NAME;BODY}`: a user method, run with the receiver as `self`.
fn met(interp: &mut Interpreter) -> Flow {
    let name = interp.next_text()?;
    if !interp.has_next() {
        return Ok(());
    }
    let entry = interp.cursor;
    interp
        .scopes
        .declare_method(name.as_bytes(), Method::User(entry));
    Ok(())
}

/// What a name is bound to.
fn token(interp: &mut Interpreter) -> Flow {
    let name = interp.next_text()?;
    let kind = interp
        .scopes
        .lookup(name.as_bytes())
        .map_or("undefined", Binding::kind_name);
    interp.frames.assume(Value::string(kind));
    Ok(())
}

/// Text of the program currently executing.
fn quine(interp: &mut Interpreter) -> Flow {
    let text = interp.sources.text(interp.cursor.source).to_vec();
    interp.frames.assume(Value::string(text));
    Ok(())
}

fn ex(interp: &mut Interpreter) -> Flow {
    interp.expr_next()
}

fn include(interp: &mut Interpreter) -> Flow {
    let name = interp.next_text()?;
    interp.include(&name)
}

/// `{w;CODE;ARGS…}`: run CODE as a program in a fresh scope level.
fn w(interp: &mut Interpreter) -> Flow {
    let code = interp.next_text()?;
    let has_args = interp.has_next();
    interp.run_text(&code, has_args)
}

/// Dispatch on the current receiver.
fn self_(interp: &mut Interpreter) -> Flow {
    match interp.receiver.clone() {
        Some(place) => interp.dispatch_receiver(place),
        None => {
            interp.frames.clear_top();
            Ok(())
        }
    }
}

/// Dispatch on the current args array.
fn args(interp: &mut Interpreter) -> Flow {
    match interp.args.len().checked_sub(1) {
        Some(slot) => interp.dispatch_receiver(Place::args(slot)),
        None => {
            interp.frames.clear_top();
            Ok(())
        }
    }
}

/// `{$;VALUE;SELECTOR…}`: dispatch on a literal value.
fn literal_receiver(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.dispatch_temp(value)
}
