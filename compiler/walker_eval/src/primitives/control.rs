//! Branching, loops and signals.

use crate::errors::{Flow, Signal};
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::value::Value;

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("if", if_),
    ("repeat", repeat),
    ("while", while_),
    ("do-while", do_while),
    ("return", return_),
    ("throw", throw),
    ("error", error),
    ("try", try_),
    ("#", comment),
];

/// `{if;COND;THEN;ELSE}`. The condition is an expression.
fn if_(interp: &mut Interpreter) -> Flow {
    interp.expr_next()?;
    if !interp.frames.top().to_boolean() {
        interp.skip_next();
    }
    interp.scan_next()
}

/// `{repeat;N;BODY}`: the concatenated results of N evaluations.
fn repeat(interp: &mut Interpreter) -> Flow {
    interp.scan_next()?;
    let count = interp.frames.top().to_unsigned();
    interp.frames.clear_top();
    let body = interp.cursor;
    for _ in 0..count {
        interp.cursor = body;
        interp.accumulate_next()?;
    }
    Ok(())
}

/// `{while;COND;BODY}`.
fn while_(interp: &mut Interpreter) -> Flow {
    interp.frames.clear_top();
    let condition = interp.cursor;
    loop {
        interp.cursor = condition;
        if !interp.condition_holds()? {
            return Ok(());
        }
        interp.accumulate_next()?;
    }
}

/// `{do-while;BODY;COND}`: the body runs at least once.
fn do_while(interp: &mut Interpreter) -> Flow {
    interp.frames.clear_top();
    let body = interp.cursor;
    loop {
        interp.cursor = body;
        interp.accumulate_next()?;
        if !interp.condition_holds()? {
            return Ok(());
        }
    }
}

fn return_(interp: &mut Interpreter) -> Flow {
    interp.scan_next()?;
    Err(Signal::Return)
}

fn throw(interp: &mut Interpreter) -> Flow {
    error(interp)?;
    Err(Signal::Error)
}

/// Mark the next sibling's value as an error without throwing it.
fn error(interp: &mut Interpreter) -> Flow {
    let value = interp.next_value()?;
    interp.frames.assume(value.into_error());
    Ok(())
}

/// Evaluate the next sibling, catching a thrown error as its text.
fn try_(interp: &mut Interpreter) -> Flow {
    if let Err(Signal::Return) = interp.scan_next() {
        return Err(Signal::Return);
    }
    let caught = match interp.frames.take() {
        Value::Error(text) => Value::String(text),
        other => other,
    };
    interp.frames.assume(caught);
    Ok(())
}

fn comment(interp: &mut Interpreter) -> Flow {
    interp.frames.clear_top();
    Ok(())
}

impl Interpreter {
    /// Evaluate the next sibling in its own frame and merge the result
    /// into the top one.
    fn accumulate_next(&mut self) -> Flow {
        self.frames.push();
        if let Err(signal) = self.scan_next() {
            self.frames.discard();
            return Err(signal);
        }
        self.frames.collapse();
        Ok(())
    }

    /// Evaluate the next sibling as an expression without disturbing the
    /// top frame and report its truthiness.
    fn condition_holds(&mut self) -> Result<bool, Signal> {
        self.frames.push();
        if let Err(signal) = self.expr_next() {
            self.frames.discard();
            return Err(signal);
        }
        let holds = self.frames.take().to_boolean();
        self.frames.collapse();
        Ok(holds)
    }
}
