//! Time and randomness.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::value::Value;

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("timer", timer),
    ("reset timer", reset_timer),
    ("timestamp", timestamp),
    ("rand", random),
];

/// Seconds since the interpreter started or the timer was last reset.
fn timer(interp: &mut Interpreter) -> Flow {
    let elapsed = interp.timer.elapsed().as_secs_f64();
    interp.frames.assume(Value::Number(elapsed));
    Ok(())
}

fn reset_timer(interp: &mut Interpreter) -> Flow {
    interp.timer = Instant::now();
    interp.frames.clear_top();
    Ok(())
}

/// Whole seconds since the Unix epoch.
fn timestamp(interp: &mut Interpreter) -> Flow {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    interp.frames.assume(Value::UInteger(seconds));
    Ok(())
}

/// A pseudo-random number in `0..2^31`.
fn random(interp: &mut Interpreter) -> Flow {
    let value = interp.rng.gen_range(0..1u64 << 31);
    interp.frames.assume(Value::UInteger(value));
    Ok(())
}
