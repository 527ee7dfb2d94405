//! Array methods.

use crate::errors::{Flow, Signal};
use crate::interpreter::{Interpreter, Place};
use crate::scope::PrimitiveMethod;
use crate::value::{List, Value};

pub(super) const METHODS: &[(&str, PrimitiveMethod)] = &[
    ("clear", clear),
    ("append", append),
    ("insert", insert),
    ("pop", pop),
    ("remove", remove),
    ("indexof", indexof),
    ("length", length),
];

fn list_mut<'a>(interp: &'a mut Interpreter, place: &Place) -> Option<&'a mut List> {
    match interp.resolve_place(place)? {
        Value::Array(list) => Some(list),
        _ => None,
    }
}

/// Turn a non-array receiver into an array holding it. `None` becomes an
/// empty array.
fn make_array(interp: &mut Interpreter, place: &Place) {
    if let Some(slot) = interp.resolve_place(place) {
        if !matches!(slot, Value::Array(_)) {
            let previous = std::mem::take(slot);
            *slot = if previous.is_none() {
                Value::array([])
            } else {
                Value::array([previous])
            };
        }
    }
}

/// Replace the receiver with an empty array.
fn clear(interp: &mut Interpreter, place: &Place) -> Flow {
    if let Some(slot) = interp.resolve_place(place) {
        *slot = Value::array([]);
    }
    Ok(())
}

/// Append every sibling.
fn append(interp: &mut Interpreter, place: &Place) -> Flow {
    make_array(interp, place);
    while interp.has_next() {
        let value = interp.next_value()?;
        if let Some(list) = list_mut(interp, place) {
            list.push(value);
        }
    }
    Ok(())
}

/// `{a;insert;I;VALUE}`. Ignored past the end.
fn insert(interp: &mut Interpreter, place: &Place) -> Flow {
    let Some(index) = interp.next_value()?.parse_unsigned() else {
        return Ok(());
    };
    make_array(interp, place);
    let value = interp.next_value()?;
    if let (Some(list), Ok(index)) = (list_mut(interp, place), usize::try_from(index)) {
        list.insert(index, value);
    }
    Ok(())
}

/// Index named by the next sibling, if the receiver is an array.
fn next_index(interp: &mut Interpreter, place: &Place) -> Result<Option<usize>, Signal> {
    if list_mut(interp, place).is_none() {
        return Ok(None);
    }
    let index = interp.next_value()?.parse_unsigned();
    Ok(index.and_then(|i| usize::try_from(i).ok()))
}

/// Remove and yield the element at an index.
fn pop(interp: &mut Interpreter, place: &Place) -> Flow {
    let Some(index) = next_index(interp, place)? else {
        return Ok(());
    };
    if let Some(removed) = list_mut(interp, place).and_then(|list| list.remove(index)) {
        interp.frames.assume(removed);
    }
    Ok(())
}

/// Remove the element at an index. Yields `None`.
fn remove(interp: &mut Interpreter, place: &Place) -> Flow {
    if let Some(index) = next_index(interp, place)? {
        if let Some(list) = list_mut(interp, place) {
            list.remove(index);
        }
    }
    Ok(())
}

/// Index of the first element whose text equals the next sibling's, or -1.
fn indexof(interp: &mut Interpreter, place: &Place) -> Flow {
    let mut found = -1;
    if list_mut(interp, place).is_some() {
        let needle = interp.next_text()?;
        if let Some(list) = list_mut(interp, place) {
            if let Some(i) = list
                .iter()
                .position(|item| item.clone().into_text() == needle)
            {
                found = i as i64;
            }
        }
    }
    interp.frames.assume(Value::Integer(found));
    Ok(())
}

/// Element count. Non-arrays have length 0.
fn length(interp: &mut Interpreter, place: &Place) -> Flow {
    let len = list_mut(interp, place).map_or(0, |list| list.len());
    interp.frames.assume(Value::UInteger(len as u64));
    Ok(())
}
