//! File handle methods. Writes append.

use std::fs::OpenOptions;
use std::io::Write;

use tracing::warn;

use crate::errors::Flow;
use crate::interpreter::{Interpreter, Place};
use crate::scope::PrimitiveMethod;
use crate::value::Value;

pub(super) const METHODS: &[(&str, PrimitiveMethod)] = &[
    ("read", read),
    ("write", write),
    ("writeln", writeln),
    ("truncate", truncate),
];

fn file_path(interp: &mut Interpreter, place: &Place) -> Option<String> {
    match interp.resolve_place(place)? {
        Value::FileText(file) | Value::FileBinary(file) => Some(file.path.to_string_lossy()),
        _ => None,
    }
}

/// Whole contents of the file as text.
fn read(interp: &mut Interpreter, place: &Place) -> Flow {
    let Some(path) = file_path(interp, place) else {
        return Ok(());
    };
    match std::fs::read(&path) {
        Ok(bytes) => interp.frames.assume(Value::string(bytes)),
        Err(error) => warn!(%path, %error, "file read failed"),
    }
    Ok(())
}

fn append_siblings(interp: &mut Interpreter, place: &Place, newline: bool) -> Flow {
    let Some(path) = file_path(interp, place) else {
        return Ok(());
    };
    let mut out = Vec::new();
    while interp.has_next() {
        out.extend_from_slice(interp.next_text()?.as_bytes());
        if newline {
            out.push(b'\n');
        }
    }
    let written = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .and_then(|mut file| file.write_all(&out));
    if let Err(error) = written {
        warn!(%path, %error, "file write failed");
    }
    Ok(())
}

/// Append every sibling's text.
fn write(interp: &mut Interpreter, place: &Place) -> Flow {
    append_siblings(interp, place, false)
}

/// Append every sibling's text, each followed by a newline.
fn writeln(interp: &mut Interpreter, place: &Place) -> Flow {
    append_siblings(interp, place, true)
}

/// Empty the file.
fn truncate(interp: &mut Interpreter, place: &Place) -> Flow {
    let Some(path) = file_path(interp, place) else {
        return Ok(());
    };
    if let Err(error) = std::fs::File::create(&path) {
        warn!(%path, %error, "file truncate failed");
    }
    Ok(())
}
