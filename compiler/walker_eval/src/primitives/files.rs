//! File handles.
//!
//! A handle is just a path. Each file method reopens the file, so handles
//! copy freely and never hold an OS descriptor.

use std::fs::OpenOptions;

use tracing::warn;

use crate::errors::Flow;
use crate::interpreter::Interpreter;
use crate::scope::Primitive;
use crate::value::{FileHandle, Value};

pub(super) const PRIMITIVES: &[(&str, Primitive)] = &[
    ("new file", new_file),
    ("open file", open_file),
    ("open binary", open_binary),
    ("rename", rename),
];

/// Create or truncate a file and return a text handle to it.
fn new_file(interp: &mut Interpreter) -> Flow {
    let path = interp.next_text()?;
    match std::fs::File::create(path.to_string_lossy()) {
        Ok(_) => interp.frames.assume(Value::FileText(FileHandle { path })),
        Err(error) => warn!(path = %path, %error, "cannot create file"),
    }
    Ok(())
}

/// Open (creating if missing) a file by path.
fn open_handle(interp: &mut Interpreter, binary: bool) -> Flow {
    let path = interp.next_text()?;
    let opened = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.to_string_lossy());
    match opened {
        Ok(_) => {
            let handle = FileHandle { path };
            interp.frames.assume(if binary {
                Value::FileBinary(handle)
            } else {
                Value::FileText(handle)
            });
        }
        Err(error) => warn!(path = %path, %error, "cannot open file"),
    }
    Ok(())
}

fn open_file(interp: &mut Interpreter) -> Flow {
    open_handle(interp, false)
}

fn open_binary(interp: &mut Interpreter) -> Flow {
    open_handle(interp, true)
}

/// `{rename;OLD;NEW}`. Yields `None`; failures are only logged.
fn rename(interp: &mut Interpreter) -> Flow {
    let from = interp.next_text()?;
    let to = interp.next_text()?;
    if let Err(error) = std::fs::rename(from.to_string_lossy(), to.to_string_lossy()) {
        warn!(from = %from, to = %to, %error, "rename failed");
    }
    Ok(())
}
