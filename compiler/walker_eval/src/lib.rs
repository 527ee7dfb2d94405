//! Walker Eval - runtime for the Walker language.
//!
//! Walker programs are brace-delimited prefix forms, `{+;1;2}`, scanned and
//! evaluated in a single pass with no intermediate tree.
//!
//! # Architecture
//!
//! - `Sources`: program texts in the block pool, addressed by code pointers
//! - `Value`: the dynamically typed value model
//! - `ScopeStack`: bindings, methods and loaded libraries per scope level
//! - `FrameStack`: per-block partial results, merged on block close
//! - `Interpreter`: the cursor-driven scanner/evaluator that ties them
//!   together, plus the primitive and method catalogues
//!
//! # Usage
//!
//! ```text
//! let mut interp = Interpreter::builder()
//!     .print_handler(buffer_handler())
//!     .build();
//! let value = interp.eval("{+;1;{+;2;3}}")?;   // Number(6.0)
//! ```

pub mod errors;
mod frame;
mod input_handler;
pub mod interpreter;
mod loader;
mod methods;
mod primitives;
mod print_handler;
pub mod scope;
pub mod source;
pub mod value;

pub use errors::{Flow, RunError, Signal};
pub use frame::FrameStack;
pub use input_handler::{
    buffer_input, empty_input, stdin_handler, InputHandlerImpl, SharedInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, Place};
pub use loader::{FsLoader, MemoryLoader, SourceLoader};
pub use primitives::names as primitive_names;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{CodeKind, CodeRef, FileHandle, List, Text, Value};
