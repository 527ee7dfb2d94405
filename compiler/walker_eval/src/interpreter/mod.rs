//! The Walker interpreter.
//!
//! Scanning and evaluation are one pass over program text: a cursor walks
//! the bytes, literal bytes accumulate in the top frame, and every `{`
//! opens a frame whose head is evaluated when its first sibling ends.
//!
//! # Architecture
//!
//! - [`scan`]: the block scanner and sibling skipping
//! - [`dispatch`]: head evaluation, calls, receivers
//! - [`binder`]: argument binding for calls
//! - [`expr`]: the infix expression evaluator
//! - [`include`]: `include` and `w`
//! - [`place`]: receiver addressing for methods
//!
//! Every evaluation step returns a [`Flow`]. The value a step produces is
//! written into the top frame, never returned.

mod binder;
mod builder;
mod dispatch;
mod expr;
mod include;
mod place;
mod scan;

pub use builder::InterpreterBuilder;
pub use place::{Place, Root};

use std::path::Path;
use std::time::Instant;

use rand::rngs::SmallRng;
use tracing::debug;

use crate::errors::{Flow, RunError, Signal};
use crate::frame::FrameStack;
use crate::input_handler::SharedInputHandler;
use crate::loader::{strip_trailing_newline, SourceLoader};
use crate::print_handler::SharedPrintHandler;
use crate::scope::ScopeStack;
use crate::source::{CodePtr, Sources, END};
use crate::value::Value;

/// One independent Walker runtime.
///
/// Owns every stack the language needs; two interpreters share nothing.
pub struct Interpreter {
    pub(crate) sources: Sources,
    pub(crate) scopes: ScopeStack,
    pub(crate) frames: FrameStack,
    /// Current read position.
    pub(crate) cursor: CodePtr,
    /// Bound argument arrays; the last entry is the current `args`.
    pub(crate) args: Vec<Value>,
    /// Receivers that live nowhere else (array heads, `$` literals).
    pub(crate) temps: Vec<Value>,
    /// Current `self`.
    pub(crate) receiver: Option<Place>,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input: SharedInputHandler,
    pub(crate) loader: Box<dyn SourceLoader>,
    pub(crate) timer: Instant,
    pub(crate) rng: SmallRng,
}

impl Interpreter {
    /// Create an interpreter with stdout output, stdin input and the
    /// filesystem loader.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Evaluate program text and return its result.
    pub fn eval(&mut self, program: &str) -> Result<Value, RunError> {
        self.eval_bytes(program.as_bytes())
    }

    /// Evaluate program bytes and return its result.
    ///
    /// The text is owned by the outermost scope level, so functions it
    /// defines stay callable from later runs on the same interpreter.
    pub fn eval_bytes(&mut self, program: &[u8]) -> Result<Value, RunError> {
        let id = self.sources.load(program);
        self.scopes.own_source(id);
        self.frames.reset();
        self.cursor = CodePtr::start(id);
        debug!(bytes = program.len(), "running program");
        let flow = self.scan_block();
        self.print_handler.flush();
        let result = self.frames.take();
        self.frames.reset();
        match flow {
            Ok(()) | Err(Signal::Return) => Ok(result),
            Err(Signal::Error) => Err(RunError::Uncaught(result.into_text().to_string_lossy())),
        }
    }

    /// Read and evaluate a program file. One trailing newline is ignored.
    pub fn eval_file(&mut self, path: &Path) -> Result<Value, RunError> {
        let mut program = std::fs::read(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        strip_trailing_newline(&mut program);
        self.eval_bytes(&program)
    }

    /// Captured output of a buffer print handler.
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.sources.byte(self.cursor)
    }

    #[inline]
    pub(crate) fn peek_at(&self, ahead: u32) -> u8 {
        self.sources.byte(self.cursor.advanced(ahead))
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.cursor = self.cursor.advanced(1);
    }

    /// Whether the block at the cursor has another sibling.
    #[inline]
    pub(crate) fn has_next(&self) -> bool {
        !matches!(self.peek(), crate::source::CLOSE | END)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
