//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::Interpreter;
use crate::frame::FrameStack;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::loader::{FsLoader, SourceLoader};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::scope::ScopeStack;
use crate::source::{CodePtr, Sources};
use crate::value::Value;
use crate::{methods, primitives};

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: stdout output, stdin input, libraries read from the working
/// directory, no top-level args, an entropy-seeded `rand`.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input: Option<SharedInputHandler>,
    loader: Option<Box<dyn SourceLoader>>,
    args: Vec<String>,
    seed: Option<u64>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            input: None,
            loader: None,
            args: Vec::new(),
            seed: None,
        }
    }

    /// Set where `print` and friends write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `scan` and friends read.
    #[must_use]
    pub fn input(mut self, input: SharedInputHandler) -> Self {
        self.input = Some(input);
        self
    }

    /// Set how `include` finds libraries.
    #[must_use]
    pub fn loader(mut self, loader: impl SourceLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Pre-bind the top-level `args` array. An empty list binds nothing.
    #[must_use]
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Fix the seed behind `rand`.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the interpreter with primitives and primitive methods
    /// registered.
    pub fn build(self) -> Interpreter {
        let mut sources = Sources::new();
        let mut scopes = ScopeStack::new();
        let idle = sources.load(b"");
        scopes.own_source(idle);
        primitives::register(&mut scopes);
        methods::register(&mut scopes);

        let args = if self.args.is_empty() {
            Vec::new()
        } else {
            vec![Value::array(self.args.into_iter().map(Value::string))]
        };

        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Interpreter {
            sources,
            scopes,
            frames: FrameStack::new(),
            cursor: CodePtr::start(idle),
            args,
            temps: Vec::new(),
            receiver: None,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input.unwrap_or_else(stdin_handler),
            loader: self
                .loader
                .unwrap_or_else(|| Box::new(FsLoader::new("."))),
            timer: Instant::now(),
            rng,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
