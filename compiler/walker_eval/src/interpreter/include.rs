//! Running text that is not part of the current program: included
//! libraries and strings evaluated by `w`.

use tracing::{debug, warn};

use super::Interpreter;
use crate::errors::{absorb_return, Flow};
use crate::source::CodePtr;
use crate::value::Text;

impl Interpreter {
    /// Load library `name` and run it in the current scope level, so its
    /// definitions stay visible to the includer.
    ///
    /// A library already recorded in a visible level is not run again. A
    /// library that cannot be loaded is skipped.
    pub(crate) fn include(&mut self, name: &Text) -> Flow {
        if self.scopes.find_library(name.as_bytes()).is_some() {
            debug!(library = %name, "already included");
            return Ok(());
        }
        let Some(text) = self.loader.load(&name.to_string_lossy()) else {
            warn!(library = %name, "cannot load library");
            return Ok(());
        };
        debug!(library = %name, bytes = text.len(), "including library");
        let id = self.sources.load(&text);
        self.scopes
            .record_library(name.as_bytes(), id, &mut self.sources);

        let resume = std::mem::replace(&mut self.cursor, CodePtr::start(id));
        let flow = self.scan_block();
        self.cursor = resume;
        flow
    }

    /// Run `code` as a program of its own in a fresh scope level. The text
    /// is released when the level is popped.
    pub(crate) fn run_text(&mut self, code: &Text, has_args: bool) -> Flow {
        if has_args {
            self.bind_args()?;
        }
        let id = self.sources.load(code.as_bytes());
        self.scopes.push_scope();
        self.scopes.own_source(id);
        let resume = std::mem::replace(&mut self.cursor, CodePtr::start(id));

        let flow = self.scan_block();

        self.cursor = resume;
        self.scopes.pop_scope(&mut self.sources);
        if has_args {
            self.unbind_args();
        }
        absorb_return(flow)
    }
}
