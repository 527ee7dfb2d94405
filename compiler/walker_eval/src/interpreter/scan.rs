//! Block scanning.
//!
//! `scan_block` copies literal bytes into the top frame until the current
//! sibling ends; a `{` recurses through `scan_nested`, which evaluates the
//! nested head and merges its result back. Siblings a head does not consume
//! are skipped without being evaluated.

use super::Interpreter;
use crate::errors::Flow;
use crate::source::{CLOSE, END, ESCAPE, NEXT, OPEN};

impl Interpreter {
    /// Scan the current sibling into the top frame.
    ///
    /// Stops at `;`, `}` or the end of text, leaving the cursor on it.
    pub(crate) fn scan_block(&mut self) -> Flow {
        walker_stack::ensure_sufficient_stack(|| self.scan_block_inner())
    }

    fn scan_block_inner(&mut self) -> Flow {
        loop {
            match self.peek() {
                END | NEXT | CLOSE => return Ok(()),
                OPEN => self.scan_nested()?,
                ESCAPE => {
                    self.bump();
                    let byte = self.peek();
                    if byte == END {
                        return Ok(());
                    }
                    self.frames.append_byte(byte);
                    self.bump();
                }
                byte => {
                    self.frames.append_byte(byte);
                    self.bump();
                }
            }
        }
    }

    /// Evaluate the block opening at the cursor and merge its result into
    /// the top frame. Leaves the cursor just past the block's `}`.
    pub(crate) fn scan_nested(&mut self) -> Flow {
        let start = self.cursor;
        self.bump();
        self.frames.push();
        let flow = match self.scan_block() {
            Ok(()) => self.evaluate_head(),
            Err(signal) => Err(signal),
        };
        if let Err(signal) = flow {
            self.frames.discard();
            self.cursor = start;
            self.skip_block();
            return Err(signal);
        }
        self.skip_rest();
        self.frames.collapse();
        if self.peek() != END {
            self.bump();
        }
        Ok(())
    }

    /// Clear the top frame and evaluate the next sibling into it.
    /// Nothing happens past the last sibling.
    pub(crate) fn scan_next(&mut self) -> Flow {
        self.frames.clear_top();
        if self.has_next() {
            self.bump();
            self.scan_block()?;
        }
        Ok(())
    }

    /// Step over the next sibling without evaluating it.
    pub(crate) fn skip_next(&mut self) {
        if self.has_next() {
            self.bump();
            self.walk_sibling(false);
        }
    }

    /// Skip every remaining sibling of the current block.
    pub(crate) fn skip_rest(&mut self) {
        while self.has_next() {
            self.skip_next();
        }
    }

    /// Replace the top frame with the literal text of the next sibling.
    /// Escapes are resolved; nothing is evaluated.
    pub(crate) fn pure_next(&mut self) {
        self.frames.clear_top();
        if self.has_next() {
            self.bump();
            self.walk_sibling(true);
        }
    }

    /// Walk to the end of the current sibling, tracking nesting, optionally
    /// copying what is walked over.
    fn walk_sibling(&mut self, keep: bool) {
        let mut depth = 1usize;
        loop {
            match self.peek() {
                END => return,
                CLOSE => depth -= 1,
                NEXT if depth == 1 => depth = 0,
                OPEN => depth += 1,
                ESCAPE => {
                    self.bump();
                    if self.peek() == END {
                        return;
                    }
                }
                _ => {}
            }
            if depth == 0 {
                return;
            }
            if keep {
                self.frames.append_byte(self.peek());
            }
            self.bump();
        }
    }

    /// With the cursor on a `{`, move just past its matching `}`.
    fn skip_block(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.peek() {
                END => return,
                OPEN => depth += 1,
                CLOSE => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.bump();
                        return;
                    }
                }
                ESCAPE => {
                    self.bump();
                    if self.peek() == END {
                        return;
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }
}
