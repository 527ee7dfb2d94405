//! Program text storage and code pointers.
//!
//! Every piece of text the interpreter executes (the program itself,
//! included files, strings run through `w`) is copied into the block pool
//! with a trailing `0` byte. A [`CodePtr`] is a pool handle plus an offset,
//! so function values can point into text without owning it. Once a text
//! is released its handle goes stale, and reads through it yield the end
//! byte instead of someone else's bytes.

use std::fmt;

use walker_alloc::{Block, Pool, PoolStats};

/// Block opener.
pub const OPEN: u8 = b'{';
/// Sibling separator.
pub const NEXT: u8 = b';';
/// Block closer.
pub const CLOSE: u8 = b'}';
/// Makes the following byte literal.
pub const ESCAPE: u8 = b'\\';
/// End of text. Also returned for any read past the end or through a stale handle.
pub const END: u8 = 0;

/// Handle to a loaded text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourceId(Block);

impl fmt::Debug for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceId({:?})", self.0)
    }
}

/// A position in a loaded text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CodePtr {
    pub source: SourceId,
    pub offset: u32,
}

impl CodePtr {
    /// First byte of `source`.
    #[inline]
    pub const fn start(source: SourceId) -> Self {
        CodePtr { source, offset: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn advanced(self, by: u32) -> Self {
        CodePtr {
            source: self.source,
            offset: self.offset.saturating_add(by),
        }
    }
}

/// Pool-backed store of program texts.
pub struct Sources {
    pool: Pool,
}

impl Sources {
    pub fn new() -> Self {
        Sources { pool: Pool::new() }
    }

    /// Copy `text` into the pool, terminated by [`END`].
    pub fn load(&mut self, text: &[u8]) -> SourceId {
        let mut terminated = Vec::with_capacity(text.len() + 1);
        terminated.extend_from_slice(text);
        terminated.push(END);
        SourceId(self.pool.store(&terminated))
    }

    /// Release a text. Code pointers into it become stale.
    pub fn release(&mut self, id: SourceId) {
        self.pool.free(id.0);
    }

    pub fn is_live(&self, id: SourceId) -> bool {
        self.pool.is_live(id.0)
    }

    /// Byte at `at`, or [`END`] past the end or for a released text.
    #[inline]
    pub fn byte(&self, at: CodePtr) -> u8 {
        self.pool
            .get(at.source.0)
            .and_then(|bytes| bytes.get(at.offset as usize).copied())
            .unwrap_or(END)
    }

    /// Full text of `id` up to its first [`END`] byte; empty if released.
    pub fn text(&self, id: SourceId) -> &[u8] {
        let bytes = self.pool.get(id.0).unwrap_or_default();
        let len = bytes.iter().position(|&b| b == END).unwrap_or(bytes.len());
        &bytes[..len]
    }

    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

impl Default for Sources {
    fn default() -> Self {
        Self::new()
    }
}
