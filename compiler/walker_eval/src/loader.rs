//! Where `include` finds library text.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::trace;

/// Resolves a library name to its text.
pub trait SourceLoader {
    /// Text of `name`, or `None` if it cannot be read.
    fn load(&self, name: &str) -> Option<Vec<u8>>;
}

/// Reads libraries from the filesystem, relative to `root`.
///
/// One trailing newline is dropped so editors that add one don't leave a
/// stray byte in the including program's output.
#[derive(Clone, Debug, Default)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsLoader { root: root.into() }
    }
}

impl SourceLoader for FsLoader {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.root.join(name);
        trace!(path = %path.display(), "loading library");
        let mut bytes = std::fs::read(&path).ok()?;
        strip_trailing_newline(&mut bytes);
        Some(bytes)
    }
}

/// In-memory libraries, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: FxHashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, text: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.to_owned(), text.into());
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.files.get(name).cloned()
    }
}

pub(crate) fn strip_trailing_newline(bytes: &mut Vec<u8>) {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
}
