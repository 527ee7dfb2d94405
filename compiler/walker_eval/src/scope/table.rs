//! Name-sorted table with binary-search lookup.

/// Entries kept sorted by name bytes.
pub struct Table<T> {
    entries: Vec<(Box<[u8]>, T)>,
}

impl<T> Table<T> {
    pub const fn new() -> Self {
        Table {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Table {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn search(&self, name: &[u8]) -> Result<usize, usize> {
        self.entries.binary_search_by(|(key, _)| (**key).cmp(name))
    }

    pub fn get(&self, name: &[u8]) -> Option<&T> {
        self.search(name).ok().map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, name: &[u8]) -> Option<&mut T> {
        let i = self.search(name).ok()?;
        Some(&mut self.entries[i].1)
    }

    /// Insert or overwrite in place. Returns the previous entry.
    pub fn insert(&mut self, name: &[u8], value: T) -> Option<T> {
        match self.search(name) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            Err(i) => {
                self.entries.insert(i, (name.into(), value));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|(k, _)| &**k)
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
