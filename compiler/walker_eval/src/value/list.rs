//! Owned arrays.

use super::Value;

/// Smallest capacity a non-empty array is grown to, and the floor it is
/// never shrunk below.
const MIN_CAPACITY: usize = 8;

/// Growable array of exclusively owned values.
///
/// Capacity doubles on growth and halves when fewer than a quarter of the
/// slots are in use.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub const fn new() -> Self {
        List { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    fn grow(&mut self) {
        let cap = self.items.capacity();
        if self.items.len() < cap {
            return;
        }
        let target = if cap == 0 { MIN_CAPACITY } else { cap * 2 };
        self.items.reserve_exact(target - self.items.len());
    }

    fn shrink(&mut self) {
        if self.items.is_empty() {
            self.items = Vec::new();
            return;
        }
        let cap = self.items.capacity();
        if self.items.len() < cap / 4 && cap / 2 >= MIN_CAPACITY {
            self.items.shrink_to(cap / 2);
        }
    }

    pub fn push(&mut self, value: Value) {
        self.grow();
        self.items.push(value);
    }

    /// Insert before `index`. An index past the end drops `value` and
    /// returns `false`.
    pub fn insert(&mut self, index: usize, value: Value) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.grow();
        self.items.insert(index, value);
        true
    }

    /// Remove and return the element at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.items.len() {
            return None;
        }
        let value = self.items.remove(index);
        self.shrink();
        Some(value)
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = List::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
