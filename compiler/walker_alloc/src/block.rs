//! Block handles.

use std::fmt;

/// Where a block's storage lives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Home {
    /// Slot in the size-class bucket at this index of [`SIZE_CLASSES`](crate::SIZE_CLASSES).
    Bucket(u8),
    /// General-heap slot.
    Heap,
}

/// Handle to a live allocation in a [`Pool`](crate::Pool).
///
/// Handles are `Copy` and carry no borrow: validity is checked against the
/// slot generation on every access.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Block {
    pub(crate) home: Home,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Block {
    #[inline]
    pub(crate) const fn new(home: Home, index: u32, generation: u32) -> Self {
        Self {
            home,
            index,
            generation,
        }
    }

    /// Storage this block was served from.
    #[inline]
    pub const fn home(self) -> Home {
        self.home
    }

    /// Slot index within its home.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns `true` if the block came from a fixed bucket.
    #[inline]
    pub const fn is_pooled(self) -> bool {
        matches!(self.home, Home::Bucket(_))
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.home {
            Home::Bucket(class) => write!(
                f,
                "Block(b{}:{}#{})",
                crate::SIZE_CLASSES[class as usize].size,
                self.index,
                self.generation
            ),
            Home::Heap => write!(f, "Block(heap:{}#{})", self.index, self.generation),
        }
    }
}
