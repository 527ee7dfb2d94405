//! Fixed-size slabs.

/// One size class: requests in `(lower, size]` bytes are served here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeClass {
    /// Smallest request this class rejects (exclusive lower bound).
    pub lower: usize,
    /// Block size, inclusive upper bound of the range.
    pub size: usize,
    /// Number of blocks in the slab.
    pub count: usize,
}

impl SizeClass {
    /// Returns `true` if a request of `n` bytes belongs to this class.
    #[inline]
    pub const fn fits(&self, n: usize) -> bool {
        n > self.lower && n <= self.size
    }
}

pub const SIZE_CLASSES: [SizeClass; 5] = [
    SizeClass { lower: 0, size: 16, count: 256 },
    SizeClass { lower: 16, size: 24, count: 256 },
    SizeClass { lower: 24, size: 32, count: 128 },
    SizeClass { lower: 32, size: 64, count: 64 },
    SizeClass { lower: 64, size: 128, count: 32 },
];

/// Index of the class whose range contains `n`, if any.
pub(crate) fn class_for(n: usize) -> Option<u8> {
    SIZE_CLASSES
        .iter()
        .position(|class| class.fits(n))
        .map(|i| i as u8)
}

/// Slab of `count` blocks of `size` bytes plus a free list.
pub(crate) struct Bucket {
    size: usize,
    storage: Vec<u8>,
    generations: Vec<u32>,
    occupied: Vec<bool>,
    /// Free slot indices; popped from the back so slot 0 is served first.
    free: Vec<u32>,
}

impl Bucket {
    pub(crate) fn new(class: SizeClass) -> Self {
        Bucket {
            size: class.size,
            storage: vec![0; class.size * class.count],
            generations: vec![0; class.count],
            occupied: vec![false; class.count],
            free: (0..class.count as u32).rev().collect(),
        }
    }

    /// Take a free slot, returning `(index, generation)`.
    pub(crate) fn borrow(&mut self) -> Option<(u32, u32)> {
        let index = self.free.pop()?;
        let slot = index as usize;
        self.occupied[slot] = true;
        Some((index, self.generations[slot]))
    }

    /// Return a slot. Returns `false` if the handle does not name a live slot.
    pub(crate) fn give_back(&mut self, index: u32, generation: u32) -> bool {
        if !self.is_live(index, generation) {
            return false;
        }
        let slot = index as usize;
        self.occupied[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.bytes_mut(index).fill(0);
        self.free.push(index);
        true
    }

    pub(crate) fn is_live(&self, index: u32, generation: u32) -> bool {
        let slot = index as usize;
        slot < self.occupied.len() && self.occupied[slot] && self.generations[slot] == generation
    }

    pub(crate) fn bytes(&self, index: u32) -> &[u8] {
        let start = index as usize * self.size;
        &self.storage[start..start + self.size]
    }

    pub(crate) fn bytes_mut(&mut self, index: u32) -> &mut [u8] {
        let start = index as usize * self.size;
        &mut self.storage[start..start + self.size]
    }

    pub(crate) fn in_use(&self) -> usize {
        self.occupied.len() - self.free.len()
    }
}
