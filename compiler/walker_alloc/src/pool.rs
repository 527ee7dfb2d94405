//! The block pool.

use tracing::trace;

use crate::block::{Block, Home};
use crate::bucket::{class_for, Bucket, SIZE_CLASSES};

/// General-heap slot. `data` is `None` while the slot sits on the free list.
struct HeapSlot {
    generation: u32,
    data: Option<Vec<u8>>,
}

/// Live-block counts, for leak checks in tests and debug logging.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Blocks currently served from buckets.
    pub pooled: usize,
    /// Blocks currently on the general heap.
    pub heap: usize,
}

impl PoolStats {
    /// Total live blocks.
    pub fn live(self) -> usize {
        self.pooled + self.heap
    }
}

/// Size-class pool with heap fallback.
///
/// Freshly served storage is zeroed, and storage gained by growing a block
/// is zeroed too, so a reader that stops at the first `0` byte never sees
/// bytes from an earlier occupant.
pub struct Pool {
    buckets: Vec<Bucket>,
    heap: Vec<HeapSlot>,
    heap_free: Vec<u32>,
}

impl Pool {
    /// Create a pool with every bucket's slab preallocated.
    pub fn new() -> Self {
        Pool {
            buckets: SIZE_CLASSES.iter().copied().map(Bucket::new).collect(),
            heap: Vec::new(),
            heap_free: Vec::new(),
        }
    }

    /// Allocate `n` zeroed bytes.
    ///
    /// # Panics
    /// If `n` is zero.
    pub fn allocate(&mut self, n: usize) -> Block {
        assert!(n > 0, "zero-byte allocation");
        if let Some(class) = class_for(n) {
            if let Some((index, generation)) = self.buckets[class as usize].borrow() {
                return Block::new(Home::Bucket(class), index, generation);
            }
            trace!(class = SIZE_CLASSES[class as usize].size, "bucket exhausted");
        }
        self.allocate_heap(vec![0; n])
    }

    /// Allocate a block holding a copy of `data`.
    pub fn store(&mut self, data: &[u8]) -> Block {
        let block = self.allocate(data.len());
        self.bytes_mut(block)[..data.len()].copy_from_slice(data);
        block
    }

    fn allocate_heap(&mut self, data: Vec<u8>) -> Block {
        if let Some(index) = self.heap_free.pop() {
            let slot = &mut self.heap[index as usize];
            slot.data = Some(data);
            return Block::new(Home::Heap, index, slot.generation);
        }
        let index = self.heap.len() as u32;
        self.heap.push(HeapSlot {
            generation: 0,
            data: Some(data),
        });
        Block::new(Home::Heap, index, 0)
    }

    /// Change a block's size to `n` bytes, preserving `min(old, n)` bytes.
    ///
    /// A bucket block whose class still fits `n` is returned unchanged.
    /// Resizing to zero frees the block and returns `None`.
    ///
    /// # Panics
    /// If `block` is not live.
    pub fn resize(&mut self, block: Block, n: usize) -> Option<Block> {
        if n == 0 {
            self.free(block);
            return None;
        }
        match block.home {
            Home::Bucket(class) => {
                assert!(self.is_live(block), "resize of dead block {block:?}");
                if SIZE_CLASSES[class as usize].fits(n) {
                    return Some(block);
                }
                // Bucket blocks are at most 128 bytes
                let keep = SIZE_CLASSES[class as usize].size.min(n);
                let mut scratch = [0u8; 128];
                scratch[..keep].copy_from_slice(&self.bytes(block)[..keep]);
                let moved = self.allocate(n);
                self.bytes_mut(moved)[..keep].copy_from_slice(&scratch[..keep]);
                self.free(block);
                Some(moved)
            }
            Home::Heap => {
                let data = self
                    .heap_slot_mut(block)
                    .unwrap_or_else(|| panic!("resize of dead block {block:?}"));
                data.resize(n, 0);
                Some(block)
            }
        }
    }

    /// Release a block.
    ///
    /// # Panics
    /// If `block` is not live (double free or a handle from another pool).
    pub fn free(&mut self, block: Block) {
        let released = match block.home {
            Home::Bucket(class) => self.buckets[class as usize].give_back(block.index, block.generation),
            Home::Heap => self.release_heap(block),
        };
        assert!(released, "free of unrecognized block {block:?}");
    }

    fn release_heap(&mut self, block: Block) -> bool {
        let Some(slot) = self.heap.get_mut(block.index()) else {
            return false;
        };
        if slot.generation != block.generation || slot.data.is_none() {
            return false;
        }
        slot.data = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.heap_free.push(block.index);
        true
    }

    /// Returns `true` if `block` still names live storage.
    pub fn is_live(&self, block: Block) -> bool {
        match block.home {
            Home::Bucket(class) => self
                .buckets
                .get(class as usize)
                .is_some_and(|b| b.is_live(block.index, block.generation)),
            Home::Heap => self
                .heap
                .get(block.index())
                .is_some_and(|s| s.generation == block.generation && s.data.is_some()),
        }
    }

    /// Usable size of a block in bytes.
    ///
    /// # Panics
    /// If `block` is not live.
    pub fn capacity(&self, block: Block) -> usize {
        self.bytes(block).len()
    }

    /// Contents of a live block, or `None` for a stale handle.
    pub fn get(&self, block: Block) -> Option<&[u8]> {
        if !self.is_live(block) {
            return None;
        }
        match block.home {
            Home::Bucket(class) => Some(self.buckets[class as usize].bytes(block.index)),
            Home::Heap => self.heap[block.index()].data.as_deref(),
        }
    }

    /// Contents of a live block.
    ///
    /// # Panics
    /// If `block` is not live.
    pub fn bytes(&self, block: Block) -> &[u8] {
        self.get(block)
            .unwrap_or_else(|| panic!("read of dead block {block:?}"))
    }

    /// Mutable contents of a live block.
    ///
    /// # Panics
    /// If `block` is not live.
    pub fn bytes_mut(&mut self, block: Block) -> &mut [u8] {
        assert!(self.is_live(block), "write to dead block {block:?}");
        match block.home {
            Home::Bucket(class) => self.buckets[class as usize].bytes_mut(block.index),
            Home::Heap => self
                .heap_slot_mut(block)
                .map(Vec::as_mut_slice)
                .unwrap_or_default(),
        }
    }

    fn heap_slot_mut(&mut self, block: Block) -> Option<&mut Vec<u8>> {
        let slot = self.heap.get_mut(block.index())?;
        if slot.generation != block.generation {
            return None;
        }
        slot.data.as_mut()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            pooled: self.buckets.iter().map(Bucket::in_use).sum(),
            heap: self.heap.iter().filter(|s| s.data.is_some()).count(),
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
