//! Walker Alloc - small-block pool for the Walker runtime.
//!
//! Five fixed size classes serve small requests from preallocated slabs;
//! anything larger, or anything arriving while its class is exhausted,
//! goes to the general heap. Callers hold [`Block`] handles, never
//! addresses: a handle names a slot plus the generation it was issued
//! under, so a handle kept past its `free` is detected instead of aliasing
//! whatever reused the slot.
//!
//! | Class | Range (bytes) | Blocks |
//! |-------|---------------|--------|
//! | 16    | 1..=16        | 256    |
//! | 24    | 17..=24       | 256    |
//! | 32    | 25..=32       | 128    |
//! | 64    | 33..=64       | 64     |
//! | 128   | 65..=128      | 32     |
//!
//! [`Pool::store`] copies a slice into a fresh block and is how program
//! texts enter the pool. [`Pool::resize`] grows or shrinks a block in
//! place when its class allows and moves it otherwise; the runtime never
//! resizes, but the pool contract covers it for embedders holding their
//! own blocks.
//!
//! Misuse (zero-byte allocation, freeing a stale handle) panics: these are
//! programming errors in the runtime, not conditions a program can cause.

mod block;
mod bucket;
mod pool;

pub use block::{Block, Home};
pub use bucket::{SizeClass, SIZE_CLASSES};
pub use pool::{Pool, PoolStats};
