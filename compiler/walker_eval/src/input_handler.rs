//! Input handler for the `scan` family of primitives.
//!
//! Mirrors the print handler: stdin for the CLI, a byte queue for tests.

use std::collections::VecDeque;
use std::io::Read;
use std::sync::Arc;

use parking_lot::Mutex;

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Reads stdin one byte at a time.
    Stdin,
    /// Reads from a fixed queue of bytes.
    Buffer(Mutex<VecDeque<u8>>),
    /// Always at end of input.
    Empty,
}

impl InputHandlerImpl {
    /// Next input byte, or `None` at end of input.
    pub fn read_byte(&self) -> Option<u8> {
        match self {
            Self::Stdin => {
                let mut byte = [0u8; 1];
                match std::io::stdin().lock().read(&mut byte) {
                    Ok(1) => Some(byte[0]),
                    _ => None,
                }
            }
            Self::Buffer(queue) => queue.lock().pop_front(),
            Self::Empty => None,
        }
    }
}

/// Shared input handler.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin)
}

/// Input that yields `bytes` and then ends.
pub fn buffer_input(bytes: impl AsRef<[u8]>) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Buffer(Mutex::new(
        bytes.as_ref().iter().copied().collect(),
    )))
}

pub fn empty_input() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drains_then_ends() {
        let input = buffer_input("ab");
        assert_eq!(input.read_byte(), Some(b'a'));
        assert_eq!(input.read_byte(), Some(b'b'));
        assert_eq!(input.read_byte(), None);
        assert_eq!(empty_input().read_byte(), None);
    }
}
