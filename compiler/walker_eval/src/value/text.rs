//! Owned byte strings.

use std::fmt;

/// Smallest capacity a non-empty text is grown to.
const MIN_CAPACITY: usize = 16;

/// Growable owned byte buffer backing String and Error values.
///
/// Not required to be UTF-8 and not null-terminated. Capacity at least
/// doubles on growth.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    bytes: Vec<u8>,
}

impl Text {
    pub const fn new() -> Self {
        Text { bytes: Vec::new() }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut text = Text::new();
        text.push_bytes(bytes);
        text
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    fn grow_for(&mut self, extra: usize) {
        let need = self.bytes.len() + extra;
        let cap = self.bytes.capacity();
        if need <= cap {
            return;
        }
        let mut target = cap.max(MIN_CAPACITY);
        while target < need {
            target *= 2;
        }
        self.bytes.reserve_exact(target - self.bytes.len());
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.grow_for(1);
        self.bytes.push(byte);
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.bytes.extend_from_slice(bytes);
    }

    pub fn append(&mut self, other: &Text) {
        self.push_bytes(other.as_bytes());
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lossy UTF-8 view, for hosts that need `str`.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::from_bytes(s.as_bytes())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::from_bytes(s.as_bytes())
    }
}

impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Text { bytes }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.bytes))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
