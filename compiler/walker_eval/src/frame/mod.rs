//! The frame stack: partial results of the blocks being evaluated.
//!
//! Each open block accumulates its result in its own frame. Literal bytes
//! are appended as text; a nested block's result is merged into its parent
//! on close by [`FrameStack::collapse`], which keeps a lone nested result's
//! kind intact. That is why `{+;1;2}` yields the number 3 while
//! `x{+;1;2}y` yields the text `x3y`.

use crate::value::{Text, Value};

/// Stack of in-progress values. Never empty.
pub struct FrameStack {
    frames: Vec<Value>,
}

impl FrameStack {
    pub fn new() -> Self {
        FrameStack {
            frames: vec![Value::None],
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open a new `None` frame.
    #[inline]
    pub fn push(&mut self) {
        self.frames.push(Value::None);
    }

    #[inline]
    pub fn top(&self) -> &Value {
        // Construction guarantees at least one frame
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut Value {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Take the top value, leaving `None`.
    #[inline]
    pub fn take(&mut self) -> Value {
        std::mem::take(self.top_mut())
    }

    /// Stringify and take the top value's text, leaving `None`.
    pub fn take_text(&mut self) -> Text {
        self.top_mut().take_text()
    }

    #[inline]
    pub fn clear_top(&mut self) {
        self.top_mut().clear();
    }

    /// Replace the top value.
    #[inline]
    pub fn assume(&mut self, value: Value) {
        *self.top_mut() = value;
    }

    /// Stringify the top and append one byte.
    #[inline]
    pub fn append_byte(&mut self, byte: u8) {
        self.top_mut().edit_text(|text| text.push(byte));
    }

    /// Stringify the top and append bytes.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.top_mut().edit_text(|text| text.push_bytes(bytes));
    }

    fn pop_child(&mut self) -> Value {
        assert!(self.frames.len() > 1, "frame stack underflow");
        self.frames.pop().unwrap_or_default()
    }

    /// Merge the top frame into its parent.
    ///
    /// A `None` parent is replaced by the child unchanged. Otherwise both
    /// are stringified and the child's text is appended to the parent's.
    pub fn collapse(&mut self) {
        let child = self.pop_child();
        let parent = self.top_mut();
        if parent.is_none() {
            *parent = child;
            return;
        }
        let tail = child.into_text();
        parent.edit_text(|text| text.append(&tail));
    }

    /// Drop the parent's partial result and let the top frame's value take
    /// its place. Used while a signal unwinds.
    pub fn discard(&mut self) {
        let child = self.pop_child();
        self.assume(child);
    }

    /// Drop every frame but the outermost and clear it.
    pub fn reset(&mut self) {
        self.frames.truncate(1);
        self.clear_top();
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
