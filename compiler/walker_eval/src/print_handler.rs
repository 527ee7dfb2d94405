//! Print handler for configurable output.
//!
//! `print`, `println`, and the `newline` primitive write through this
//! handler. The CLI uses stdout; tests capture into a buffer.
//!
//! Walker text is bytes, not UTF-8, so handlers take `&[u8]`.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// Writes straight to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn print(&self, bytes: &[u8]) {
        if let Err(error) = std::io::stdout().lock().write_all(bytes) {
            trace!(%error, "stdout write failed");
        }
    }

    pub fn flush(&self) {
        if let Err(error) = std::io::stdout().lock().flush() {
            trace!(%error, "stdout flush failed");
        }
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<Vec<u8>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(Vec::new()),
        }
    }

    pub fn print(&self, bytes: &[u8]) {
        self.buffer.lock().extend_from_slice(bytes);
    }

    /// Captured output, lossily decoded.
    pub fn get_output(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn print(&self, bytes: &[u8]) {
        match self {
            Self::Stdout(h) => h.print(bytes),
            Self::Buffer(h) => h.print(bytes),
            Self::Silent => {}
        }
    }

    /// Print followed by a newline.
    pub fn println(&self, bytes: &[u8]) {
        self.print(bytes);
        self.print(b"\n");
    }

    pub fn flush(&self) {
        if let Self::Stdout(h) = self {
            h.flush();
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_bytes_in_order() {
        let handler = buffer_handler();
        handler.print(b"a");
        handler.println(b"b");
        handler.print(b"c");
        assert_eq!(handler.get_output(), "ab\nc");
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn silent_and_stdout_capture_nothing() {
        let silent = silent_handler();
        silent.println(b"dropped");
        assert_eq!(silent.get_output(), "");
        assert_eq!(stdout_handler().get_output(), "");
    }

    #[test]
    fn stdout_writes_and_flushes_without_panicking() {
        let handler = stdout_handler();
        handler.print(b"");
        handler.println(b"");
        handler.flush();
    }
}
