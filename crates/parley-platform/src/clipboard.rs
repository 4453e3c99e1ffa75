//! System clipboard, used to copy replies out of the transcript.

use parley_common::PlatformError;
use tracing::debug;

fn clipboard_error(e: arboard::Error) -> PlatformError {
    PlatformError::ClipboardError(e.to_string())
}

pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Open the system clipboard. Fails on headless sessions with no
    /// display server.
    pub fn new() -> Result<Self, PlatformError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(clipboard_error)
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        debug!(chars = text.chars().count(), "copying to clipboard");
        self.inner.set_text(text).map_err(clipboard_error)
    }
}

/// Open the clipboard, copy `text`, and release it.
pub fn copy_text(text: &str) -> Result<(), PlatformError> {
    Clipboard::new()?.set_text(text)
}
