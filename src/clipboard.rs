//! System clipboard access
//!
//! Writing is the only clipboard operation the dashboard performs. It sits behind
//! [`ClipboardWriter`] so the endpoint browser can be driven without a display server.

use arboard::Clipboard;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened (no display, unsupported platform)
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard was opened but refused the text
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by arboard, opened lazily on first write
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable(
                "clipboard was not initialized".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records writes, optionally failing every one of them
    #[derive(Debug, Clone, Default)]
    pub struct FakeClipboard {
        pub writes: Arc<Mutex<Vec<String>>>,
        pub fail: Arc<Mutex<bool>>,
    }

    impl FakeClipboard {
        pub fn failing() -> Self {
            let fake = Self::default();
            fake.set_failing(true);
            fake
        }

        pub fn set_failing(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        pub fn written(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl ClipboardWriter for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if *self.fail.lock().unwrap() {
                return Err(ClipboardError::WriteFailed("permission denied".to_string()));
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
