//! Clipboard access for the copy-template action
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! On X11 and Wayland the copied text is served by the process that owns the
//! clipboard handle, so the handle lives as long as the guide does.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Destination for copied text
///
/// The controller only needs to know whether the write succeeded.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, opened on first copy and kept open afterwards
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut Clipboard> {
        if !self.is_open() {
            tracing::debug!("Opening system clipboard");
            self.handle = Some(Clipboard::new().context("Failed to access clipboard")?);
        }
        self.handle
            .as_mut()
            .context("Clipboard handle unavailable")
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

impl ClipboardSink for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    /// A failed write drops the handle so the next copy reopens it.
    fn set_text(&mut self, text: &str) -> Result<()> {
        let result = self
            .handle()?
            .set_text(text)
            .context("Failed to set clipboard text");
        if result.is_err() {
            self.handle = None;
        }
        result
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clipboard_opens_lazily() {
        // No display server is needed until the first copy
        let clipboard = SystemClipboard::default();
        assert!(!clipboard.is_open());
    }

    #[test]
    fn handle_outlives_a_successful_copy() {
        // Headless machines fail to open a clipboard; either way the handle
        // is kept exactly when the write went through.
        let mut clipboard = SystemClipboard::default();
        let copied = clipboard.set_text("prompt-guide clipboard check").is_ok();
        assert_eq!(clipboard.is_open(), copied);
    }
}
