//! System clipboard via arboard (X11/Wayland, macOS, Windows)

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

/// Clipboard adapter backed by arboard
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let chars = text.chars().count();

        // arboard blocks on the display server
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))??;

        debug!(chars, "outline copied to clipboard");
        Ok(())
    }
}
