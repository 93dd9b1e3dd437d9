//! Copy outline use case

use tracing::{debug, warn};

use crate::domain::sermon::GenerationResult;

use super::ports::{Clipboard, ClipboardError};

/// Puts a successful outline on the clipboard. Failed results are never
/// copied, so the clipboard never ends up holding an error message.
pub struct CopyOutlineUseCase<C>
where
    C: Clipboard,
{
    clipboard: C,
}

impl<C> CopyOutlineUseCase<C>
where
    C: Clipboard,
{
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    /// Returns `Ok(true)` when text was copied, `Ok(false)` for a failed result
    pub async fn execute(&self, result: &GenerationResult) -> Result<bool, ClipboardError> {
        if !result.is_success() {
            debug!("nothing to copy for a failed result");
            return Ok(false);
        }

        self.clipboard.copy(result.content()).await.map_err(|e| {
            warn!(error = %e, "clipboard copy failed");
            e
        })?;
        Ok(true)
    }
}
