//! System clipboard export sink backed by `arboard`.

use cdplus_core::error::{CoreError, CoreResult};
use cdplus_core::export::{unavailable, ExportSink};

/// Copies the exported text to the system clipboard.
///
/// The clipboard is opened on delivery, so a missing display only fails the
/// export step and never the navigator.
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl ExportSink for ClipboardSink {
    fn name(&self) -> &str {
        "clipboard"
    }

    fn deliver(&mut self, text: &str) -> CoreResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| unavailable("clipboard", e))?;
        clipboard
            .set_text(text)
            .map_err(|e| CoreError::Export(format!("clipboard error: {e}")))
    }
}
