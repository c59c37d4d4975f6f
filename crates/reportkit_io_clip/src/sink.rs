//! Clipboard delivery.

use reportkit_io::EnumCellValue;
use tracing::{info, warn};

use crate::text::derive_structured_text;

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), String>;
}

/// Platform clipboard through arboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(text).map_err(|err| err.to_string())
    }
}

/// Copy the table as a JSON array of row objects.
///
/// Returns `false` when the sink refuses the text; the failure is logged,
/// never raised.
pub fn copy_as_structured_text(
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    sink: &mut dyn ClipboardSink,
) -> bool {
    let c_text = derive_structured_text(headers, rows);
    let n_bytes = c_text.len();
    match sink.set_text(c_text) {
        Ok(()) => {
            info!(rows = rows.len(), bytes = n_bytes, "table copied to clipboard");
            true
        }
        Err(err) => {
            warn!(error = %err, "clipboard copy failed");
            false
        }
    }
}
