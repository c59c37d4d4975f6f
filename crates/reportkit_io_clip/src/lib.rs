//! `reportkit_io_clip` v1:
//! Structured-text (JSON) snapshot of a table and clipboard delivery.
//!
//! - `text` : row objects and pretty JSON payload
//! - `sink` : clipboard abstraction and the arboard-backed system clipboard
pub mod sink;
pub mod text;

pub use sink::{ClipboardSink, SystemClipboard, copy_as_structured_text};
pub use text::{derive_cell_json, derive_row_objects, derive_structured_text};
