use std::path::PathBuf;

use reportkit_io_pdf::SpecDocumentOptions;
use serde::{Deserialize, Serialize};

/// Caller settings shared by the file exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecExportOptions {
    /// Directory receiving `${title}.<ext>`; created when missing.
    pub dir_out: PathBuf,
    /// Paper size and margins for documents.
    pub document: SpecDocumentOptions,
    /// Freeze the spreadsheet header row.
    pub if_freeze_header: bool,
}

impl Default for SpecExportOptions {
    fn default() -> Self {
        Self {
            dir_out: PathBuf::from("."),
            document: SpecDocumentOptions::default(),
            if_freeze_header: true,
        }
    }
}

impl SpecExportOptions {
    pub fn with_dir_out(mut self, dir_out: impl Into<PathBuf>) -> Self {
        self.dir_out = dir_out.into();
        self
    }
}
