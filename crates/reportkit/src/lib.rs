//! `reportkit` v1:
//! Tabular report export: spreadsheets, styled PDF documents and clipboard
//! JSON snapshots from already-prepared headers and rows.
//!
//! - `export`  : the public entry points
//! - `options` : export settings
//! - `error`   : façade error type
//! - `job`     : JSON job files driving the `reportkit` CLI
pub mod error;
pub mod export;
pub mod job;
pub mod options;

pub use error::{ExportError, ExportResult};
pub use export::{
    copy_as_structured_text, export_catalog_document, export_document, export_schedule_document,
    export_spreadsheet, load_table_from_ipc,
};
pub use job::{
    EnumExportJob, EnumIpcTarget, EnumJobOutcome, SpecCatalogJob, SpecIpcJob, SpecJobFile,
    SpecScheduleJob, parse_job_file, read_job_file, run_job,
};
pub use options::SpecExportOptions;

pub use reportkit_io::{EnumCellValue, SpecTable};
pub use reportkit_io_clip::{ClipboardSink, SystemClipboard, derive_structured_text};
pub use reportkit_io_xlsx::{derive_table_from_dataframe, derive_table_from_ipc_bytes};
pub use reportkit_io_pdf::{
    ColorRgb, SpecCard, SpecCatalogSection, SpecDocumentOptions, SpecScheduleDay,
    blend_toward_white, stage_color,
};
