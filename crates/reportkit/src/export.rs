//! Public export entry points.

use std::fs;
use std::path::{Path, PathBuf};

use reportkit_io::{EnumCellValue, SpecTable};
use reportkit_io_pdf::{
    DocumentCanvas, SpecCardGridPolicy, SpecCatalogSection, SpecScheduleDay,
    compose_catalog_document, compose_schedule_document, compose_table_document,
    write_document_file,
};
use reportkit_io_xlsx::{SpecXlsxSheetWriteOptions, derive_table_from_ipc_bytes, write_spreadsheet};
use tracing::{debug, warn};

use crate::error::{ExportError, ExportResult};
use crate::options::SpecExportOptions;

pub use reportkit_io_clip::copy_as_structured_text;

/// Write `${title}.xlsx` with one sheet holding `headers` and `rows`.
pub fn export_spreadsheet(
    title: &str,
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    options: &SpecExportOptions,
) -> ExportResult<PathBuf> {
    fs::create_dir_all(&options.dir_out)?;
    let options_sheet = SpecXlsxSheetWriteOptions {
        if_freeze_header: options.if_freeze_header,
        ..Default::default()
    };
    let report = write_spreadsheet(&options.dir_out, title, headers, rows, &options_sheet)
        .map_err(ExportError::Xlsx)?;
    for c_warning in &report.warnings {
        warn!(warning = %c_warning, "spreadsheet export");
    }
    Ok(report.path_file_out)
}

/// Write `${title}.pdf` with a title and one table.
pub fn export_document(
    title: &str,
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    options: &SpecExportOptions,
) -> ExportResult<PathBuf> {
    let canvas = compose_table_document(title, headers, rows, &options.document);
    save_document(&canvas, options)
}

/// Write `${title}.pdf` with one labeled table per group.
pub fn export_catalog_document(
    title: &str,
    headers: &[String],
    groups: &[SpecCatalogSection],
    options: &SpecExportOptions,
) -> ExportResult<PathBuf> {
    let canvas = compose_catalog_document(title, headers, groups, &options.document);
    save_document(&canvas, options)
}

/// Write `${title}.pdf`: optional card page, then one page per day.
pub fn export_schedule_document(
    title: &str,
    headers: &[String],
    groups: &[SpecScheduleDay],
    options: &SpecExportOptions,
) -> ExportResult<PathBuf> {
    let canvas = compose_schedule_document(
        title,
        headers,
        groups,
        &options.document,
        &SpecCardGridPolicy::default(),
    );
    save_document(&canvas, options)
}

/// Load a polars IPC file as a table titled `title`.
pub fn load_table_from_ipc(title: &str, path_ipc: &Path) -> ExportResult<SpecTable> {
    let v_ipc_df = fs::read(path_ipc)?;
    let table = derive_table_from_ipc_bytes(title, &v_ipc_df).map_err(ExportError::Job)?;
    debug!(
        file = %path_ipc.display(),
        columns = table.width(),
        rows = table.height(),
        "ipc table loaded"
    );
    Ok(table)
}

fn save_document(canvas: &DocumentCanvas, options: &SpecExportOptions) -> ExportResult<PathBuf> {
    fs::create_dir_all(&options.dir_out)?;
    write_document_file(&options.dir_out, canvas).map_err(ExportError::Pdf)
}
