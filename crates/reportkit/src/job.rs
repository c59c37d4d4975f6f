//! Job files: one export described as JSON.
//!
//! ```json
//! {"kind": "schedule", "title": "Plan", "headers": ["MODELO", "HC", "TOTAL"],
//!  "groups": [{"day": "Lunes", "rows": [["A", 3, 10]], "stage_tags": ["ROBOT"]}],
//!  "options": {"dir_out": "out"}}
//! ```
//!
//! Tables stored as polars IPC files use the `ipc` kind:
//!
//! ```json
//! {"kind": "ipc", "title": "Plan", "ipc_path": "plan.arrow", "target": "document"}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use reportkit_io::SpecTable;
use reportkit_io_clip::{ClipboardSink, copy_as_structured_text};
use reportkit_io_pdf::{SpecCatalogSection, SpecScheduleDay};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::export::{
    export_catalog_document, export_document, export_schedule_document, export_spreadsheet,
    load_table_from_ipc,
};
use crate::options::SpecExportOptions;

/// Grouped table payload for catalog documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecCatalogJob {
    pub title: String,
    pub headers: Vec<String>,
    #[serde(default)]
    pub groups: Vec<SpecCatalogSection>,
}

/// Per-day payload for schedule documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecScheduleJob {
    pub title: String,
    pub headers: Vec<String>,
    #[serde(default)]
    pub groups: Vec<SpecScheduleDay>,
}

/// Single-table export a loaded IPC table is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumIpcTarget {
    #[default]
    Spreadsheet,
    Document,
    Clipboard,
}

impl EnumIpcTarget {
    fn derive_job(self, table: SpecTable) -> EnumExportJob {
        match self {
            Self::Spreadsheet => EnumExportJob::Spreadsheet(table),
            Self::Document => EnumExportJob::Document(table),
            Self::Clipboard => EnumExportJob::Clipboard(table),
        }
    }
}

/// Table read from a polars IPC file at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecIpcJob {
    pub title: String,
    pub ipc_path: PathBuf,
    #[serde(default)]
    pub target: EnumIpcTarget,
}

/// Export requested by a job file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnumExportJob {
    Spreadsheet(SpecTable),
    Document(SpecTable),
    Catalog(SpecCatalogJob),
    Schedule(SpecScheduleJob),
    Clipboard(SpecTable),
    Ipc(SpecIpcJob),
}

/// Job plus optional export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecJobFile {
    #[serde(flatten)]
    pub job: EnumExportJob,
    #[serde(default)]
    pub options: SpecExportOptions,
}

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumJobOutcome {
    File(PathBuf),
    Copied,
}

/// Parse a job file from JSON text.
pub fn parse_job_file(text: &str) -> ExportResult<SpecJobFile> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a job file from disk.
pub fn read_job_file(path: &Path) -> ExportResult<SpecJobFile> {
    let c_text = fs::read_to_string(path)?;
    parse_job_file(&c_text)
}

/// Run one job. A refused clipboard is reported as an error here so the
/// CLI can exit non-zero.
pub fn run_job(
    job: &EnumExportJob,
    options: &SpecExportOptions,
    sink: &mut dyn ClipboardSink,
) -> ExportResult<EnumJobOutcome> {
    let outcome = match job {
        EnumExportJob::Spreadsheet(table) => EnumJobOutcome::File(export_spreadsheet(
            &table.title,
            &table.headers,
            &table.rows,
            options,
        )?),
        EnumExportJob::Document(table) => EnumJobOutcome::File(export_document(
            &table.title,
            &table.headers,
            &table.rows,
            options,
        )?),
        EnumExportJob::Catalog(job) => EnumJobOutcome::File(export_catalog_document(
            &job.title,
            &job.headers,
            &job.groups,
            options,
        )?),
        EnumExportJob::Schedule(job) => EnumJobOutcome::File(export_schedule_document(
            &job.title,
            &job.headers,
            &job.groups,
            options,
        )?),
        EnumExportJob::Clipboard(table) => {
            if !copy_as_structured_text(&table.headers, &table.rows, sink) {
                return Err(ExportError::Job("clipboard copy failed".to_string()));
            }
            EnumJobOutcome::Copied
        }
        EnumExportJob::Ipc(job) => {
            let table = load_table_from_ipc(&job.title, &job.ipc_path)?;
            return run_job(&job.target.derive_job(table), options, sink);
        }
    };

    if let EnumJobOutcome::File(path) = &outcome {
        info!(file = %path.display(), "job finished");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportkit_io::EnumCellValue;

    #[test]
    fn test_parse_schedule_job_with_options() {
        let job_file = parse_job_file(
            r#"{
                "kind": "schedule",
                "title": "Plan",
                "headers": ["MODELO", "HC", "TOTAL"],
                "groups": [
                    {"day": "Lunes", "rows": [["A", 3, 10]], "stage_tags": ["ROBOT"],
                     "cards": [{"primary_label": "Ext", "quantity": 2, "flagged": true}]}
                ],
                "options": {"dir_out": "out", "document": {"margin_mm": 10.0}}
            }"#,
        )
        .unwrap();

        assert_eq!(job_file.options.dir_out, PathBuf::from("out"));
        assert_eq!(job_file.options.document.margin_mm, 10.0);
        assert_eq!(job_file.options.document.paper_width_mm, 210.0);
        let EnumExportJob::Schedule(job) = job_file.job else {
            panic!("expected schedule job");
        };
        assert_eq!(job.groups[0].rows[0][1], EnumCellValue::Number(3.0));
        assert!(job.groups[0].cards[0].flagged);
    }

    #[test]
    fn test_parse_clipboard_job_defaults_options() {
        let job_file = parse_job_file(
            r#"{"kind": "clipboard", "title": "T", "headers": ["A"], "rows": [[null]]}"#,
        )
        .unwrap();
        assert_eq!(job_file.options, SpecExportOptions::default());
        assert_eq!(
            job_file.job,
            EnumExportJob::Clipboard(SpecTable::new(
                "T",
                vec!["A".to_string()],
                vec![vec![EnumCellValue::None]],
            ))
        );
    }

    #[test]
    fn test_parse_ipc_job_defaults_to_spreadsheet() {
        let job_file =
            parse_job_file(r#"{"kind": "ipc", "title": "Plan", "ipc_path": "plan.arrow"}"#)
                .unwrap();
        assert_eq!(
            job_file.job,
            EnumExportJob::Ipc(SpecIpcJob {
                title: "Plan".to_string(),
                ipc_path: PathBuf::from("plan.arrow"),
                target: EnumIpcTarget::Spreadsheet,
            })
        );

        let job_file = parse_job_file(
            r#"{"kind": "ipc", "title": "Plan", "ipc_path": "p.arrow", "target": "clipboard"}"#,
        )
        .unwrap();
        let EnumExportJob::Ipc(job) = job_file.job else {
            panic!("expected ipc job");
        };
        assert_eq!(job.target, EnumIpcTarget::Clipboard);
    }

    #[test]
    fn test_unknown_kind_is_json_error() {
        let err = parse_job_file(r#"{"kind": "slides", "title": "T"}"#).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }
}
