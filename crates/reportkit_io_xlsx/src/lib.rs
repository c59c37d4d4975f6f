//! `reportkit_io_xlsx` v1:
//! Spreadsheet side of the report export kernel.
//!
//! - `conf`   : Excel limits and default format presets
//! - `spec`   : formats, policies and write report
//! - `util`   : pure helper functions
//! - `ingest` : DataFrame/IPC to table conversion
//! - `writer` : rust_xlsxwriter-backed workbook writer
pub mod conf;
pub mod ingest;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
pub use ingest::{derive_table_from_dataframe, derive_table_from_ipc_bytes};
pub use spec::{
    EnumAutofitColumnsRule, EnumCellAlign, SpecAutofitCellsPolicy, SpecCellFormat, SpecXlsxReport,
    SpecXlsxSheetWriteOptions,
};
pub use util::{plan_column_widths, sanitize_sheet_name};
pub use writer::{XlsxWriter, write_spreadsheet};
