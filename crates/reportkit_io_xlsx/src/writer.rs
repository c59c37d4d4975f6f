//! XLSX writer kernel that turns one table into a workbook file.

use std::path::{Path, PathBuf};

use reportkit_io::{EnumCellValue, derive_output_file_name};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::{debug, info};

use crate::conf::{
    C_SHEET_NAME_REPLACEMENT, C_XLSX_EXTENSION, N_LEN_EXCEL_SHEET_NAME_MAX,
    SpecXlsxFormatPresets,
};
use crate::spec::{EnumCellAlign, SpecCellFormat, SpecXlsxReport, SpecXlsxSheetWriteOptions};
use crate::util::{plan_column_widths, sanitize_sheet_name};

/// Stateful single-sheet workbook writer.
///
/// The workbook is buffered in memory until [`Self::close`] is called, so a
/// failure before that point leaves no file behind.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_presets: SpecXlsxFormatPresets,
    report: SpecXlsxReport,
    if_sheet_written: bool,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and format presets.
    pub fn new(path_file_out: PathBuf, fmt_presets: SpecXlsxFormatPresets) -> Self {
        Self {
            report: SpecXlsxReport {
                path_file_out: path_file_out.clone(),
                ..Default::default()
            },
            path_file_out,
            workbook: Workbook::new(),
            fmt_presets,
            if_sheet_written: false,
            if_closed: false,
        }
    }

    /// Return output file path.
    pub fn file_out(&self) -> &Path {
        &self.path_file_out
    }

    /// Return snapshot of the write report.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        if !self.if_sheet_written {
            return Err("Cannot close workbook without a sheet.".to_string());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        Ok(())
    }

    /// Write the single sheet: header row from `headers`, then `rows` in order.
    ///
    /// Row lengths are not validated; short rows leave trailing cells empty.
    pub fn write_sheet(
        &mut self,
        sheet_name: &str,
        headers: &[String],
        rows: &[Vec<EnumCellValue>],
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        if self.if_sheet_written {
            return Err("Sheet already written; workbook holds exactly one sheet.".to_string());
        }

        let c_sheet_name = sanitize_sheet_name(sheet_name, C_SHEET_NAME_REPLACEMENT);
        if sheet_name.chars().count() > N_LEN_EXCEL_SHEET_NAME_MAX {
            self.report.warn(format!(
                "Sheet name truncated to {N_LEN_EXCEL_SHEET_NAME_MAX} chars: {c_sheet_name:?}"
            ));
        }

        let fmt_header = derive_rust_xlsx_format(&self.fmt_presets.header);
        let fmt_text = derive_rust_xlsx_format(&self.fmt_presets.text);
        let fmt_number = derive_rust_xlsx_format(&self.fmt_presets.number);

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&c_sheet_name)
            .map_err(derive_xlsx_error_text)?;

        for (n_idx_col, c_header) in headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, cast_col_num(n_idx_col)?, c_header, &fmt_header)
                .map_err(derive_xlsx_error_text)?;
        }

        for (n_idx_row, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                debug!(
                    row = n_idx_row,
                    cells = row.len(),
                    headers = headers.len(),
                    "row width differs from header width"
                );
            }
            for (n_idx_col, value) in row.iter().enumerate() {
                write_cell_with_format(
                    worksheet,
                    n_idx_row + 1,
                    n_idx_col,
                    value,
                    &fmt_text,
                    &fmt_number,
                )?;
            }
        }

        if options.if_freeze_header {
            worksheet
                .set_freeze_panes(1, 0)
                .map_err(derive_xlsx_error_text)?;
        }

        if let Some(l_widths) = plan_column_widths(headers, rows, &options.policy_autofit) {
            for (n_idx_col, n_width) in l_widths.into_iter().enumerate() {
                worksheet
                    .set_column_width(cast_col_num(n_idx_col)?, n_width)
                    .map_err(derive_xlsx_error_text)?;
            }
        }

        self.report.sheet_name = c_sheet_name;
        self.report.n_rows_written = rows.len();
        self.if_sheet_written = true;
        Ok(())
    }
}

/// Write `${title}.xlsx` into `dir_out` with one sheet named after `title`.
pub fn write_spreadsheet(
    dir_out: &Path,
    title: &str,
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    options: &SpecXlsxSheetWriteOptions,
) -> Result<SpecXlsxReport, String> {
    let path_file_out = dir_out.join(derive_output_file_name(title, C_XLSX_EXTENSION));
    let mut writer = XlsxWriter::new(path_file_out, SpecXlsxFormatPresets::default());
    writer.write_sheet(title, headers, rows, options)?;
    writer.close()?;

    let report = writer.report();
    info!(
        file = %report.path_file_out.display(),
        sheet = %report.sheet_name,
        rows = report.n_rows_written,
        "spreadsheet written"
    );
    Ok(report)
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    fmt_text: &Format,
    fmt_number: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, fmt_text)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    val,
                    fmt_text,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(val) if val.is_finite() => {
            worksheet
                .write_number_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    *val,
                    fmt_number,
                )
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::Number(_) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    value.to_string(),
                    fmt_text,
                )
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new().set_align(FormatAlign::VerticalCenter);

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.as_str());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(f64::from(val));
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(align) = spec.align {
        format = format.set_align(derive_format_align(align));
    }
    if spec.if_border_thin.unwrap_or(false) {
        format = format.set_border(FormatBorder::Thin);
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.as_str());
    }
    if let Some(val) = spec.fill_rgb {
        format = format.set_background_color(Color::RGB(val));
    }
    if let Some(val) = spec.font_rgb {
        format = format.set_font_color(Color::RGB(val));
    }

    format
}

fn derive_format_align(align: EnumCellAlign) -> FormatAlign {
    match align {
        EnumCellAlign::Left => FormatAlign::Left,
        EnumCellAlign::Center => FormatAlign::Center,
        EnumCellAlign::Right => FormatAlign::Right,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}
