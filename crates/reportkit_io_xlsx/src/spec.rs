//! Spreadsheet formats, write options and the export report.

use std::path::PathBuf;

use crate::conf::{
    N_AUTOFIT_ROWS_SAMPLED_MAX, N_AUTOFIT_WIDTH_MAX, N_AUTOFIT_WIDTH_MIN, N_AUTOFIT_WIDTH_PADDING,
};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormat

/// Horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumCellAlign {
    Left,
    Center,
    Right,
}

/// Cell format preset; `None` leaves the workbook default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<u16>,
    pub bold: Option<bool>,
    pub align: Option<EnumCellAlign>,
    /// Thin border on all sides.
    pub if_border_thin: Option<bool>,
    /// Excel number format code.
    pub num_format: Option<String>,
    /// Background fill as `0xRRGGBB`.
    pub fill_rgb: Option<u32>,
    /// Font color as `0xRRGGBB`.
    pub font_rgb: Option<u32>,
}

impl SpecCellFormat {
    /// Overlay `other` onto `self`; set fields of `other` win.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.or(self.align),
            if_border_thin: other.if_border_thin.or(self.if_border_thin),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            fill_rgb: other.fill_rgb.or(self.fill_rgb),
            font_rgb: other.font_rgb.or(self.font_rgb),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Which cells drive the column width estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Keep Excel's default widths.
    None,
    Header,
    Body,
    #[default]
    All,
}

/// Column width estimate for the exported sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    pub rule_columns: EnumAutofitColumnsRule,
    /// Body rows sampled; `None` samples every row.
    pub n_rows_sampled_max: Option<usize>,
    pub n_width_min: usize,
    pub n_width_max: usize,
    /// Characters added to the widest sampled value.
    pub n_width_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            rule_columns: EnumAutofitColumnsRule::All,
            n_rows_sampled_max: Some(N_AUTOFIT_ROWS_SAMPLED_MAX),
            n_width_min: N_AUTOFIT_WIDTH_MIN,
            n_width_max: N_AUTOFIT_WIDTH_MAX,
            n_width_padding: N_AUTOFIT_WIDTH_PADDING,
        }
    }
}

/// Options for the single exported sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxSheetWriteOptions {
    /// Column autofit policy.
    pub policy_autofit: SpecAutofitCellsPolicy,
    /// Freeze the header row.
    pub if_freeze_header: bool,
}

impl Default for SpecXlsxSheetWriteOptions {
    fn default() -> Self {
        Self {
            policy_autofit: SpecAutofitCellsPolicy::default(),
            if_freeze_header: true,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Outcome of one spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Workbook path written on close.
    pub path_file_out: PathBuf,
    /// Actual sheet name in the workbook.
    pub sheet_name: String,
    /// Body rows written (header excluded).
    pub n_rows_written: usize,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
