//! Excel limits, sheet naming constants and default format presets.

use crate::spec::{EnumCellAlign, SpecCellFormat};

/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters Excel rejects in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
pub const C_SHEET_NAME_REPLACEMENT: &str = "_";
/// Sheet name used when the title is blank.
pub const C_SHEET_NAME_FALLBACK: &str = "Sheet";
pub const C_SHEET_NAME_QUOTE: char = '\'';
pub const C_XLSX_EXTENSION: &str = "xlsx";

pub const N_AUTOFIT_ROWS_SAMPLED_MAX: usize = 20_000;
pub const N_AUTOFIT_WIDTH_MIN: usize = 8;
pub const N_AUTOFIT_WIDTH_MAX: usize = 60;
pub const N_AUTOFIT_WIDTH_PADDING: usize = 2;
/// Width units per non-ASCII character.
pub const N_NON_ASCII_WIDTH_UNITS: f64 = 1.6;

/// Header fill, same slate as the document table header.
pub const N_RGB_HEADER_FILL: u32 = 0x29_41_5E;
pub const N_RGB_HEADER_FONT: u32 = 0xFF_FF_FF;

/// Formats used by [`crate::writer::XlsxWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxFormatPresets {
    pub text: SpecCellFormat,
    pub number: SpecCellFormat,
    pub header: SpecCellFormat,
}

impl Default for SpecXlsxFormatPresets {
    fn default() -> Self {
        derive_default_xlsx_formats()
    }
}

/// Calibri 11 body cells (numbers right-aligned) under a bold slate header.
pub fn derive_default_xlsx_formats() -> SpecXlsxFormatPresets {
    let cfg_base_fmt = SpecCellFormat {
        font_name: Some("Calibri".to_string()),
        font_size: Some(11),
        align: Some(EnumCellAlign::Left),
        ..Default::default()
    };

    SpecXlsxFormatPresets {
        number: cfg_base_fmt.merge(&SpecCellFormat {
            align: Some(EnumCellAlign::Right),
            num_format: Some("General".to_string()),
            ..Default::default()
        }),
        header: cfg_base_fmt.merge(&SpecCellFormat {
            bold: Some(true),
            align: Some(EnumCellAlign::Center),
            if_border_thin: Some(true),
            fill_rgb: Some(N_RGB_HEADER_FILL),
            font_rgb: Some(N_RGB_HEADER_FONT),
            ..Default::default()
        }),
        text: cfg_base_fmt,
    }
}
