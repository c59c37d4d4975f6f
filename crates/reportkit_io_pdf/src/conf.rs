//! Page geometry constants and default preset factories.
//!
//! All lengths are millimetres measured from the top-left page corner; font
//! sizes are points.

use crate::color::ColorRgb;
use crate::spec::{SpecCardGridPolicy, SpecDocumentOptions, SpecTableTheme};

/// A4 short edge.
pub const N_PAPER_WIDTH_A4_MM: f64 = 210.0;
/// A4 long edge.
pub const N_PAPER_HEIGHT_A4_MM: f64 = 297.0;
/// Left/right/bottom page margin.
pub const N_MARGIN_MM: f64 = 14.0;
/// Cursor position on every fresh page.
pub const N_CURSOR_TOP_MM: f64 = 20.0;
/// Catalog sections start a new page once the cursor passes `page_height - offset`.
pub const N_SECTION_BREAK_OFFSET_MM: f64 = 47.0;
/// Documents with more headers than this are laid out in landscape.
pub const N_HEADERS_PORTRAIT_MAX: usize = 8;

/// Points to millimetres.
pub const N_PT_TO_MM: f64 = 0.352_778;
/// Line height relative to font size.
pub const N_LINE_HEIGHT_FACTOR: f64 = 1.15;
/// Baseline offset inside a line, relative to line height.
pub const N_BASELINE_FACTOR: f64 = 0.8;
/// Average Helvetica glyph advance in em (regular).
pub const N_GLYPH_WIDTH_EM: f64 = 0.5;
/// Average Helvetica glyph advance in em (bold).
pub const N_GLYPH_WIDTH_BOLD_EM: f64 = 0.55;
/// Width multiplier for non-ASCII glyphs.
pub const N_NON_ASCII_WIDTH_FACTOR: f64 = 1.6;

pub const N_FONT_SIZE_TITLE_PT: f64 = 16.0;
pub const N_FONT_SIZE_SECTION_PT: f64 = 11.0;
pub const N_FONT_SIZE_TABLE_PT: f64 = 8.0;
pub const N_FONT_SIZE_LEGEND_PT: f64 = 8.0;
pub const N_FONT_SIZE_CARD_PRIMARY_PT: f64 = 10.0;
pub const N_FONT_SIZE_CARD_DETAIL_PT: f64 = 8.0;

/// Space after a title line.
pub const N_TITLE_SPACING_MM: f64 = 4.0;
/// Space after a catalog section label.
pub const N_SECTION_LABEL_SPACING_MM: f64 = 1.5;
/// Space after a catalog section table.
pub const N_SECTION_SPACING_MM: f64 = 8.0;

pub const N_LEGEND_SWATCH_MM: f64 = 4.0;
pub const N_LEGEND_LABEL_GAP_MM: f64 = 1.5;
pub const N_LEGEND_ITEM_GAP_MM: f64 = 6.0;
pub const N_LEGEND_ROW_HEIGHT_MM: f64 = 8.0;

/// Highlight fill strength behind stage-colored text.
pub const N_HIGHLIGHT_ALPHA: f64 = 0.2;

pub const N_CARD_COLS_MAX: usize = 3;
pub const N_CARD_GAP_MM: f64 = 5.0;
pub const N_CARD_BASE_HEIGHT_MM: f64 = 20.0;
pub const N_CARD_LINE_SPACING_MM: f64 = 4.5;
pub const N_CARD_PADDING_MM: f64 = 4.0;
pub const N_CARD_ACCENT_WIDTH_MM: f64 = 2.0;

/// Heading of the leading card page in schedule documents.
pub const C_CARD_PAGE_HEADING: &str = "Externos / sin asignar";
/// Output file extension.
pub const C_PDF_EXTENSION: &str = "pdf";

pub const RGB_TEXT_DEFAULT: ColorRgb = ColorRgb(33, 37, 41);
pub const RGB_TABLE_HEADER_FILL: ColorRgb = ColorRgb(41, 65, 94);
pub const RGB_TABLE_HEADER_TEXT: ColorRgb = ColorRgb::WHITE;
pub const RGB_TABLE_GRID: ColorRgb = ColorRgb(200, 200, 200);
pub const RGB_CARD_BORDER: ColorRgb = ColorRgb(210, 214, 220);

/// Build default document options (A4, portrait dimensions).
pub fn derive_default_document_options() -> SpecDocumentOptions {
    SpecDocumentOptions {
        paper_width_mm: N_PAPER_WIDTH_A4_MM,
        paper_height_mm: N_PAPER_HEIGHT_A4_MM,
        margin_mm: N_MARGIN_MM,
        cursor_top_mm: N_CURSOR_TOP_MM,
    }
}

/// Build default table theme.
pub fn derive_default_table_theme() -> SpecTableTheme {
    SpecTableTheme {
        font_size_pt: N_FONT_SIZE_TABLE_PT,
        cell_padding_mm: 1.5,
        column_width_min_mm: 12.0,
        header_fill: RGB_TABLE_HEADER_FILL,
        header_text: RGB_TABLE_HEADER_TEXT,
        body_text: RGB_TEXT_DEFAULT,
        grid: RGB_TABLE_GRID,
    }
}

/// Build default card grid policy.
pub fn derive_default_card_grid_policy() -> SpecCardGridPolicy {
    SpecCardGridPolicy {
        n_cols_max: N_CARD_COLS_MAX,
        gap_mm: N_CARD_GAP_MM,
        base_height_mm: N_CARD_BASE_HEIGHT_MM,
        line_spacing_mm: N_CARD_LINE_SPACING_MM,
        padding_mm: N_CARD_PADDING_MM,
    }
}
