//! Document specification models: geometry, cursor, styles, draw plan and
//! section/card inputs.

use reportkit_io::EnumCellValue;
use serde::{Deserialize, Serialize};

use crate::color::ColorRgb;
use crate::conf::{
    N_SECTION_BREAK_OFFSET_MM, derive_default_card_grid_policy, derive_default_document_options,
    derive_default_table_theme,
};

////////////////////////////////////////////////////////////////////////////////
// #region PageGeometry

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Caller-tunable paper and margin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecDocumentOptions {
    /// Paper short edge.
    pub paper_width_mm: f64,
    /// Paper long edge.
    pub paper_height_mm: f64,
    /// Left/right/bottom margin.
    pub margin_mm: f64,
    /// Cursor position on every fresh page.
    pub cursor_top_mm: f64,
}

impl Default for SpecDocumentOptions {
    fn default() -> Self {
        derive_default_document_options()
    }
}

impl SpecDocumentOptions {
    /// Resolve page geometry for `orientation`.
    pub fn derive_page_geometry(&self, orientation: EnumOrientation) -> SpecPageGeometry {
        let n_short = f64::min(self.paper_width_mm, self.paper_height_mm);
        let n_long = f64::max(self.paper_width_mm, self.paper_height_mm);
        let (page_width_mm, page_height_mm) = match orientation {
            EnumOrientation::Portrait => (n_short, n_long),
            EnumOrientation::Landscape => (n_long, n_short),
        };
        SpecPageGeometry {
            orientation,
            page_width_mm,
            page_height_mm,
            margin_mm: self.margin_mm,
            cursor_top_mm: self.cursor_top_mm,
        }
    }
}

/// Resolved page geometry for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecPageGeometry {
    pub orientation: EnumOrientation,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
    pub cursor_top_mm: f64,
}

impl Default for SpecPageGeometry {
    fn default() -> Self {
        SpecDocumentOptions::default().derive_page_geometry(EnumOrientation::Portrait)
    }
}

impl SpecPageGeometry {
    /// Printable width between left and right margins.
    pub fn content_width_mm(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Lowest y any content may reach.
    pub fn bottom_limit_mm(&self) -> f64 {
        self.page_height_mm - self.margin_mm
    }

    /// Catalog sections starting below this y go to a new page.
    pub fn section_break_y_mm(&self) -> f64 {
        self.page_height_mm - N_SECTION_BREAK_OFFSET_MM
    }
}

/// Vertical write position: page index plus y offset from the page top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecCursor {
    pub page_idx: usize,
    pub y: f64,
}

impl SpecCursor {
    /// Same page, `dy` further down.
    pub fn advanced(self, dy: f64) -> Self {
        Self {
            page_idx: self.page_idx,
            y: self.y + dy,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellStyle

/// Per-cell style override; `None` keeps the renderer default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecCellStyle {
    pub fill_color: Option<ColorRgb>,
    pub text_color: Option<ColorRgb>,
    pub bold: Option<bool>,
}

impl SpecCellStyle {
    /// Merge two styles with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellStyle) -> SpecCellStyle {
        SpecCellStyle {
            fill_color: other.fill_color.or(self.fill_color),
            text_color: other.text_color.or(self.text_color),
            bold: other.bold.or(self.bold),
        }
    }
}

/// Table colors and metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTableTheme {
    pub font_size_pt: f64,
    pub cell_padding_mm: f64,
    pub column_width_min_mm: f64,
    pub header_fill: ColorRgb,
    pub header_text: ColorRgb,
    pub body_text: ColorRgb,
    pub grid: ColorRgb,
}

impl Default for SpecTableTheme {
    fn default() -> Self {
        derive_default_table_theme()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DrawPlan

/// One primitive on a page, positioned in millimetres from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumDrawOp {
    /// Single text line; `y` is the baseline.
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size_pt: f64,
        bold: bool,
        color: ColorRgb,
    },
    /// Axis-aligned rectangle; `y` is the top edge.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<ColorRgb>,
        stroke: Option<ColorRgb>,
    },
}

/// Draw operations of one page in paint order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecPagePlan {
    pub ops: Vec<EnumDrawOp>,
}

impl SpecPagePlan {
    /// Text of every text op on the page.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                EnumDrawOp::Text { text, .. } => Some(text.as_str()),
                EnumDrawOp::Rect { .. } => None,
            })
            .collect()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SectionInputs

/// Catalog section: bold label followed by its table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecCatalogSection {
    pub label: String,
    #[serde(default)]
    pub rows: Vec<Vec<EnumCellValue>>,
}

/// One schedule day: its own page, legend and stage-colored table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecScheduleDay {
    pub day: String,
    #[serde(default)]
    pub rows: Vec<Vec<EnumCellValue>>,
    /// Stage tag per row, same length as `rows`.
    #[serde(default)]
    pub stage_tags: Vec<String>,
    /// Externally produced / unassigned work summarized as cards.
    #[serde(default)]
    pub cards: Vec<SpecCard>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CardGrid

/// Summary card for externally produced or unassigned work.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecCard {
    pub primary_label: String,
    #[serde(default)]
    pub secondary_label: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Selects the amber accent (unassigned work).
    #[serde(default)]
    pub flagged: bool,
}

/// Card grid sizing policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCardGridPolicy {
    pub n_cols_max: usize,
    pub gap_mm: f64,
    pub base_height_mm: f64,
    pub line_spacing_mm: f64,
    pub padding_mm: f64,
}

impl Default for SpecCardGridPolicy {
    fn default() -> Self {
        derive_default_card_grid_policy()
    }
}

impl SpecCardGridPolicy {
    /// `base + lines * spacing + padding`.
    pub fn card_height_mm(&self, card: &SpecCard) -> f64 {
        self.base_height_mm + card.lines.len() as f64 * self.line_spacing_mm + self.padding_mm
    }
}

/// Position of one card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecCardPlacement {
    /// Index into the input cards.
    pub idx_card: usize,
    /// Pages after the grid's first page.
    pub n_page_offset: usize,
    pub n_row: usize,
    pub n_col: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub accent: ColorRgb,
}

/// Complete grid layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecCardGridLayout {
    pub n_cols: usize,
    pub n_rows: usize,
    pub placements: Vec<SpecCardPlacement>,
    /// Page offset of the cursor after the grid.
    pub n_page_offset_end: usize,
    /// Cursor y after the grid.
    pub y_end: f64,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
