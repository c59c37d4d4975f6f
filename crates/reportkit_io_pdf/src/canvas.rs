//! In-memory document: pages of draw operations, finalized by the writer.

use crate::color::ColorRgb;
use crate::spec::{EnumDrawOp, SpecCursor, SpecPageGeometry, SpecPagePlan, SpecTableTheme};

/// Document under construction.
///
/// Nothing touches the filesystem until [`crate::writer::write_document`].
#[derive(Debug, Clone)]
pub struct DocumentCanvas {
    title: String,
    geometry: SpecPageGeometry,
    table_theme: SpecTableTheme,
    pages: Vec<SpecPagePlan>,
}

impl DocumentCanvas {
    /// Create a document with one empty page.
    pub fn new(title: impl Into<String>, geometry: SpecPageGeometry) -> Self {
        Self {
            title: title.into(),
            geometry,
            table_theme: SpecTableTheme::default(),
            pages: vec![SpecPagePlan::default()],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn geometry(&self) -> &SpecPageGeometry {
        &self.geometry
    }

    pub fn table_theme(&self) -> &SpecTableTheme {
        &self.table_theme
    }

    pub fn pages(&self) -> &[SpecPagePlan] {
        &self.pages
    }

    pub fn n_pages(&self) -> usize {
        self.pages.len()
    }

    /// Cursor at the top of the first page.
    pub fn cursor_start(&self) -> SpecCursor {
        SpecCursor {
            page_idx: 0,
            y: self.geometry.cursor_top_mm,
        }
    }

    /// Append a page and return a cursor at its top.
    pub fn start_page(&mut self) -> SpecCursor {
        self.pages.push(SpecPagePlan::default());
        SpecCursor {
            page_idx: self.pages.len() - 1,
            y: self.geometry.cursor_top_mm,
        }
    }

    /// Append `op` to page `page_idx`, opening pages up to it if needed.
    pub fn push_op(&mut self, page_idx: usize, op: EnumDrawOp) {
        while self.pages.len() <= page_idx {
            self.pages.push(SpecPagePlan::default());
        }
        self.pages[page_idx].ops.push(op);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        page_idx: usize,
        x: f64,
        y: f64,
        text: impl Into<String>,
        font_size_pt: f64,
        bold: bool,
        color: ColorRgb,
    ) {
        self.push_op(
            page_idx,
            EnumDrawOp::Text {
                x,
                y,
                text: text.into(),
                font_size_pt,
                bold,
                color,
            },
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_rect(
        &mut self,
        page_idx: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<ColorRgb>,
        stroke: Option<ColorRgb>,
    ) {
        self.push_op(
            page_idx,
            EnumDrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            },
        );
    }
}
