//! `reportkit_io_pdf` v1:
//! Document side of the report export kernel.
//!
//! Layout is planned in memory as pages of draw operations and painted by
//! printpdf only at the end:
//! - `conf`     : page geometry, font and color constants, default presets
//! - `spec`     : geometry, cursor, cell style, draw plan and section inputs
//! - `util`     : text metrics and wrapping
//! - `color`    : stage colors and highlight blending
//! - `canvas`   : in-memory multi-page document
//! - `table`    : grid table composer driven by a per-cell style function
//! - `section`  : catalog sections and daily schedule pages
//! - `card`     : summary card grid
//! - `document` : whole-document composition per document kind
//! - `writer`   : printpdf-backed renderer
pub mod canvas;
pub mod card;
pub mod color;
pub mod conf;
pub mod document;
pub mod section;
pub mod spec;
pub mod table;
pub mod util;
pub mod writer;

pub use canvas::DocumentCanvas;
pub use card::{compose_card_grid, layout_cards};
pub use color::{
    ColorRgb, EnumStage, blend_toward_white, derive_card_accent, derive_stage, stage_color,
};
pub use document::{
    compose_catalog_document, compose_schedule_document, compose_table_document,
    derive_orientation,
};
pub use section::{
    compose_catalog_sections, compose_legend, compose_schedule_days, compose_title,
    derive_schedule_cell_style, derive_total_cell_style,
};
pub use spec::{
    EnumDrawOp, EnumOrientation, SpecCard, SpecCardGridLayout, SpecCardGridPolicy,
    SpecCardPlacement, SpecCatalogSection, SpecCellStyle, SpecCursor, SpecDocumentOptions,
    SpecPageGeometry, SpecPagePlan, SpecScheduleDay, SpecTableTheme,
};
pub use table::{plan_table_column_widths, render_table};
pub use writer::{write_document, write_document_file};
