//! Whole-document composition for the three document kinds.
//!
//! Each function builds a complete [`DocumentCanvas`] in memory; saving is the
//! writer's job.

use reportkit_io::{C_COLUMN_NAME_TOTAL, EnumCellValue, derive_column_index};
use tracing::debug;

use crate::canvas::DocumentCanvas;
use crate::card::compose_card_grid;
use crate::conf::{C_CARD_PAGE_HEADING, N_HEADERS_PORTRAIT_MAX};
use crate::section::{
    compose_catalog_sections, compose_schedule_days, compose_title, derive_total_cell_style,
};
use crate::spec::{
    EnumOrientation, SpecCard, SpecCardGridPolicy, SpecCatalogSection, SpecDocumentOptions,
    SpecScheduleDay,
};
use crate::table::render_table;

/// Landscape once the table has more than eight columns.
pub fn derive_orientation(n_headers: usize) -> EnumOrientation {
    if n_headers > N_HEADERS_PORTRAIT_MAX {
        EnumOrientation::Landscape
    } else {
        EnumOrientation::Portrait
    }
}

fn create_canvas(title: &str, headers: &[String], options: &SpecDocumentOptions) -> DocumentCanvas {
    let orientation = derive_orientation(headers.len());
    debug!(title, headers = headers.len(), ?orientation, "document orientation");
    DocumentCanvas::new(title, options.derive_page_geometry(orientation))
}

/// Title followed by a single table.
pub fn compose_table_document(
    title: &str,
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    options: &SpecDocumentOptions,
) -> DocumentCanvas {
    let mut canvas = create_canvas(title, headers, options);
    let idx_total = derive_column_index(headers, C_COLUMN_NAME_TOTAL);

    let cursor = canvas.cursor_start();
    let cursor = compose_title(&mut canvas, cursor, title);
    render_table(&mut canvas, cursor, headers, rows, |_, n_col, _| {
        derive_total_cell_style(n_col, idx_total)
    });
    canvas
}

/// Title followed by one labeled table per section.
pub fn compose_catalog_document(
    title: &str,
    headers: &[String],
    sections: &[SpecCatalogSection],
    options: &SpecDocumentOptions,
) -> DocumentCanvas {
    let mut canvas = create_canvas(title, headers, options);
    let idx_total = derive_column_index(headers, C_COLUMN_NAME_TOTAL);

    let cursor = canvas.cursor_start();
    let cursor = compose_title(&mut canvas, cursor, title);
    compose_catalog_sections(&mut canvas, cursor, headers, sections, |_, n_col, _| {
        derive_total_cell_style(n_col, idx_total)
    });
    canvas
}

/// Optional card page, then one page per day.
///
/// Cards of every day are gathered, in day order, onto a single leading
/// page. Without cards the first day starts on the first page.
pub fn compose_schedule_document(
    title: &str,
    headers: &[String],
    days: &[SpecScheduleDay],
    options: &SpecDocumentOptions,
    policy: &SpecCardGridPolicy,
) -> DocumentCanvas {
    let mut canvas = create_canvas(title, headers, options);
    let l_cards: Vec<SpecCard> = days.iter().flat_map(|day| day.cards.iter().cloned()).collect();

    let mut cursor = canvas.cursor_start();
    let if_card_page = !l_cards.is_empty();
    if if_card_page {
        cursor = compose_title(&mut canvas, cursor, &format!("{title} - {C_CARD_PAGE_HEADING}"));
        cursor = compose_card_grid(&mut canvas, cursor, &l_cards, policy);
        debug!(cards = l_cards.len(), pages = canvas.n_pages(), "card page composed");
    }

    compose_schedule_days(&mut canvas, cursor, title, headers, days, if_card_page);
    canvas
}
