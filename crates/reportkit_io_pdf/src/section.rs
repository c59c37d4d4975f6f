//! Section layout: catalog blocks and per-day schedule pages.

use std::ops::Range;

use reportkit_io::{
    C_COLUMN_NAME_TOTAL, EnumCellValue, derive_block_column_range, derive_column_index,
    is_block_value_present,
};
use tracing::debug;

use crate::canvas::DocumentCanvas;
use crate::color::{EnumStage, blend_toward_white, stage_color};
use crate::conf::{
    N_FONT_SIZE_LEGEND_PT, N_FONT_SIZE_SECTION_PT, N_FONT_SIZE_TITLE_PT, N_HIGHLIGHT_ALPHA,
    N_LEGEND_ITEM_GAP_MM, N_LEGEND_LABEL_GAP_MM, N_LEGEND_ROW_HEIGHT_MM, N_LEGEND_SWATCH_MM,
    N_SECTION_LABEL_SPACING_MM, N_SECTION_SPACING_MM, N_TITLE_SPACING_MM, RGB_TEXT_DEFAULT,
};
use crate::spec::{SpecCatalogSection, SpecCellStyle, SpecCursor, SpecScheduleDay};
use crate::table::render_table;
use crate::util::{derive_baseline_offset_mm, derive_line_height_mm, estimate_text_width_mm};

////////////////////////////////////////////////////////////////////////////////
// #region TextLines

/// Bold title line at the cursor.
pub fn compose_title(canvas: &mut DocumentCanvas, cursor: SpecCursor, text: &str) -> SpecCursor {
    compose_bold_line(canvas, cursor, text, N_FONT_SIZE_TITLE_PT, N_TITLE_SPACING_MM)
}

fn compose_bold_line(
    canvas: &mut DocumentCanvas,
    cursor: SpecCursor,
    text: &str,
    font_size_pt: f64,
    spacing_mm: f64,
) -> SpecCursor {
    let n_margin = canvas.geometry().margin_mm;
    canvas.draw_text(
        cursor.page_idx,
        n_margin,
        cursor.y + derive_baseline_offset_mm(font_size_pt),
        text,
        font_size_pt,
        true,
        RGB_TEXT_DEFAULT,
    );
    cursor.advanced(derive_line_height_mm(font_size_pt) + spacing_mm)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellStyles

/// Bold the `TOTAL` column; everything else keeps the default.
pub fn derive_total_cell_style(col_idx: usize, idx_total: Option<usize>) -> SpecCellStyle {
    if Some(col_idx) == idx_total {
        SpecCellStyle {
            bold: Some(true),
            ..Default::default()
        }
    } else {
        SpecCellStyle::default()
    }
}

/// Schedule styling: filled block cells take the row's stage color over a
/// light fill of the same hue; the `TOTAL` column is bold.
pub fn derive_schedule_cell_style(
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    block_range: Option<&Range<usize>>,
    idx_total: Option<usize>,
    stage_tags: &[String],
) -> SpecCellStyle {
    let if_block_col = block_range.is_some_and(|range| range.contains(&col_idx));
    if if_block_col && is_block_value_present(value) {
        let c_tag = stage_tags.get(row_idx).map_or("", String::as_str);
        let rgb_stage = stage_color(c_tag);
        return SpecCellStyle {
            fill_color: Some(blend_toward_white(rgb_stage, N_HIGHLIGHT_ALPHA)),
            text_color: Some(rgb_stage),
            bold: Some(true),
        };
    }
    derive_total_cell_style(col_idx, idx_total)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CatalogMode

/// One bold-labeled table per section.
///
/// The page-break check runs before each section against the cursor left by
/// the previous one; a section that starts above the threshold is never
/// moved, its table paginates on its own.
pub fn compose_catalog_sections<F>(
    canvas: &mut DocumentCanvas,
    cursor: SpecCursor,
    headers: &[String],
    sections: &[SpecCatalogSection],
    style_fn: F,
) -> SpecCursor
where
    F: Fn(usize, usize, &EnumCellValue) -> SpecCellStyle,
{
    let n_break_y = canvas.geometry().section_break_y_mm();
    let mut cursor = cursor;

    for (n_idx_section, section) in sections.iter().enumerate() {
        if cursor.y > n_break_y {
            cursor = canvas.start_page();
            debug!(
                section = n_idx_section,
                page = cursor.page_idx,
                "catalog section starts a new page"
            );
        }
        cursor = compose_bold_line(
            canvas,
            cursor,
            &section.label,
            N_FONT_SIZE_SECTION_PT,
            N_SECTION_LABEL_SPACING_MM,
        );
        cursor = render_table(canvas, cursor, headers, &section.rows, &style_fn);
        cursor = cursor.advanced(N_SECTION_SPACING_MM);
    }

    cursor
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DailyScheduleMode

/// Swatch + label per legend stage, left to right.
pub fn compose_legend(canvas: &mut DocumentCanvas, cursor: SpecCursor) -> SpecCursor {
    let mut x = canvas.geometry().margin_mm;
    let n_text_y = cursor.y + N_LEGEND_SWATCH_MM * 0.85;

    for stage in EnumStage::LEGEND {
        let c_label = stage.label();
        canvas.draw_rect(
            cursor.page_idx,
            x,
            cursor.y,
            N_LEGEND_SWATCH_MM,
            N_LEGEND_SWATCH_MM,
            Some(stage.color()),
            None,
        );
        let n_label_x = x + N_LEGEND_SWATCH_MM + N_LEGEND_LABEL_GAP_MM;
        canvas.draw_text(
            cursor.page_idx,
            n_label_x,
            n_text_y,
            c_label,
            N_FONT_SIZE_LEGEND_PT,
            false,
            RGB_TEXT_DEFAULT,
        );
        x = n_label_x
            + estimate_text_width_mm(c_label, N_FONT_SIZE_LEGEND_PT, false)
            + N_LEGEND_ITEM_GAP_MM;
    }

    cursor.advanced(N_LEGEND_ROW_HEIGHT_MM)
}

/// One page per day: title, legend, stage-colored table.
///
/// The first day reuses `cursor` unless `if_new_page_first` is set (a card
/// page precedes it); every later day starts a fresh page.
pub fn compose_schedule_days(
    canvas: &mut DocumentCanvas,
    cursor: SpecCursor,
    title: &str,
    headers: &[String],
    days: &[SpecScheduleDay],
    if_new_page_first: bool,
) -> SpecCursor {
    let block_range = derive_block_column_range(headers);
    let idx_total = derive_column_index(headers, C_COLUMN_NAME_TOTAL);
    if block_range.is_none() {
        debug!("HC/TOTAL columns not found; block highlighting disabled");
    }

    let mut cursor = cursor;
    for (n_idx_day, day) in days.iter().enumerate() {
        if n_idx_day > 0 || if_new_page_first {
            cursor = canvas.start_page();
        }
        debug!(day = %day.day, page = cursor.page_idx, rows = day.rows.len(), "schedule day");

        cursor = compose_title(canvas, cursor, &format!("{title} - {}", day.day));
        cursor = compose_legend(canvas, cursor);
        cursor = render_table(canvas, cursor, headers, &day.rows, |n_row, n_col, value| {
            derive_schedule_cell_style(
                n_row,
                n_col,
                value,
                block_range.as_ref(),
                idx_total,
                &day.stage_tags,
            )
        });
    }

    cursor
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
