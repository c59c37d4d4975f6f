//! Grid table composer.
//!
//! Renders one table from a cursor and hands back the cursor below it. The
//! composer knows nothing about stages or totals: every body cell's style
//! comes from the caller's `style_fn(row_idx, col_idx, raw_value)`.

use reportkit_io::EnumCellValue;
use tracing::debug;

use crate::canvas::DocumentCanvas;
use crate::color::ColorRgb;
use crate::spec::{SpecCellStyle, SpecCursor, SpecTableTheme};
use crate::util::{
    derive_baseline_offset_mm, derive_line_height_mm, estimate_text_width_mm, wrap_text_to_width,
};

/// Wrapped cell ready to paint.
#[derive(Debug, Clone, PartialEq)]
struct SpecLaidOutCell {
    lines: Vec<String>,
    fill: Option<ColorRgb>,
    text: ColorRgb,
    bold: bool,
}

/// Wrapped row with its height.
#[derive(Debug, Clone, PartialEq)]
struct SpecLaidOutRow {
    cells: Vec<SpecLaidOutCell>,
    height: f64,
}

/// Render `headers` + `rows` starting at `cursor`; return the cursor just
/// below the last row.
///
/// Rows that would cross the bottom margin continue on a new page with the
/// header repeated. The header is never left alone at the bottom of a page.
pub fn render_table<F>(
    canvas: &mut DocumentCanvas,
    cursor: SpecCursor,
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    style_fn: F,
) -> SpecCursor
where
    F: Fn(usize, usize, &EnumCellValue) -> SpecCellStyle,
{
    if headers.is_empty() {
        return cursor;
    }

    let geometry = canvas.geometry().clone();
    let theme = canvas.table_theme().clone();
    let l_widths = plan_table_column_widths(headers, rows, geometry.content_width_mm(), &theme);

    let style_header = SpecCellStyle {
        fill_color: Some(theme.header_fill),
        text_color: Some(theme.header_text),
        bold: Some(true),
    };
    let row_header = layout_row(
        headers
            .iter()
            .map(|c_header| (c_header.clone(), style_header)),
        &l_widths,
        &theme,
    );

    let value_empty = EnumCellValue::None;
    let l_body: Vec<SpecLaidOutRow> = rows
        .iter()
        .enumerate()
        .map(|(n_idx_row, row)| {
            let l_cells = (0..headers.len()).map(|n_idx_col| {
                let value = row.get(n_idx_col).unwrap_or(&value_empty);
                (value.to_string(), style_fn(n_idx_row, n_idx_col, value))
            });
            layout_row(l_cells, &l_widths, &theme)
        })
        .collect();

    let n_bottom = geometry.bottom_limit_mm();
    let mut cursor = cursor;

    let n_first_row_height = l_body.first().map_or(0.0, |row| row.height);
    if cursor.y + row_header.height + n_first_row_height > n_bottom
        && cursor.y > geometry.cursor_top_mm
    {
        cursor = canvas.start_page();
        debug!(page = cursor.page_idx, "table moved to a new page");
    }

    paint_row(canvas, cursor, &row_header, &l_widths, &theme, geometry.margin_mm);
    cursor = cursor.advanced(row_header.height);

    let mut n_rows_on_page = 0usize;
    for (n_idx_row, row) in l_body.iter().enumerate() {
        if cursor.y + row.height > n_bottom && n_rows_on_page > 0 {
            cursor = canvas.start_page();
            debug!(
                page = cursor.page_idx,
                row = n_idx_row,
                "table continues on a new page"
            );
            paint_row(canvas, cursor, &row_header, &l_widths, &theme, geometry.margin_mm);
            cursor = cursor.advanced(row_header.height);
            n_rows_on_page = 0;
        }
        paint_row(canvas, cursor, row, &l_widths, &theme, geometry.margin_mm);
        cursor = cursor.advanced(row.height);
        n_rows_on_page += 1;
    }

    cursor
}

/// Column widths proportional to each column's widest text, filling
/// `content_width_mm`.
pub fn plan_table_column_widths(
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    content_width_mm: f64,
    theme: &SpecTableTheme,
) -> Vec<f64> {
    let n_pad = 2.0 * theme.cell_padding_mm;
    let mut l_natural: Vec<f64> = headers
        .iter()
        .map(|c_header| estimate_text_width_mm(c_header, theme.font_size_pt, true) + n_pad)
        .collect();

    for row in rows {
        for (n_idx_col, value) in row.iter().take(headers.len()).enumerate() {
            let n_width = estimate_text_width_mm(&value.to_string(), theme.font_size_pt, false);
            l_natural[n_idx_col] = f64::max(l_natural[n_idx_col], n_width + n_pad);
        }
    }

    for n_width in l_natural.iter_mut() {
        *n_width = f64::max(*n_width, theme.column_width_min_mm);
    }

    let n_total: f64 = l_natural.iter().sum();
    if n_total <= 0.0 {
        return l_natural;
    }
    let n_scale = content_width_mm / n_total;
    l_natural.into_iter().map(|n_width| n_width * n_scale).collect()
}

fn layout_row(
    cells: impl Iterator<Item = (String, SpecCellStyle)>,
    widths: &[f64],
    theme: &SpecTableTheme,
) -> SpecLaidOutRow {
    let n_line_height = derive_line_height_mm(theme.font_size_pt);
    let l_cells: Vec<SpecLaidOutCell> = cells
        .zip(widths)
        .map(|((c_text, style), n_width)| {
            let if_bold = style.bold.unwrap_or(false);
            SpecLaidOutCell {
                lines: wrap_text_to_width(
                    &c_text,
                    n_width - 2.0 * theme.cell_padding_mm,
                    theme.font_size_pt,
                    if_bold,
                ),
                fill: style.fill_color,
                text: style.text_color.unwrap_or(theme.body_text),
                bold: if_bold,
            }
        })
        .collect();

    let n_lines_max = l_cells
        .iter()
        .map(|cell| cell.lines.len())
        .max()
        .unwrap_or(1);
    SpecLaidOutRow {
        cells: l_cells,
        height: n_lines_max as f64 * n_line_height + 2.0 * theme.cell_padding_mm,
    }
}

fn paint_row(
    canvas: &mut DocumentCanvas,
    cursor: SpecCursor,
    row: &SpecLaidOutRow,
    widths: &[f64],
    theme: &SpecTableTheme,
    x_start: f64,
) {
    let n_line_height = derive_line_height_mm(theme.font_size_pt);
    let n_baseline = derive_baseline_offset_mm(theme.font_size_pt);

    let mut x = x_start;
    for (cell, n_width) in row.cells.iter().zip(widths) {
        canvas.draw_rect(
            cursor.page_idx,
            x,
            cursor.y,
            *n_width,
            row.height,
            cell.fill,
            Some(theme.grid),
        );
        for (n_idx_line, c_line) in cell.lines.iter().enumerate() {
            if c_line.is_empty() {
                continue;
            }
            canvas.draw_text(
                cursor.page_idx,
                x + theme.cell_padding_mm,
                cursor.y + theme.cell_padding_mm + n_baseline + n_idx_line as f64 * n_line_height,
                c_line.clone(),
                theme.font_size_pt,
                cell.bold,
                cell.text,
            );
        }
        x += n_width;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::spec::{EnumDrawOp, SpecPageGeometry};

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|c_name| c_name.to_string()).collect()
    }

    fn numeric_rows(n_rows: usize) -> Vec<Vec<EnumCellValue>> {
        (0..n_rows)
            .map(|n_idx| {
                vec![
                    EnumCellValue::from(format!("M-{n_idx}")),
                    EnumCellValue::Number(n_idx as f64),
                ]
            })
            .collect()
    }

    fn no_style(_: usize, _: usize, _: &EnumCellValue) -> SpecCellStyle {
        SpecCellStyle::default()
    }

    #[test]
    fn test_render_table_returns_cursor_below_table() {
        let mut canvas = DocumentCanvas::new("T", SpecPageGeometry::default());
        let cursor = canvas.cursor_start();
        let theme = canvas.table_theme().clone();

        let cursor_end = render_table(
            &mut canvas,
            cursor,
            &headers(&["MODELO", "TOTAL"]),
            &numeric_rows(3),
            no_style,
        );

        let n_row_height = derive_line_height_mm(theme.font_size_pt) + 2.0 * theme.cell_padding_mm;
        assert_eq!(cursor_end.page_idx, 0);
        assert!((cursor_end.y - (cursor.y + 4.0 * n_row_height)).abs() < 1e-9);
        assert_eq!(canvas.pages()[0].texts().len(), 2 + 3 * 2);
    }

    #[test]
    fn test_style_fn_called_once_per_body_cell() {
        let mut canvas = DocumentCanvas::new("T", SpecPageGeometry::default());
        let l_calls = RefCell::new(Vec::new());

        render_table(
            &mut canvas,
            SpecCursor { page_idx: 0, y: 20.0 },
            &headers(&["A", "B", "C"]),
            &[
                vec![EnumCellValue::from("x"), EnumCellValue::Number(1.0)],
                vec![
                    EnumCellValue::from("y"),
                    EnumCellValue::Number(2.0),
                    EnumCellValue::from("z"),
                ],
            ],
            |n_row, n_col, value| {
                l_calls.borrow_mut().push((n_row, n_col, value.clone()));
                SpecCellStyle::default()
            },
        );

        let l_calls = l_calls.into_inner();
        assert_eq!(l_calls.len(), 6);
        assert_eq!(l_calls[2], (0, 2, EnumCellValue::None));
        assert_eq!(l_calls[5], (1, 2, EnumCellValue::from("z")));
    }

    #[test]
    fn test_style_override_reaches_draw_ops() {
        let mut canvas = DocumentCanvas::new("T", SpecPageGeometry::default());
        let rgb_fill = ColorRgb(1, 2, 3);
        let cursor = canvas.cursor_start();

        render_table(
            &mut canvas,
            cursor,
            &headers(&["A", "B"]),
            &[vec![EnumCellValue::from("x"), EnumCellValue::from("y")]],
            |_, n_col, _| {
                if n_col == 1 {
                    SpecCellStyle {
                        fill_color: Some(rgb_fill),
                        bold: Some(true),
                        ..Default::default()
                    }
                } else {
                    SpecCellStyle::default()
                }
            },
        );

        let l_ops = &canvas.pages()[0].ops;
        let n_filled = l_ops
            .iter()
            .filter(|op| matches!(op, EnumDrawOp::Rect { fill: Some(rgb), .. } if *rgb == rgb_fill))
            .count();
        assert_eq!(n_filled, 1);
        assert!(l_ops.iter().any(|op| matches!(
            op,
            EnumDrawOp::Text { text, bold: true, .. } if text == "y"
        )));
        assert!(l_ops.iter().any(|op| matches!(
            op,
            EnumDrawOp::Text { text, bold: false, .. } if text == "x"
        )));
    }

    #[test]
    fn test_overflow_continues_on_new_page_with_header() {
        let mut canvas = DocumentCanvas::new("T", SpecPageGeometry::default());
        let cursor = canvas.cursor_start();
        let cursor_end = render_table(
            &mut canvas,
            cursor,
            &headers(&["MODELO", "TOTAL"]),
            &numeric_rows(80),
            no_style,
        );

        assert!(canvas.n_pages() >= 2);
        assert_eq!(cursor_end.page_idx, canvas.n_pages() - 1);
        let n_bottom = canvas.geometry().bottom_limit_mm();
        for page in canvas.pages() {
            assert_eq!(page.texts()[..2], ["MODELO", "TOTAL"]);
            for op in &page.ops {
                if let EnumDrawOp::Rect { y, height, .. } = op {
                    assert!(y + height <= n_bottom + 1e-9);
                }
            }
        }
        let n_body_texts: usize = canvas
            .pages()
            .iter()
            .map(|page| page.texts().len() - 2)
            .sum();
        assert_eq!(n_body_texts, 160);
    }

    #[test]
    fn test_header_not_orphaned_at_page_bottom() {
        let mut canvas = DocumentCanvas::new("T", SpecPageGeometry::default());
        let n_y_near_bottom = canvas.geometry().bottom_limit_mm() - 8.0;

        let cursor_end = render_table(
            &mut canvas,
            SpecCursor { page_idx: 0, y: n_y_near_bottom },
            &headers(&["A"]),
            &numeric_rows(1),
            no_style,
        );

        assert!(canvas.pages()[0].ops.is_empty());
        assert_eq!(cursor_end.page_idx, 1);
    }

    #[test]
    fn test_column_widths_fill_content_width() {
        let theme = SpecTableTheme::default();
        let l_widths = plan_table_column_widths(
            &headers(&["MODELO", "HC", "DESCRIPCION"]),
            &[vec![
                EnumCellValue::from("A"),
                EnumCellValue::Number(3.0),
                EnumCellValue::from("pieza larga con descripcion extensa"),
            ]],
            182.0,
            &theme,
        );
        assert_eq!(l_widths.len(), 3);
        assert!((l_widths.iter().sum::<f64>() - 182.0).abs() < 1e-9);
        assert!(l_widths[2] > l_widths[0]);
        assert!(l_widths[0] >= l_widths[1]);
    }

    #[test]
    fn test_empty_headers_render_nothing() {
        let mut canvas = DocumentCanvas::new("T", SpecPageGeometry::default());
        let cursor = canvas.cursor_start();
        assert_eq!(render_table(&mut canvas, cursor, &[], &numeric_rows(2), no_style), cursor);
        assert!(canvas.pages()[0].ops.is_empty());
    }
}
