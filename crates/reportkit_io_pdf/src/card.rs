//! Card grid: summary cards for external / unassigned work.

use reportkit_io::EnumCellValue;
use tracing::debug;

use crate::canvas::DocumentCanvas;
use crate::color::derive_card_accent;
use crate::conf::{
    N_CARD_ACCENT_WIDTH_MM, N_FONT_SIZE_CARD_DETAIL_PT, N_FONT_SIZE_CARD_PRIMARY_PT,
    RGB_CARD_BORDER, RGB_TEXT_DEFAULT,
};
use crate::spec::{
    SpecCard, SpecCardGridLayout, SpecCardGridPolicy, SpecCardPlacement, SpecCursor,
    SpecPageGeometry,
};

const N_CARD_TEXT_INSET_MM: f64 = 3.0;
const N_CARD_PRIMARY_OFFSET_MM: f64 = 6.0;
const N_CARD_SECONDARY_OFFSET_MM: f64 = 11.0;
const N_CARD_QUANTITY_OFFSET_MM: f64 = 16.0;

/// Place `cards` left to right, top to bottom, starting at `y_start`.
///
/// Columns are `min(len, n_cols_max)` and share one width. Heights vary per
/// card. On wrap the next row starts below the last card placed, not the
/// tallest card of the row. A row whose tallest card would cross the bottom
/// margin moves to the next page as a whole.
pub fn layout_cards(
    cards: &[SpecCard],
    geometry: &SpecPageGeometry,
    y_start: f64,
    policy: &SpecCardGridPolicy,
) -> SpecCardGridLayout {
    let n_cols = cards.len().min(policy.n_cols_max.max(1));
    if n_cols == 0 {
        return SpecCardGridLayout {
            y_end: y_start,
            ..Default::default()
        };
    }

    let n_width =
        (geometry.content_width_mm() - policy.gap_mm * (n_cols - 1) as f64) / n_cols as f64;
    let n_bottom = geometry.bottom_limit_mm();

    let mut l_placements = Vec::with_capacity(cards.len());
    let mut y = y_start;
    let mut n_row = 0usize;
    let mut n_page_offset = 0usize;
    let mut n_height_last = 0.0;

    for (n_idx_card, card) in cards.iter().enumerate() {
        let n_col = n_idx_card % n_cols;
        let n_height = policy.card_height_mm(card);

        if n_idx_card > 0 && n_col == 0 {
            y += n_height_last + policy.gap_mm;
            n_row += 1;
        }
        if n_col == 0 {
            let n_height_row_max = cards[n_idx_card..cards.len().min(n_idx_card + n_cols)]
                .iter()
                .map(|card_row| policy.card_height_mm(card_row))
                .fold(0.0, f64::max);
            if y + n_height_row_max > n_bottom && y > geometry.cursor_top_mm {
                n_page_offset += 1;
                y = geometry.cursor_top_mm;
            }
        }

        l_placements.push(SpecCardPlacement {
            idx_card: n_idx_card,
            n_page_offset,
            n_row,
            n_col,
            x: geometry.margin_mm + n_col as f64 * (n_width + policy.gap_mm),
            y,
            width: n_width,
            height: n_height,
            accent: derive_card_accent(card.flagged),
        });
        n_height_last = n_height;
    }

    SpecCardGridLayout {
        n_cols,
        n_rows: n_row + 1,
        placements: l_placements,
        n_page_offset_end: n_page_offset,
        y_end: y + n_height_last + policy.gap_mm,
    }
}

/// Lay out and paint `cards` from `cursor`; return the cursor below the grid.
pub fn compose_card_grid(
    canvas: &mut DocumentCanvas,
    cursor: SpecCursor,
    cards: &[SpecCard],
    policy: &SpecCardGridPolicy,
) -> SpecCursor {
    let layout = layout_cards(cards, canvas.geometry(), cursor.y, policy);
    debug!(
        cards = cards.len(),
        cols = layout.n_cols,
        rows = layout.n_rows,
        "card grid laid out"
    );

    for placement in &layout.placements {
        paint_card(
            canvas,
            cursor.page_idx + placement.n_page_offset,
            placement,
            &cards[placement.idx_card],
            policy,
        );
    }

    SpecCursor {
        page_idx: cursor.page_idx + layout.n_page_offset_end,
        y: layout.y_end,
    }
}

fn paint_card(
    canvas: &mut DocumentCanvas,
    page_idx: usize,
    placement: &SpecCardPlacement,
    card: &SpecCard,
    policy: &SpecCardGridPolicy,
) {
    let (x, y) = (placement.x, placement.y);
    canvas.draw_rect(
        page_idx,
        x,
        y,
        placement.width,
        placement.height,
        None,
        Some(RGB_CARD_BORDER),
    );
    canvas.draw_rect(
        page_idx,
        x,
        y,
        N_CARD_ACCENT_WIDTH_MM,
        placement.height,
        Some(placement.accent),
        None,
    );

    let n_text_x = x + N_CARD_ACCENT_WIDTH_MM + N_CARD_TEXT_INSET_MM;
    canvas.draw_text(
        page_idx,
        n_text_x,
        y + N_CARD_PRIMARY_OFFSET_MM,
        card.primary_label.as_str(),
        N_FONT_SIZE_CARD_PRIMARY_PT,
        true,
        RGB_TEXT_DEFAULT,
    );
    if !card.secondary_label.is_empty() {
        canvas.draw_text(
            page_idx,
            n_text_x,
            y + N_CARD_SECONDARY_OFFSET_MM,
            card.secondary_label.as_str(),
            N_FONT_SIZE_CARD_DETAIL_PT,
            false,
            RGB_TEXT_DEFAULT,
        );
    }
    canvas.draw_text(
        page_idx,
        n_text_x,
        y + N_CARD_QUANTITY_OFFSET_MM,
        format!("Qty: {}", EnumCellValue::Number(card.quantity)),
        N_FONT_SIZE_CARD_DETAIL_PT,
        false,
        placement.accent,
    );
    for (n_idx_line, c_line) in card.lines.iter().enumerate() {
        canvas.draw_text(
            page_idx,
            n_text_x,
            y + policy.base_height_mm + n_idx_line as f64 * policy.line_spacing_mm,
            c_line.as_str(),
            N_FONT_SIZE_CARD_DETAIL_PT,
            false,
            RGB_TEXT_DEFAULT,
        );
    }
}
