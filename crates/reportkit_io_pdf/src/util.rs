//! Text metric estimates and line wrapping for built-in Helvetica.

use crate::conf::{
    N_BASELINE_FACTOR, N_GLYPH_WIDTH_BOLD_EM, N_GLYPH_WIDTH_EM, N_LINE_HEIGHT_FACTOR,
    N_NON_ASCII_WIDTH_FACTOR, N_PT_TO_MM,
};

/// Estimated rendered width of `text`.
pub fn estimate_text_width_mm(text: &str, font_size_pt: f64, if_bold: bool) -> f64 {
    let n_em = if if_bold {
        N_GLYPH_WIDTH_BOLD_EM
    } else {
        N_GLYPH_WIDTH_EM
    };
    let n_units: f64 = text
        .chars()
        .map(|chr| {
            if chr.is_ascii() {
                1.0
            } else {
                N_NON_ASCII_WIDTH_FACTOR
            }
        })
        .sum();
    n_units * n_em * font_size_pt * N_PT_TO_MM
}

/// Line height for `font_size_pt`.
pub fn derive_line_height_mm(font_size_pt: f64) -> f64 {
    font_size_pt * N_PT_TO_MM * N_LINE_HEIGHT_FACTOR
}

/// Baseline offset below the top of a line box.
pub fn derive_baseline_offset_mm(font_size_pt: f64) -> f64 {
    derive_line_height_mm(font_size_pt) * N_BASELINE_FACTOR
}

/// Greedy word wrap to `width_mm`; words wider than a line are split.
///
/// Always returns at least one line. Explicit newlines are kept.
pub fn wrap_text_to_width(
    text: &str,
    width_mm: f64,
    font_size_pt: f64,
    if_bold: bool,
) -> Vec<String> {
    if width_mm <= 0.0 {
        return vec![text.to_string()];
    }
    let fits = |s: &str| estimate_text_width_mm(s, font_size_pt, if_bold) <= width_mm;

    let mut l_lines = Vec::new();
    for c_paragraph in text.split('\n') {
        let mut c_line = String::new();
        for c_word in c_paragraph.split_whitespace() {
            let c_candidate = if c_line.is_empty() {
                c_word.to_string()
            } else {
                format!("{c_line} {c_word}")
            };
            if fits(&c_candidate) {
                c_line = c_candidate;
                continue;
            }

            if !c_line.is_empty() {
                l_lines.push(std::mem::take(&mut c_line));
            }
            if fits(c_word) {
                c_line = c_word.to_string();
                continue;
            }

            for chr in c_word.chars() {
                c_line.push(chr);
                if !fits(&c_line) && c_line.chars().count() > 1 {
                    c_line.pop();
                    l_lines.push(std::mem::take(&mut c_line));
                    c_line.push(chr);
                }
            }
        }
        l_lines.push(c_line);
    }
    l_lines
}
