//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::{BTreeMap, BTreeSet};

use reportkit_io::EnumCellValue;

use crate::conf::{
    C_SHEET_NAME_FALLBACK, C_SHEET_NAME_QUOTE, N_LEN_EXCEL_SHEET_NAME_MAX, N_NON_ASCII_WIDTH_UNITS,
    TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumAutofitColumnsRule, SpecAutofitCellsPolicy};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to a valid Excel sheet name.
///
/// Excel rejects names that start or end with an apostrophe, so those are
/// stripped after truncation.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }

    let c_name: String = c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect();
    let c_name = c_name.trim_matches(C_SHEET_NAME_QUOTE);
    if c_name.trim().is_empty() {
        return C_SHEET_NAME_FALLBACK.to_string();
    }
    c_name.to_string()
}

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), String> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter(|(_, l_pos)| l_pos.len() > 1)
        .map(|(c_name, l_pos)| format!("{c_name:?} x{} at indices {:?}", l_pos.len(), l_pos))
        .collect::<Vec<_>>()
        .join("; ");

    Err(format!("Duplicate column names detected: {c_msg}"))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Estimate displayed width units for one cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        _ => estimate_unicode_string_width(&value.to_string()),
    }
}

/// Width units of `text`; accented and other non-ASCII glyphs count wider.
pub fn estimate_unicode_string_width(text: &str) -> usize {
    let n_ascii = text.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = text.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * N_NON_ASCII_WIDTH_UNITS).round() as usize
}

/// Plan final column widths; `None` when autofit is disabled.
pub fn plan_column_widths(
    headers: &[String],
    rows: &[Vec<EnumCellValue>],
    policy: &SpecAutofitCellsPolicy,
) -> Option<Vec<f64>> {
    if matches!(policy.rule_columns, EnumAutofitColumnsRule::None) || headers.is_empty() {
        return None;
    }

    let n_width = headers.len();
    let mut l_width_by_col_header = vec![0usize; n_width];
    let mut l_width_by_col_body = vec![0usize; n_width];

    for (n_idx_col, c_header) in headers.iter().enumerate() {
        l_width_by_col_header[n_idx_col] = estimate_unicode_string_width(c_header);
    }

    let n_rows_inspected = policy
        .n_rows_sampled_max
        .map_or(rows.len(), |n_max| usize::min(rows.len(), n_max));
    for row in rows.iter().take(n_rows_inspected) {
        for (n_idx_col, value) in row.iter().take(n_width).enumerate() {
            l_width_by_col_body[n_idx_col] =
                usize::max(l_width_by_col_body[n_idx_col], estimate_width_len(value));
        }
    }

    let n_min = usize::max(1, policy.n_width_min);
    let n_max = usize::min(255, usize::max(n_min, policy.n_width_max));
    let n_pad = policy.n_width_padding;

    let l_widths = (0..n_width)
        .map(|n_idx_col| {
            let n_width_recorded = match policy.rule_columns {
                EnumAutofitColumnsRule::Header | EnumAutofitColumnsRule::None => {
                    l_width_by_col_header[n_idx_col]
                }
                EnumAutofitColumnsRule::Body => l_width_by_col_body[n_idx_col],
                EnumAutofitColumnsRule::All => usize::max(
                    l_width_by_col_header[n_idx_col],
                    l_width_by_col_body[n_idx_col],
                ),
            };
            usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad)) as f64
        })
        .collect();

    Some(l_widths)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_sheet_name_truncates_to_excel_limit() {
        let c_title = "Programa de produccion semanal planta norte 2024";
        let c_sheet_name = sanitize_sheet_name(c_title, "_");
        assert_eq!(c_sheet_name.chars().count(), 31);
        assert!(c_title.starts_with(&c_sheet_name));
    }

    #[test]
    fn test_sanitize_sheet_name_replaces_illegal_chars() {
        assert_eq!(sanitize_sheet_name("Plan 01/02 [v2]?", "_"), "Plan 01_02 _v2__");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name("Corto", "_"), "Corto");
    }

    #[test]
    fn test_sanitize_sheet_name_strips_edge_apostrophes() {
        assert_eq!(sanitize_sheet_name("'Plan semanal'", "_"), "Plan semanal");
        assert_eq!(sanitize_sheet_name("Pedido 'A'", "_"), "Pedido 'A");
        assert_eq!(sanitize_sheet_name("''", "_"), "Sheet");
    }

    #[test]
    fn test_sanitize_sheet_name_strips_apostrophe_left_by_truncation() {
        let c_title = format!("{}'s plan", "A".repeat(30));
        let c_sheet_name = sanitize_sheet_name(&c_title, "_");
        assert_eq!(c_sheet_name, "A".repeat(30));
    }

    #[test]
    fn test_validate_unique_columns_reports_duplicates() {
        let l_cols = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        let err = validate_unique_columns(&l_cols).expect_err("duplicate must fail");
        assert!(err.contains("\"A\" x2 at indices [0, 2]"));
        assert!(validate_unique_columns(&l_cols[..2]).is_ok());
    }

    #[test]
    fn test_plan_column_widths_clamps_and_pads() {
        let l_headers = vec!["MODELO".to_string(), "TOTAL".to_string()];
        let l_rows = vec![vec![
            EnumCellValue::from("X".repeat(80).as_str()),
            EnumCellValue::Number(12.0),
        ]];
        let l_widths = plan_column_widths(&l_headers, &l_rows, &SpecAutofitCellsPolicy::default())
            .expect("autofit enabled");
        assert_eq!(l_widths, vec![60.0, 8.0]);
    }

    #[test]
    fn test_plan_column_widths_disabled() {
        let policy = SpecAutofitCellsPolicy {
            rule_columns: EnumAutofitColumnsRule::None,
            ..Default::default()
        };
        assert_eq!(plan_column_widths(&["A".to_string()], &[], &policy), None);
    }
}
