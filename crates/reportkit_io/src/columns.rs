//! Column role detection by literal header name.
//!
//! Missing roles resolve to `None`, which disables whatever feature depends on
//! them instead of indexing out of bounds.

use std::ops::Range;

use crate::table::EnumCellValue;

/// Header naming the head-count column; block columns start right after it.
pub const C_COLUMN_NAME_HC: &str = "HC";
/// Header naming the row total column; block columns stop right before it.
pub const C_COLUMN_NAME_TOTAL: &str = "TOTAL";

/// Index of the first header literally equal to `name`.
pub fn derive_column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|c_header| c_header == name)
}

/// Columns strictly between `HC` and `TOTAL`.
///
/// Returns `None` when either header is absent. Adjacent or inverted roles
/// yield an empty range.
pub fn derive_block_column_range(headers: &[String]) -> Option<Range<usize>> {
    let n_idx_hc = derive_column_index(headers, C_COLUMN_NAME_HC)?;
    let n_idx_total = derive_column_index(headers, C_COLUMN_NAME_TOTAL)?;

    let n_start = n_idx_hc + 1;
    Some(n_start..usize::max(n_start, n_idx_total))
}

/// Block cell counts as filled when non-empty and not zero.
pub fn is_block_value_present(value: &EnumCellValue) -> bool {
    match value {
        EnumCellValue::None => false,
        EnumCellValue::String(s) => !s.is_empty() && s != "0",
        EnumCellValue::Number(n) => *n != 0.0 && !n.is_nan(),
    }
}
