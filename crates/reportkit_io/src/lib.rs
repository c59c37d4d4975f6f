//! `reportkit_io` v1:
//! Shared tabular model for the report export kernels.
//!
//! - `table`   : cell values and table/section containers
//! - `columns` : header-name column role detection
//! - `util`    : output naming helpers
pub mod columns;
pub mod table;
pub mod util;

pub use columns::{
    C_COLUMN_NAME_HC, C_COLUMN_NAME_TOTAL, derive_block_column_range, derive_column_index,
    is_block_value_present,
};
pub use table::{EnumCellValue, SpecTable};
pub use util::derive_output_file_name;
