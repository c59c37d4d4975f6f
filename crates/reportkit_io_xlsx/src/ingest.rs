//! Table ingestion from polars DataFrames and IPC payloads.

use std::io::Cursor;

use polars::prelude::{AnyValue, DataFrame, IpcReader, SerReader};
use reportkit_io::{EnumCellValue, SpecTable};

use crate::util::validate_unique_columns;

/// Convert a DataFrame into a [`SpecTable`] titled `title`.
pub fn derive_table_from_dataframe(title: &str, df: &DataFrame) -> Result<SpecTable, String> {
    let l_headers: Vec<String> = df
        .get_column_names_str()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    validate_unique_columns(&l_headers)?;

    let l_cols = df.get_columns();
    let mut l_rows = Vec::with_capacity(df.height());
    for n_idx_row in 0..df.height() {
        let mut l_row = Vec::with_capacity(l_cols.len());
        for col in l_cols {
            let value = col
                .get(n_idx_row)
                .map_err(|err| format!("Failed to access cell value: {err}"))?;
            l_row.push(derive_cell_value_from_any_value(value));
        }
        l_rows.push(l_row);
    }

    Ok(SpecTable::new(title, l_headers, l_rows))
}

/// Convert IPC-serialized DataFrame bytes into a [`SpecTable`].
pub fn derive_table_from_ipc_bytes(title: &str, v_ipc_df: &[u8]) -> Result<SpecTable, String> {
    let df = IpcReader::new(Cursor::new(v_ipc_df))
        .finish()
        .map_err(|err| format!("Failed to read IPC DataFrame bytes: {err}"))?;
    derive_table_from_dataframe(title, &df)
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        AnyValue::UInt8(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt16(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int8(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int16(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float64(val) => EnumCellValue::Number(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::Column;

    use super::*;

    #[test]
    fn test_dataframe_maps_nulls_numbers_and_text() {
        let df = DataFrame::new(vec![
            Column::new("MODELO".into(), &["A", "B"]),
            Column::new("HC".into(), &[Some(3i64), None]),
            Column::new("TOTAL".into(), &[10.5f64, 2.0]),
        ])
        .expect("build dataframe");

        let table = derive_table_from_dataframe("Plan", &df).expect("convert");
        assert_eq!(table.title, "Plan");
        assert_eq!(table.headers, vec!["MODELO", "HC", "TOTAL"]);
        assert_eq!(
            table.rows,
            vec![
                vec![
                    EnumCellValue::from("A"),
                    EnumCellValue::Number(3.0),
                    EnumCellValue::Number(10.5),
                ],
                vec![
                    EnumCellValue::from("B"),
                    EnumCellValue::None,
                    EnumCellValue::Number(2.0),
                ],
            ]
        );
    }

    #[test]
    fn test_invalid_ipc_payload_is_rejected() {
        let err = derive_table_from_ipc_bytes("Plan", b"not-ipc").expect_err("must fail");
        assert!(err.starts_with("Failed to read IPC DataFrame bytes"));
    }
}
