//! JSON rendering of table rows keyed by header name.

use reportkit_io::EnumCellValue;
use serde_json::{Map, Number, Value};

/// JSON value of one cell.
///
/// Integral numbers become JSON integers; non-finite numbers have no JSON
/// form and are kept as their text (`"NaN"`, `"Inf"`).
pub fn derive_cell_json(value: &EnumCellValue) -> Value {
    match value {
        EnumCellValue::None => Value::Null,
        EnumCellValue::String(val) => Value::String(val.clone()),
        EnumCellValue::Number(val) => match value.as_integer() {
            Some(n_int) => Value::Number(Number::from(n_int)),
            None => Number::from_f64(*val)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(value.to_string())),
        },
    }
}

/// One object per row, keys in header order.
///
/// Cells past the end of a short row are omitted; cells past the last header
/// are ignored.
pub fn derive_row_objects(headers: &[String], rows: &[Vec<EnumCellValue>]) -> Vec<Value> {
    rows.iter()
        .map(|row| {
            let dict_row: Map<String, Value> = headers
                .iter()
                .zip(row)
                .map(|(c_header, value)| (c_header.clone(), derive_cell_json(value)))
                .collect();
            Value::Object(dict_row)
        })
        .collect()
}

/// Pretty-printed JSON array (2-space indent) of the row objects.
pub fn derive_structured_text(headers: &[String], rows: &[Vec<EnumCellValue>]) -> String {
    let value = Value::Array(derive_row_objects(headers, rows));
    // serializing a Value built from String keys cannot fail
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|c_name| c_name.to_string()).collect()
    }

    #[test]
    fn test_integral_numbers_serialize_as_integers() {
        let c_text = derive_structured_text(
            &headers(&["A", "B"]),
            &[
                vec![EnumCellValue::from(1), EnumCellValue::from(2)],
                vec![EnumCellValue::from(3), EnumCellValue::from(4)],
            ],
        );
        let value: Value = serde_json::from_str(&c_text).unwrap();
        assert_eq!(value, json!([{"A": 1, "B": 2}, {"A": 3, "B": 4}]));
        assert!(c_text.contains("\n  {\n    \"A\": 1,"));
    }

    #[test]
    fn test_keys_keep_header_order() {
        let c_text = derive_structured_text(
            &headers(&["TOTAL", "MODELO", "HC"]),
            &[vec![
                EnumCellValue::from(10),
                EnumCellValue::from("A"),
                EnumCellValue::from(3),
            ]],
        );
        let n_total = c_text.find("TOTAL").unwrap();
        let n_model = c_text.find("MODELO").unwrap();
        let n_hc = c_text.find("\"HC\"").unwrap();
        assert!(n_total < n_model && n_model < n_hc);
    }

    #[test]
    fn test_cell_values_map_to_json() {
        assert_eq!(derive_cell_json(&EnumCellValue::None), Value::Null);
        assert_eq!(derive_cell_json(&EnumCellValue::from("x")), json!("x"));
        assert_eq!(derive_cell_json(&EnumCellValue::Number(2.5)), json!(2.5));
        assert_eq!(derive_cell_json(&EnumCellValue::Number(f64::NAN)), json!("NaN"));
    }

    #[test]
    fn test_short_rows_omit_missing_keys() {
        let l_objects = derive_row_objects(&headers(&["A", "B"]), &[vec![EnumCellValue::from(1)]]);
        assert_eq!(l_objects, vec![json!({"A": 1})]);
    }

    #[test]
    fn test_empty_table_is_empty_array() {
        assert_eq!(derive_structured_text(&headers(&["A"]), &[]), "[]");
    }
}
