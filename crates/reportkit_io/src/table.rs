//! Cell values and table containers handed over by callers.

use std::fmt;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
// #region CellValue

/// Raw cell value as supplied by the caller.
///
/// Untagged on the wire: JSON `null`, numbers and strings map directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumCellValue {
    /// Missing/blank value.
    #[default]
    None,
    /// Numeric value.
    Number(f64),
    /// Text value.
    String(String),
}

impl EnumCellValue {
    /// Integral finite numbers as `i64`, `None` otherwise.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15 => {
                Some(*n as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for EnumCellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::String(s) => f.write_str(s),
            Self::Number(n) => {
                if let Some(n_int) = self.as_integer() {
                    write!(f, "{n_int}")
                } else if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if n.is_sign_positive() { "Inf" } else { "-Inf" })
                } else {
                    write!(f, "{n}")
                }
            }
        }
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for EnumCellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for EnumCellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T: Into<EnumCellValue>> From<Option<T>> for EnumCellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableSpecification

/// Title, headers and rows of one exported table.
///
/// `rows[i][j]` belongs to `headers[j]`. Row lengths are not validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecTable {
    /// Document/sheet title; also the output file stem.
    pub title: String,
    /// Ordered column headers.
    pub headers: Vec<String>,
    /// Ordered body rows.
    #[serde(default)]
    pub rows: Vec<Vec<EnumCellValue>>,
}

impl SpecTable {
    pub fn new(
        title: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<EnumCellValue>>,
    ) -> Self {
        Self {
            title: title.into(),
            headers,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_drops_fraction_for_integral_numbers() {
        assert_eq!(EnumCellValue::Number(10.0).to_string(), "10");
        assert_eq!(EnumCellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(EnumCellValue::Number(-3.0).to_string(), "-3");
        assert_eq!(EnumCellValue::None.to_string(), "");
        assert_eq!(EnumCellValue::from("ROBOT").to_string(), "ROBOT");
    }

    #[test]
    fn test_untagged_json_maps_null_number_and_text() {
        let l_values: Vec<EnumCellValue> =
            serde_json::from_str(r#"[null, 3, 1.5, "A"]"#).expect("parse cells");
        assert_eq!(
            l_values,
            vec![
                EnumCellValue::None,
                EnumCellValue::Number(3.0),
                EnumCellValue::Number(1.5),
                EnumCellValue::String("A".to_string()),
            ]
        );
    }

    #[test]
    fn test_as_integer_rejects_fractions_and_non_finite() {
        assert_eq!(EnumCellValue::Number(4.0).as_integer(), Some(4));
        assert_eq!(EnumCellValue::Number(4.2).as_integer(), None);
        assert_eq!(EnumCellValue::Number(f64::NAN).as_integer(), None);
        assert_eq!(EnumCellValue::from("4").as_integer(), None);
    }
}
