//! Cell value types

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Numeric value (all numbers stored as f64, including date serials)
    Number(f64),

    /// String value
    String(String),

    /// Formula expression, stored without the leading '='
    Formula(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Create a new formula value; a leading '=' is stripped
    pub fn formula<S: AsRef<str>>(text: S) -> Self {
        let text = text.as_ref();
        CellValue::Formula(text.strip_prefix('=').unwrap_or(text).to_string())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Check if the cell contains a string
    pub fn is_string(&self) -> bool {
        matches!(self, CellValue::String(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Boolean(true) => Some(1.0),
            CellValue::Boolean(false) => Some(0.0),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            CellValue::Number(n) => Some(*n != 0.0),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the formula expression if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula(text) => Some(text),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Boolean(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::String(_) => "string",
            CellValue::Formula(_) => "formula",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Formula(text) => write!(f, "={}", text),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

/// Convert a date to an Excel serial number (1900 date system).
///
/// Serial 1 is 1900-01-01. The 1900 system includes the historical leap-year
/// bug: Excel treats 1900 as a leap year and assigns serial 60 to the
/// non-existent 1900-02-29, so every date from 1900-03-01 on is shifted up
/// by one day.
pub fn date_to_serial(date: NaiveDate) -> f64 {
    // 1899-12-31 is in range for NaiveDate
    let base = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
    let days = (date - base).num_days();
    if days >= 60 {
        (days + 1) as f64
    } else {
        days as f64
    }
}

/// Convert a date-time to an Excel serial number with a fractional day part.
pub fn datetime_to_serial(datetime: NaiveDateTime) -> f64 {
    let day = date_to_serial(datetime.date());
    let seconds = datetime.time().num_seconds_from_midnight() as f64;
    day + seconds / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(3.25), CellValue::Number(3.25));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(CellValue::from("hello").as_string(), Some("hello"));
    }

    #[test]
    fn formula_strips_leading_equals() {
        let v = CellValue::formula("=SUM(A1:A10)");
        assert_eq!(v.formula_text(), Some("SUM(A1:A10)"));
        assert_eq!(v.to_string(), "=SUM(A1:A10)");
    }

    #[test]
    fn as_number_coercions() {
        assert_eq!(CellValue::Number(42.0).as_number(), Some(42.0));
        assert_eq!(CellValue::Boolean(true).as_number(), Some(1.0));
        assert_eq!(CellValue::string("hello").as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn date_serials_1900_system() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(date_to_serial(d(1900, 1, 1)), 1.0);
        assert_eq!(date_to_serial(d(1900, 2, 28)), 59.0);
        // 1900-03-01 skips the phantom leap day at serial 60
        assert_eq!(date_to_serial(d(1900, 3, 1)), 61.0);
        assert_eq!(date_to_serial(d(2020, 1, 1)), 43831.0);
    }

    #[test]
    fn datetime_serial_has_day_fraction() {
        let dt = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(datetime_to_serial(dt), 43831.25);
    }
}
