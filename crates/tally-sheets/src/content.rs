//! Cell content coercion
//!
//! [`CellContent`] is the dynamically-typed input accepted by the value-set
//! operations. Conversion to the document model's [`CellValue`] follows a
//! fixed precedence: the formula prefix check happens before any other
//! string handling, and non-finite numbers are written as empty strings,
//! never as numeric values.

use chrono::{NaiveDate, NaiveDateTime};
use tally_sheets_core::{date_to_serial, datetime_to_serial, CellValue};

/// A value that can be written into a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// No content; clears the cell to blank
    Empty,
    /// Text, or a formula when prefixed with '='
    Text(String),
    /// A number
    Number(f64),
    /// A boolean
    Bool(bool),
    /// A calendar date (written as an Excel date serial)
    Date(NaiveDate),
    /// A date and time (written as an Excel date serial with a day fraction)
    DateTime(NaiveDateTime),
}

impl From<CellContent> for CellValue {
    fn from(content: CellContent) -> CellValue {
        match content {
            CellContent::Empty => CellValue::Empty,
            CellContent::Text(s) => match s.strip_prefix('=') {
                Some(expr) => CellValue::Formula(expr.to_string()),
                None => CellValue::String(s),
            },
            CellContent::Number(n) => {
                if n.is_finite() {
                    CellValue::Number(n)
                } else {
                    CellValue::String(String::new())
                }
            }
            CellContent::Bool(b) => CellValue::Boolean(b),
            CellContent::Date(d) => CellValue::Number(date_to_serial(d)),
            CellContent::DateTime(dt) => CellValue::Number(datetime_to_serial(dt)),
        }
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        CellContent::Text(s.to_string())
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        CellContent::Text(s)
    }
}

impl From<&String> for CellContent {
    fn from(s: &String) -> Self {
        CellContent::Text(s.clone())
    }
}

impl From<f64> for CellContent {
    fn from(n: f64) -> Self {
        CellContent::Number(n)
    }
}

impl From<f32> for CellContent {
    fn from(n: f32) -> Self {
        CellContent::Number(n as f64)
    }
}

impl From<i32> for CellContent {
    fn from(n: i32) -> Self {
        CellContent::Number(n as f64)
    }
}

impl From<i64> for CellContent {
    fn from(n: i64) -> Self {
        CellContent::Number(n as f64)
    }
}

impl From<u32> for CellContent {
    fn from(n: u32) -> Self {
        CellContent::Number(n as f64)
    }
}

impl From<bool> for CellContent {
    fn from(b: bool) -> Self {
        CellContent::Bool(b)
    }
}

impl From<NaiveDate> for CellContent {
    fn from(d: NaiveDate) -> Self {
        CellContent::Date(d)
    }
}

impl From<NaiveDateTime> for CellContent {
    fn from(dt: NaiveDateTime) -> Self {
        CellContent::DateTime(dt)
    }
}

impl<T: Into<CellContent>> From<Option<T>> for CellContent {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellContent::Empty,
        }
    }
}
