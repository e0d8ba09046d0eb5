//! # tally-sheets-core
//!
//! In-memory document model for the tally-sheets spreadsheet library.
//!
//! This crate provides the native types the convenience layer resolves
//! against:
//! - [`CellValue`] - Cell values (numbers, strings, booleans, formulas)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`Style`] and [`FontStyle`] - Concrete cell/font formatting, pooled
//!   per workbook and referenced by [`StyleId`]/[`FontId`] handles
//! - [`Workbook`], [`Worksheet`] - The document structures
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_value_at(0, 0, CellValue::from("Hello")).unwrap();
//! sheet.set_value_at(0, 1, CellValue::from(42.0)).unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod picture;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{date_to_serial, datetime_to_serial, CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use picture::{Picture, PictureFormat};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontId, FontPool,
    FontStyle, FontVerticalAlign, HorizontalAlignment, NumberFormat, Protection, Style, StyleId,
    StylePool, Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Default font size in points, used wherever no explicit size is set
pub const DEFAULT_FONT_SIZE: u32 = 11;
