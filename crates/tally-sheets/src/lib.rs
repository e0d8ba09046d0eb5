//! # tally-sheets
//!
//! A convenience layer for building spreadsheet workbooks: address-based
//! cell access ("B7" notation), immutable style/font value objects with a
//! declarative merge semantic, and helpers for autosizing, merged regions,
//! borders, block printing, and picture embedding.
//!
//! ## Styles
//!
//! [`CellStyle`] and [`Font`] are immutable value objects. Every field is
//! tri-state: set-to-a-value or unset, where unset means "no opinion".
//! Styles compose with [`CellStyle::apply`], which merges an overlay's set
//! fields onto a base without disturbing anything else:
//!
//! ```rust
//! use tally_sheets::{CellStyle, Color};
//!
//! let invalid = CellStyle::new()
//!     .with_background_color(tally_sheets::COLOR_BAD)
//!     .with_surround_border_color(Color::RED);
//!
//! // Layer it onto any base style; alignment, font, etc. are untouched.
//! let header = CellStyle::header();
//! let invalid_header = header.apply(&invalid);
//! assert_eq!(invalid_header.bold(), header.bold());
//! ```
//!
//! Distinct style values are resolved to document handles once: applying
//! structurally equal styles to a thousand cells allocates one native
//! style.
//!
//! ## Building a workbook
//!
//! ```rust
//! use tally_sheets::{CellStyle, Spreadsheet};
//!
//! let mut book = Spreadsheet::new();
//! let mut tab = book.create_tab("Report").unwrap();
//!
//! tab.set_value_styled("B2", "Weekly Report", &CellStyle::title()).unwrap();
//! tab.print_down("B4", Some(&CellStyle::left()), ["north", "south", "east"]).unwrap();
//! tab.set_value("C4", 1250.75).unwrap();
//! tab.set_value("C7", "=SUM(C4:C6)").unwrap();
//! tab.autosize_rows_and_cols().unwrap();
//! ```

pub mod autosize;
pub mod content;
pub mod error;
pub mod font;
pub mod prelude;
pub mod reader;
pub mod registry;
pub mod spreadsheet;
pub mod style;
pub mod tab;

pub use autosize::{estimate_row_height_points, line_count};
pub use content::CellContent;
pub use error::{Error, Result};
pub use font::{Font, FontOffset};
pub use reader::SheetReader;
pub use registry::StyleRegistry;
pub use spreadsheet::Spreadsheet;
pub use style::{CellStyle, COLOR_BAD, COLOR_GOOD, COLOR_NEUTRAL, COLOR_NOTE};
pub use tab::{cell_address, Tab};

// Document-model types that appear in this crate's API
pub use tally_sheets_core::{
    BorderLineStyle, CellAddress, CellRange, CellValue, Color, FontId, HorizontalAlignment,
    PictureFormat, StyleId, VerticalAlignment, Workbook, Worksheet, DEFAULT_FONT_SIZE,
};
