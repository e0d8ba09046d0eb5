//! Prelude module - common imports for tally-sheets users
//!
//! ```rust
//! use tally_sheets::prelude::*;
//! ```

pub use crate::{
    cell_address,
    estimate_row_height_points,
    // Style types
    BorderLineStyle,
    CellAddress,
    // Cell types
    CellContent,
    CellRange,
    CellStyle,
    CellValue,
    Color,
    // Error types
    Error,
    Font,
    FontOffset,
    HorizontalAlignment,
    PictureFormat,
    Result,
    // Read helpers
    SheetReader,
    // Main types
    Spreadsheet,
    StyleRegistry,
    Tab,
    VerticalAlignment,
};
