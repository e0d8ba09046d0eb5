//! Error types for the convenience layer

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a spreadsheet
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the underlying document model
    #[error(transparent)]
    Document(#[from] tally_sheets_core::Error),

    /// A tab with the same title already exists
    #[error("Workbook already has a tab with title: {0}")]
    DuplicateTabTitle(String),

    /// A numeric style field does not fit the document model's representation
    #[error("{field} value {value} does not fit the document model")]
    ValueOutOfRange {
        /// Name of the offending style field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// A cell that was expected to hold a number holds something else
    #[error("Cell {0} does not hold a numeric value")]
    NotNumeric(String),
}
