//! Embedded picture types

/// Image format of an embedded picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PictureFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
}

/// A picture anchored at a cell
///
/// The document model only carries the bytes and the anchor; rendering and
/// serialization are the consumer's concern.
#[derive(Debug, Clone)]
pub struct Picture {
    /// Anchor row (top-left corner, 0-based)
    pub row: u32,
    /// Anchor column (top-left corner, 0-based)
    pub col: u16,
    /// Image format
    pub format: PictureFormat,
    /// Raw image bytes
    pub data: Vec<u8>,
}

impl Picture {
    /// Create a new picture anchored at the given cell
    pub fn new(row: u32, col: u16, format: PictureFormat, data: Vec<u8>) -> Self {
        Self {
            row,
            col,
            format,
            data,
        }
    }
}
