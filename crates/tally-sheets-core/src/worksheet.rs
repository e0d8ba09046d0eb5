//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{CellData, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::picture::Picture;
use crate::style::StyleId;
use crate::{MAX_COLS, MAX_ROWS};

/// Default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Default column width in characters
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// A worksheet (single sheet in a workbook)
///
/// Cells are stored sparsely, row-major. Styles are not stored here: cells
/// carry [`StyleId`] handles into the owning workbook's style pool.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
    /// Default row height in points
    default_row_height: f64,
    /// Default column width in characters
    default_column_width: f64,
    /// Custom row heights (points)
    row_heights: BTreeMap<u32, f64>,
    /// Custom column widths (characters)
    column_widths: BTreeMap<u16, f64>,
    /// Merged cell regions
    merged_regions: Vec<CellRange>,
    /// Embedded pictures
    pictures: Vec<Picture>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            merged_regions: Vec::new(),
            pictures: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|cols| cols.get(&col))
    }

    /// Get a mutable cell by row and column indices
    pub fn cell_mut(&mut self, row: u32, col: u16) -> Option<&mut CellData> {
        self.rows.get_mut(&row).and_then(|cols| cols.get_mut(&col))
    }

    /// Get a cell value by indices (Empty if the cell does not exist)
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value, keeping any style already applied to the cell
    pub fn set_value_at(&mut self, row: u32, col: u16, value: CellValue) -> Result<()> {
        self.validate_position(row, col)?;
        let cell = self
            .rows
            .entry(row)
            .or_default()
            .entry(col)
            .or_default();
        cell.value = value;
        Ok(())
    }

    /// Set a cell's style handle, keeping any value already in the cell
    pub fn set_style_at(&mut self, row: u32, col: u16, style: StyleId) -> Result<()> {
        self.validate_position(row, col)?;
        let cell = self
            .rows
            .entry(row)
            .or_default()
            .entry(col)
            .or_default();
        cell.style = Some(style);
        Ok(())
    }

    /// Get a cell's style handle, if one was applied
    pub fn style_at(&self, row: u32, col: u16) -> Option<StyleId> {
        self.cell(row, col).and_then(|c| c.style)
    }

    /// Clear a cell entirely (value and style)
    pub fn clear_cell(&mut self, row: u32, col: u16) {
        if let Some(cols) = self.rows.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.rows.remove(&row);
            }
        }
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|cols| cols.len()).sum()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all stored cells: (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, cell)| (row, col, cell)))
    }

    /// Check if a row holds any cells
    pub fn row_has_cells(&self, row: u32) -> bool {
        self.rows.get(&row).map(|cols| !cols.is_empty()).unwrap_or(false)
    }

    /// Highest row index holding a cell, if any
    pub fn last_row(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Highest column index holding a cell in the given row, if any
    pub fn last_col_in_row(&self, row: u32) -> Option<u16> {
        self.rows
            .get(&row)
            .and_then(|cols| cols.keys().next_back().copied())
    }

    // === Row/Column Dimensions ===

    /// Get a row's height in points (default if not customized)
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.default_row_height)
    }

    /// Set a row's height in points
    pub fn set_row_height(&mut self, row: u32, points: f64) {
        self.row_heights.insert(row, points);
    }

    /// Reset a row's height to the sheet default
    pub fn reset_row_height(&mut self, row: u32) {
        self.row_heights.remove(&row);
    }

    /// Get the default row height in points
    pub fn default_row_height(&self) -> f64 {
        self.default_row_height
    }

    /// Set the default row height in points
    pub fn set_default_row_height(&mut self, points: f64) {
        self.default_row_height = points;
    }

    /// Get a column's width in characters (default if not customized)
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(self.default_column_width)
    }

    /// Set a column's width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Get the default column width in characters
    pub fn default_column_width(&self) -> f64 {
        self.default_column_width
    }

    /// Size a column to fit its content
    ///
    /// Width is estimated from the longest display line among the column's
    /// cells, a rough stand-in for what a rendering engine would measure.
    /// A column with no content is reset to the default width.
    pub fn autosize_column(&mut self, col: u16) {
        let mut max_chars = 0usize;
        for cols in self.rows.values() {
            if let Some(cell) = cols.get(&col) {
                let text = cell.value.to_string();
                for line in text.lines() {
                    max_chars = max_chars.max(line.chars().count());
                }
            }
        }

        if max_chars == 0 {
            self.column_widths.remove(&col);
        } else {
            self.column_widths.insert(col, max_chars as f64 + 1.0);
        }
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge cells, rejecting overlap with an existing merged region
    pub fn merge_cells(&mut self, range: CellRange) -> Result<()> {
        for existing in &self.merged_regions {
            if range.overlaps(existing) {
                return Err(Error::MergedCellConflict(range.to_string()));
            }
        }
        self.merged_regions.push(range);
        Ok(())
    }

    // === Pictures ===

    /// Add an embedded picture
    pub fn add_picture(&mut self, picture: Picture) {
        self.pictures.push(picture);
    }

    /// Get all embedded pictures
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    fn validate_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_and_get_values() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.is_empty());

        ws.set_value_at(0, 0, CellValue::from("Hello")).unwrap();
        ws.set_value_at(6, 1, CellValue::from(42.0)).unwrap();

        assert_eq!(ws.value_at(0, 0).as_string(), Some("Hello"));
        assert_eq!(ws.value_at(6, 1).as_number(), Some(42.0));
        assert_eq!(ws.value_at(9, 9), CellValue::Empty);
        assert_eq!(ws.cell_count(), 2);
    }

    #[test]
    fn set_value_rejects_out_of_bounds() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.set_value_at(crate::MAX_ROWS, 0, CellValue::Empty).is_err());
    }

    #[test]
    fn style_survives_value_write() {
        use crate::style::{Style, StylePool};

        let mut pool = StylePool::new();
        let mut style = Style::new();
        style.protection.locked = true;
        let id = pool.get_or_insert(style);

        let mut ws = Worksheet::new("Test");
        ws.set_style_at(2, 2, id).unwrap();
        ws.set_value_at(2, 2, CellValue::from("text")).unwrap();

        assert_eq!(ws.style_at(2, 2), Some(id));
    }

    #[test]
    fn row_heights_default_and_custom() {
        let mut ws = Worksheet::new("Test");
        assert_eq!(ws.row_height(3), DEFAULT_ROW_HEIGHT);

        ws.set_row_height(3, 30.0);
        assert_eq!(ws.row_height(3), 30.0);

        ws.reset_row_height(3);
        assert_eq!(ws.row_height(3), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn autosize_column_uses_longest_line() {
        let mut ws = Worksheet::new("Test");
        ws.set_value_at(0, 0, CellValue::from("short")).unwrap();
        ws.set_value_at(1, 0, CellValue::from("a much longer value"))
            .unwrap();
        ws.set_value_at(2, 0, CellValue::from("multi\nline")).unwrap();

        ws.autosize_column(0);
        assert_eq!(ws.column_width(0), 20.0); // 19 chars + 1

        ws.autosize_column(5); // empty column resets to default
        assert_eq!(ws.column_width(5), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn merge_rejects_overlap() {
        let mut ws = Worksheet::new("Test");
        ws.merge_cells(CellRange::parse("A1:C3").unwrap()).unwrap();
        assert!(ws.merge_cells(CellRange::parse("B2:D4").unwrap()).is_err());
        assert!(ws.merge_cells(CellRange::parse("E1:F2").unwrap()).is_ok());
        assert_eq!(ws.merged_regions().len(), 2);
    }
}
