//! Tab: address-based access to one sheet

use crate::content::CellContent;
use crate::error::Result;
use crate::spreadsheet::Spreadsheet;
use crate::style::CellStyle;
use tally_sheets_core::{BorderLineStyle, CellAddress, CellValue, Picture, PictureFormat};

/// Format a 0-based row/column pair as an A1-style address
pub fn cell_address(row: u32, col: u16) -> String {
    CellAddress::new(row, col).to_string()
}

/// A borrowed handle to one tab (sheet) of a [`Spreadsheet`]
///
/// All addressing accepts either Excel notation (`"B7"`) through the
/// string-taking methods or 0-based indices through the `_at` variants.
/// Value writes move the tab's dirty extent, which later bounds the
/// autosize scans.
#[derive(Debug)]
pub struct Tab<'a> {
    pub(crate) book: &'a mut Spreadsheet,
    pub(crate) index: usize,
}

impl Tab<'_> {
    /// The tab's title
    pub fn title(&self) -> &str {
        self.book.sheet_title(self.index)
    }

    /// The tab's creation index
    pub fn index(&self) -> usize {
        self.index
    }

    // === Values ===

    /// Set a cell's value by address
    pub fn set_value(&mut self, address: &str, content: impl Into<CellContent>) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_value_at(addr.row, addr.col, content)
    }

    /// Set a cell's value by indices
    pub fn set_value_at(
        &mut self,
        row: u32,
        col: u16,
        content: impl Into<CellContent>,
    ) -> Result<()> {
        self.book.set_cell_value(self.index, row, col, content.into())
    }

    /// Set a cell's value and style by address
    pub fn set_value_styled(
        &mut self,
        address: &str,
        content: impl Into<CellContent>,
        style: &CellStyle,
    ) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_value_styled_at(addr.row, addr.col, content, style)
    }

    /// Set a cell's value and style by indices
    pub fn set_value_styled_at(
        &mut self,
        row: u32,
        col: u16,
        content: impl Into<CellContent>,
        style: &CellStyle,
    ) -> Result<()> {
        self.book.set_cell_value(self.index, row, col, content.into())?;
        self.book.set_cell_style(self.index, row, col, style)
    }

    /// Get a cell's displayed value by address ("" for a missing cell)
    pub fn value(&self, address: &str) -> Result<String> {
        let addr = CellAddress::parse(address)?;
        Ok(self.value_at(addr.row, addr.col))
    }

    /// Get a cell's displayed value by indices ("" for a missing cell)
    pub fn value_at(&self, row: u32, col: u16) -> String {
        self.book.cell_value(self.index, row, col).to_string()
    }

    /// Get a cell's raw value by address
    pub fn cell_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_value_at(addr.row, addr.col))
    }

    /// Get a cell's raw value by indices
    pub fn cell_value_at(&self, row: u32, col: u16) -> CellValue {
        self.book.cell_value(self.index, row, col)
    }

    // === Styles ===

    /// Set a cell's style by address
    pub fn set_style(&mut self, address: &str, style: &CellStyle) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_style_at(addr.row, addr.col, style)
    }

    /// Set a cell's style by indices
    pub fn set_style_at(&mut self, row: u32, col: u16, style: &CellStyle) -> Result<()> {
        self.book.set_cell_style(self.index, row, col, style)
    }

    /// Set the same style on every cell in the block spanned by two corners
    pub fn set_style_range(&mut self, first: &str, last: &str, style: &CellStyle) -> Result<()> {
        let first = CellAddress::parse(first)?;
        let last = CellAddress::parse(last)?;
        self.set_style_block(first.row, last.row, first.col, last.col, style)
    }

    /// Set the same style on every cell in a block of indices
    pub fn set_style_block(
        &mut self,
        first_row: u32,
        last_row: u32,
        first_col: u16,
        last_col: u16,
        style: &CellStyle,
    ) -> Result<()> {
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                self.set_style_at(row, col, style)?;
            }
        }
        Ok(())
    }

    /// Merge a style overlay onto a cell's current style by address
    ///
    /// Set fields of `overlay` win; everything else keeps the cell's
    /// current styling. A cell with no style yet just takes the overlay.
    pub fn apply_style(&mut self, address: &str, overlay: &CellStyle) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.apply_style_at(addr.row, addr.col, overlay)
    }

    /// Merge a style overlay onto a cell's current style by indices
    pub fn apply_style_at(&mut self, row: u32, col: u16, overlay: &CellStyle) -> Result<()> {
        self.book.apply_cell_style(self.index, row, col, overlay)
    }

    /// Get the style applied to a cell by address, if any
    pub fn style(&self, address: &str) -> Result<Option<&CellStyle>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.style_at(addr.row, addr.col))
    }

    /// Get the style applied to a cell by indices, if any
    pub fn style_at(&self, row: u32, col: u16) -> Option<&CellStyle> {
        self.book.cell_style(self.index, row, col)
    }

    // === Merged regions ===

    /// Merge the block spanned by two corner addresses into one big cell
    ///
    /// The content lands in the first (top-left) cell and the style is
    /// applied across the whole region.
    pub fn merge_cells(
        &mut self,
        first: &str,
        last: &str,
        content: impl Into<CellContent>,
        style: &CellStyle,
    ) -> Result<()> {
        let first = CellAddress::parse(first)?;
        let last = CellAddress::parse(last)?;
        self.book
            .merge_cells(self.index, first, last, content.into(), style)
    }

    /// Merge a block of indices into one big cell
    pub fn merge_cells_at(
        &mut self,
        first_row: u32,
        last_row: u32,
        first_col: u16,
        last_col: u16,
        content: impl Into<CellContent>,
        style: &CellStyle,
    ) -> Result<()> {
        self.book.merge_cells(
            self.index,
            CellAddress::new(first_row, first_col),
            CellAddress::new(last_row, last_col),
            content.into(),
            style,
        )
    }

    // === Dimensions ===

    /// Get a row's height in twips (1/20th of a point)
    pub fn row_height_twips(&self, row: u32) -> Result<u32> {
        let points = self.book.sheet(self.index)?.row_height(row);
        Ok((points * 20.0).round() as u32)
    }

    /// Set a row's height in twips (1/20th of a point)
    pub fn set_row_height_twips(&mut self, row: u32, twips: u32) -> Result<()> {
        self.book
            .sheet_mut(self.index)?
            .set_row_height(row, twips as f64 / 20.0);
        Ok(())
    }

    /// Get a row's height in points
    pub fn row_height_points(&self, row: u32) -> Result<f64> {
        Ok(self.book.sheet(self.index)?.row_height(row))
    }

    /// Get a column's width in 1/256ths of a character width
    pub fn col_width(&self, col: u16) -> Result<u32> {
        let chars = self.book.sheet(self.index)?.column_width(col);
        Ok((chars * 256.0).round() as u32)
    }

    /// Set a column's width in 1/256ths of a character width
    pub fn set_col_width(&mut self, col: u16, width: u32) -> Result<()> {
        self.book
            .sheet_mut(self.index)?
            .set_column_width(col, width as f64 / 256.0);
        Ok(())
    }

    /// Shrink the first column to a narrow spacer (3 character widths)
    pub fn add_spacer(&mut self) -> Result<()> {
        self.set_col_width(0, 768)
    }

    // === Autosizing ===

    /// Autosize all columns, then all rows, over the dirty extent
    pub fn autosize_rows_and_cols(&mut self) -> Result<()> {
        self.autosize_cols()?;
        self.autosize_rows()
    }

    /// Size every row in the dirty extent to fit its text content
    pub fn autosize_rows(&mut self) -> Result<()> {
        self.book.autosize_rows(self.index)
    }

    /// Size every column in the dirty extent using the document model's
    /// native column autosize
    pub fn autosize_cols(&mut self) -> Result<()> {
        self.book.autosize_cols(self.index)
    }

    /// Size a single row to fit its text content
    pub fn autosize_row(&mut self, row: u32) -> Result<()> {
        self.book.autosize_row(self.index, row)
    }

    /// Highest row index touched by a value write, if any
    pub fn highest_modified_row(&self) -> Option<u32> {
        let row = self.book.highest_modified_row(self.index);
        (row >= 0).then_some(row as u32)
    }

    /// Highest column index touched by a value write, if any
    pub fn highest_modified_col(&self) -> Option<u16> {
        let col = self.book.highest_modified_col(self.index);
        (col >= 0).then_some(col as u16)
    }

    // === Block printing ===

    /// Write values downward from an address; returns the row index after
    /// the last one written
    pub fn print_down<I>(
        &mut self,
        address: &str,
        style: Option<&CellStyle>,
        values: I,
    ) -> Result<u32>
    where
        I: IntoIterator,
        I::Item: Into<CellContent>,
    {
        let addr = CellAddress::parse(address)?;
        self.print_down_at(addr.row, addr.col, style, values)
    }

    /// Write values downward from indices; returns the row index after the
    /// last one written
    pub fn print_down_at<I>(
        &mut self,
        row: u32,
        col: u16,
        style: Option<&CellStyle>,
        values: I,
    ) -> Result<u32>
    where
        I: IntoIterator,
        I::Item: Into<CellContent>,
    {
        let mut next = row;
        for value in values {
            match style {
                Some(style) => self.set_value_styled_at(next, col, value, style)?,
                None => self.set_value_at(next, col, value)?,
            }
            next += 1;
        }
        Ok(next)
    }

    /// Write values rightward from an address; returns the column index
    /// after the last one written
    pub fn print_across<I>(
        &mut self,
        address: &str,
        style: Option<&CellStyle>,
        values: I,
    ) -> Result<u16>
    where
        I: IntoIterator,
        I::Item: Into<CellContent>,
    {
        let addr = CellAddress::parse(address)?;
        self.print_across_at(addr.row, addr.col, style, values)
    }

    /// Write values rightward from indices; returns the column index after
    /// the last one written
    pub fn print_across_at<I>(
        &mut self,
        row: u32,
        col: u16,
        style: Option<&CellStyle>,
        values: I,
    ) -> Result<u16>
    where
        I: IntoIterator,
        I::Item: Into<CellContent>,
    {
        let mut next = col;
        for value in values {
            match style {
                Some(style) => self.set_value_styled_at(row, next, value, style)?,
                None => self.set_value_at(row, next, value)?,
            }
            next += 1;
        }
        Ok(next)
    }

    // === Borders ===

    /// Paint a border around the outside of the block spanned by two
    /// corner addresses
    pub fn set_surround_border(
        &mut self,
        first: &str,
        last: &str,
        border: BorderLineStyle,
    ) -> Result<()> {
        let first = CellAddress::parse(first)?;
        let last = CellAddress::parse(last)?;
        self.set_surround_border_at(first.row, last.row, first.col, last.col, border)
    }

    /// Paint a border around the outside of a block of indices
    pub fn set_surround_border_at(
        &mut self,
        first_row: u32,
        last_row: u32,
        first_col: u16,
        last_col: u16,
        border: BorderLineStyle,
    ) -> Result<()> {
        self.set_top_border(first_row, first_col, last_col, border)?;
        self.set_bottom_border(last_row, first_col, last_col, border)?;
        self.set_left_border(first_row, last_row, first_col, border)?;
        self.set_right_border(first_row, last_row, last_col, border)
    }

    /// Paint a top border across a run of columns
    pub fn set_top_border(
        &mut self,
        row: u32,
        first_col: u16,
        last_col: u16,
        border: BorderLineStyle,
    ) -> Result<()> {
        let overlay = CellStyle::new().with_top_border(border);
        for col in first_col..=last_col {
            self.apply_style_at(row, col, &overlay)?;
        }
        Ok(())
    }

    /// Paint a bottom border across a run of columns
    pub fn set_bottom_border(
        &mut self,
        row: u32,
        first_col: u16,
        last_col: u16,
        border: BorderLineStyle,
    ) -> Result<()> {
        let overlay = CellStyle::new().with_bottom_border(border);
        for col in first_col..=last_col {
            self.apply_style_at(row, col, &overlay)?;
        }
        Ok(())
    }

    /// Paint a left border down a run of rows
    pub fn set_left_border(
        &mut self,
        first_row: u32,
        last_row: u32,
        col: u16,
        border: BorderLineStyle,
    ) -> Result<()> {
        let overlay = CellStyle::new().with_left_border(border);
        for row in first_row..=last_row {
            self.apply_style_at(row, col, &overlay)?;
        }
        Ok(())
    }

    /// Paint a right border down a run of rows
    pub fn set_right_border(
        &mut self,
        first_row: u32,
        last_row: u32,
        col: u16,
        border: BorderLineStyle,
    ) -> Result<()> {
        let overlay = CellStyle::new().with_right_border(border);
        for row in first_row..=last_row {
            self.apply_style_at(row, col, &overlay)?;
        }
        Ok(())
    }

    // === Pictures ===

    /// Embed a picture anchored at a cell address
    pub fn add_picture(
        &mut self,
        address: &str,
        format: PictureFormat,
        data: Vec<u8>,
    ) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.add_picture_at(addr.row, addr.col, format, data)
    }

    /// Embed a picture anchored at cell indices
    pub fn add_picture_at(
        &mut self,
        row: u32,
        col: u16,
        format: PictureFormat,
        data: Vec<u8>,
    ) -> Result<()> {
        self.book
            .sheet_mut(self.index)?
            .add_picture(Picture::new(row, col, format, data));
        Ok(())
    }
}
