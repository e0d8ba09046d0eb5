//! Read helpers for a built worksheet
//!
//! The value accessors return the TRIMMED content of the cell and an empty
//! string when the cell doesn't exist or is empty. The numeric accessor
//! returns 0 for a missing or empty cell and errors if the cell holds
//! something that isn't a number.

use crate::error::{Error, Result};
use tally_sheets_core::{CellAddress, CellValue, Worksheet};

/// Convenience reader over one worksheet
pub struct SheetReader<'a> {
    sheet: &'a Worksheet,
}

impl<'a> SheetReader<'a> {
    /// Create a reader over a worksheet
    pub fn new(sheet: &'a Worksheet) -> Self {
        Self { sheet }
    }

    /// The sheet's name
    pub fn sheet_name(&self) -> &str {
        self.sheet.name()
    }

    /// Number of rows up to and including the last one holding a cell
    pub fn num_rows(&self) -> u32 {
        self.sheet.last_row().map(|r| r + 1).unwrap_or(0)
    }

    /// Number of columns in a row, up to and including the last cell
    pub fn num_cols(&self, row: u32) -> u16 {
        self.sheet.last_col_in_row(row).map(|c| c + 1).unwrap_or(0)
    }

    /// Check if a row holds any cells
    pub fn row_has_data(&self, row: u32) -> bool {
        self.sheet.row_has_cells(row)
    }

    /// Trimmed display value of a cell by address
    pub fn value(&self, address: &str) -> Result<String> {
        let addr = CellAddress::parse(address)?;
        Ok(self.value_at(addr.row, addr.col))
    }

    /// Trimmed display value of a cell by indices
    pub fn value_at(&self, row: u32, col: u16) -> String {
        self.sheet.value_at(row, col).to_string().trim().to_string()
    }

    /// Trimmed string content of a cell; "" unless the cell holds text
    pub fn string_value(&self, address: &str) -> Result<String> {
        let addr = CellAddress::parse(address)?;
        Ok(self.string_value_at(addr.row, addr.col))
    }

    /// Trimmed string content of a cell by indices
    pub fn string_value_at(&self, row: u32, col: u16) -> String {
        match self.sheet.value_at(row, col) {
            CellValue::String(s) => s.trim().to_string(),
            _ => String::new(),
        }
    }

    /// Numeric content of a cell; 0 when the cell is missing or empty
    pub fn numeric_value(&self, address: &str) -> Result<f64> {
        let addr = CellAddress::parse(address)?;
        match self.sheet.value_at(addr.row, addr.col) {
            CellValue::Number(n) => Ok(n),
            CellValue::Empty => Ok(0.0),
            _ => Err(Error::NotNumeric(address.to_string())),
        }
    }

    /// Read a fixed number of values downward from a starting address
    pub fn read_down(&self, start: &str, count: u32) -> Result<Vec<String>> {
        let addr = CellAddress::parse(start)?;
        Ok((0..count)
            .map(|i| self.value_at(addr.row + i, addr.col))
            .collect())
    }

    /// Read values downward from a starting address until a blank cell
    pub fn read_down_until_blank(&self, start: &str) -> Result<Vec<String>> {
        let addr = CellAddress::parse(start)?;
        let mut values = Vec::new();
        let mut row = addr.row;
        loop {
            let value = self.value_at(row, addr.col);
            if value.is_empty() {
                break;
            }
            values.push(value);
            row += 1;
        }
        Ok(values)
    }

    /// Read a fixed number of values rightward from a starting address
    pub fn read_across(&self, start: &str, count: u16) -> Result<Vec<String>> {
        let addr = CellAddress::parse(start)?;
        Ok((0..count)
            .map(|i| self.value_at(addr.row, addr.col + i))
            .collect())
    }

    /// Read values rightward from a starting address until a blank cell
    pub fn read_across_until_blank(&self, start: &str) -> Result<Vec<String>> {
        let addr = CellAddress::parse(start)?;
        let mut values = Vec::new();
        let mut col = addr.col;
        loop {
            let value = self.value_at(addr.row, col);
            if value.is_empty() {
                break;
            }
            values.push(value);
            col += 1;
        }
        Ok(values)
    }

    /// Dump the whole sheet as trimmed display values, row-major
    ///
    /// Every row is padded to the width of the widest row.
    pub fn read_sheet(&self) -> Vec<Vec<String>> {
        let num_rows = self.num_rows();
        let max_cols = (0..num_rows).map(|r| self.num_cols(r)).max().unwrap_or(0);
        (0..num_rows)
            .map(|row| {
                (0..max_cols)
                    .map(|col| self.value_at(row, col))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tally_sheets_core::CellValue;

    fn sample_sheet() -> Worksheet {
        let mut ws = Worksheet::new("Data");
        ws.set_value_at(0, 0, CellValue::from("  padded  ")).unwrap();
        ws.set_value_at(1, 0, CellValue::from("alpha")).unwrap();
        ws.set_value_at(2, 0, CellValue::from("beta")).unwrap();
        ws.set_value_at(0, 1, CellValue::from(12.5)).unwrap();
        ws.set_value_at(0, 2, CellValue::from(true)).unwrap();
        ws
    }

    #[test]
    fn values_are_trimmed_and_blank_when_missing() {
        let ws = sample_sheet();
        let reader = SheetReader::new(&ws);

        assert_eq!(reader.value("A1").unwrap(), "padded");
        assert_eq!(reader.value("Z99").unwrap(), "");
        assert_eq!(reader.string_value("A1").unwrap(), "padded");
        assert_eq!(reader.string_value("B1").unwrap(), ""); // number, not text
    }

    #[test]
    fn numeric_values() {
        let ws = sample_sheet();
        let reader = SheetReader::new(&ws);

        assert_eq!(reader.numeric_value("B1").unwrap(), 12.5);
        assert_eq!(reader.numeric_value("B9").unwrap(), 0.0); // missing
        assert!(reader.numeric_value("A1").is_err()); // text
    }

    #[test]
    fn read_down_until_blank_stops_at_gap() {
        let ws = sample_sheet();
        let reader = SheetReader::new(&ws);

        assert_eq!(
            reader.read_down_until_blank("A1").unwrap(),
            vec!["padded", "alpha", "beta"]
        );
        assert_eq!(reader.read_down("A2", 2).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn read_sheet_pads_rows() {
        let ws = sample_sheet();
        let reader = SheetReader::new(&ws);

        let dump = reader.read_sheet();
        assert_eq!(dump.len(), 3);
        assert_eq!(dump[0], vec!["padded", "12.5", "TRUE"]);
        assert_eq!(dump[1], vec!["alpha", "", ""]);
    }
}
