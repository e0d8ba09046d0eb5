//! Workbook-building entry point

use crate::autosize::{estimate_row_height_points, line_count};
use crate::content::CellContent;
use crate::error::{Error, Result};
use crate::font::Font;
use crate::registry::StyleRegistry;
use crate::style::CellStyle;
use crate::tab::Tab;
use ahash::AHashMap;
use tally_sheets_core as core;
use tally_sheets_core::{
    CellAddress, CellRange, CellValue, FontId, StyleId, Worksheet, DEFAULT_FONT_SIZE,
};

/// A spreadsheet workbook under construction
///
/// Owns the underlying document model, the style/font registry, and the
/// per-tab bookkeeping. Cells are addressed and written through [`Tab`]
/// handles obtained from [`create_tab`](Spreadsheet::create_tab).
///
/// ```
/// use tally_sheets::{CellStyle, Spreadsheet};
///
/// let mut book = Spreadsheet::new();
/// let mut tab = book.create_tab("Summary").unwrap();
/// tab.set_value_styled("B2", "Quarterly totals", &CellStyle::title()).unwrap();
/// tab.autosize_rows_and_cols().unwrap();
/// ```
#[derive(Debug)]
pub struct Spreadsheet {
    workbook: core::Workbook,
    registry: StyleRegistry,
    tabs: Vec<TabState>,
}

/// Per-tab bookkeeping the document model does not carry
#[derive(Debug)]
struct TabState {
    /// Highest row index touched by a value write (-1 = none)
    highest_modified_row: i64,
    /// Highest column index touched by a value write (-1 = none)
    highest_modified_col: i64,
    /// The layer-level style applied to each cell
    cell_styles: AHashMap<(u32, u16), CellStyle>,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            highest_modified_row: -1,
            highest_modified_col: -1,
            cell_styles: AHashMap::new(),
        }
    }
}

impl Spreadsheet {
    /// Create a new spreadsheet with no tabs
    pub fn new() -> Self {
        Self {
            workbook: core::Workbook::empty(),
            registry: StyleRegistry::new(),
            tabs: Vec::new(),
        }
    }

    /// Create a new tab with the given title
    ///
    /// Titles must be unique within the workbook and valid sheet names.
    pub fn create_tab(&mut self, title: &str) -> Result<Tab<'_>> {
        if self.workbook.sheet_index(title).is_some() {
            return Err(Error::DuplicateTabTitle(title.to_string()));
        }
        let index = self.workbook.add_worksheet_with_name(title)?;
        self.tabs.push(TabState::default());
        Ok(Tab { book: self, index })
    }

    /// Get a tab by title
    pub fn tab(&mut self, title: &str) -> Option<Tab<'_>> {
        let index = self.workbook.sheet_index(title)?;
        Some(Tab { book: self, index })
    }

    /// Get a tab by creation index
    pub fn tab_at(&mut self, index: usize) -> Option<Tab<'_>> {
        if index < self.tabs.len() {
            Some(Tab { book: self, index })
        } else {
            None
        }
    }

    /// Number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The underlying document model (read-only)
    pub fn workbook(&self) -> &core::Workbook {
        &self.workbook
    }

    /// The style/font registry (read-only)
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Resolve a style to its document handle, registering it on first use
    pub fn resolve_style(&mut self, style: &CellStyle) -> Result<StyleId> {
        self.registry.resolve_style(&mut self.workbook, style)
    }

    /// Resolve a font to its document handle, registering it on first use
    pub fn resolve_font(&mut self, font: &Font) -> FontId {
        self.registry.resolve_font(&mut self.workbook, font)
    }

    // === Internal per-tab operations (used by Tab) ===

    pub(crate) fn sheet(&self, index: usize) -> Result<&Worksheet> {
        let count = self.workbook.sheet_count();
        self.workbook
            .worksheet(index)
            .ok_or_else(|| core::Error::SheetOutOfBounds(index, count).into())
    }

    pub(crate) fn sheet_mut(&mut self, index: usize) -> Result<&mut Worksheet> {
        let count = self.workbook.sheet_count();
        self.workbook
            .worksheet_mut(index)
            .ok_or_else(|| core::Error::SheetOutOfBounds(index, count).into())
    }

    pub(crate) fn sheet_title(&self, index: usize) -> &str {
        self.workbook
            .worksheet(index)
            .map(|ws| ws.name())
            .unwrap_or_default()
    }

    pub(crate) fn set_cell_value(
        &mut self,
        index: usize,
        row: u32,
        col: u16,
        content: CellContent,
    ) -> Result<()> {
        let value: CellValue = content.into();
        self.sheet_mut(index)?.set_value_at(row, col, value)?;
        self.record_modified(index, row, col);
        Ok(())
    }

    pub(crate) fn set_cell_style(
        &mut self,
        index: usize,
        row: u32,
        col: u16,
        style: &CellStyle,
    ) -> Result<()> {
        let id = self.registry.resolve_style(&mut self.workbook, style)?;
        self.sheet_mut(index)?.set_style_at(row, col, id)?;
        self.tabs[index].cell_styles.insert((row, col), style.clone());
        Ok(())
    }

    pub(crate) fn apply_cell_style(
        &mut self,
        index: usize,
        row: u32,
        col: u16,
        overlay: &CellStyle,
    ) -> Result<()> {
        let merged = match self
            .tabs
            .get(index)
            .and_then(|tab| tab.cell_styles.get(&(row, col)))
        {
            Some(current) => current.apply(overlay),
            None => overlay.clone(),
        };
        self.set_cell_style(index, row, col, &merged)
    }

    pub(crate) fn cell_style(&self, index: usize, row: u32, col: u16) -> Option<&CellStyle> {
        self.tabs
            .get(index)
            .and_then(|tab| tab.cell_styles.get(&(row, col)))
    }

    pub(crate) fn cell_value(&self, index: usize, row: u32, col: u16) -> CellValue {
        self.workbook
            .worksheet(index)
            .map(|ws| ws.value_at(row, col))
            .unwrap_or(CellValue::Empty)
    }

    pub(crate) fn merge_cells(
        &mut self,
        index: usize,
        first: CellAddress,
        last: CellAddress,
        content: CellContent,
        style: &CellStyle,
    ) -> Result<()> {
        self.set_cell_value(index, first.row, first.col, content)?;
        for col in first.col..=last.col {
            for row in first.row..=last.row {
                self.set_cell_style(index, row, col, style)?;
            }
        }
        self.sheet_mut(index)?
            .merge_cells(CellRange::new(first, last))?;
        Ok(())
    }

    pub(crate) fn highest_modified_row(&self, index: usize) -> i64 {
        self.tabs
            .get(index)
            .map(|tab| tab.highest_modified_row)
            .unwrap_or(-1)
    }

    pub(crate) fn highest_modified_col(&self, index: usize) -> i64 {
        self.tabs
            .get(index)
            .map(|tab| tab.highest_modified_col)
            .unwrap_or(-1)
    }

    /// Size every row in the dirty extent to fit its text
    pub(crate) fn autosize_rows(&mut self, index: usize) -> Result<()> {
        let highest_row = self.highest_modified_row(index);
        for row in 0..=highest_row {
            self.autosize_row(index, row as u32)?;
        }
        Ok(())
    }

    /// Delegate column sizing to the document model for the dirty extent
    pub(crate) fn autosize_cols(&mut self, index: usize) -> Result<()> {
        let highest_col = self.highest_modified_col(index);
        let sheet = self.sheet_mut(index)?;
        for col in 0..=highest_col {
            sheet.autosize_column(col as u16);
        }
        Ok(())
    }

    /// Size a single row to its tallest text cell within the dirty extent
    ///
    /// Only text cells contribute height candidates; a row whose candidates
    /// all fall at or below the sheet default is reset to the default.
    pub(crate) fn autosize_row(&mut self, index: usize, row: u32) -> Result<()> {
        let highest_col = self.highest_modified_col(index);
        let sheet = self.sheet(index)?;
        let default_height = sheet.default_row_height();

        let mut tallest = -1.0f64;
        for col in 0..=highest_col {
            let col = col as u16;
            let Some(cell) = sheet.cell(row, col) else {
                continue;
            };
            let CellValue::String(text) = &cell.value else {
                continue;
            };

            let font_size = self
                .cell_style(index, row, col)
                .and_then(|style| style.font_size_in_points())
                .unwrap_or(DEFAULT_FONT_SIZE);
            let height = estimate_row_height_points(font_size, line_count(text), default_height);
            if height > tallest {
                tallest = height;
            }
        }

        let sheet = self.sheet_mut(index)?;
        if tallest < default_height + 1.0 {
            sheet.reset_row_height(row);
        } else {
            log::trace!("row {} sized to {} points", row, tallest);
            sheet.set_row_height(row, tallest);
        }
        Ok(())
    }

    pub(crate) fn record_modified(&mut self, index: usize, row: u32, col: u16) {
        let Some(tab) = self.tabs.get_mut(index) else {
            return;
        };
        if (row as i64) > tab.highest_modified_row {
            tab.highest_modified_row = row as i64;
        }
        if (col as i64) > tab.highest_modified_col {
            tab.highest_modified_col = col as i64;
        }
    }
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}
