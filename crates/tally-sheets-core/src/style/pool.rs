//! Style and font pools for deduplication
//!
//! Cells reference styles by handle, and styles reference fonts by handle.
//! A workbook typically has many cells sharing the same formatting, so each
//! unique style/font is stored once and handed out as a small `Copy` id.

use super::{FontStyle, Style};
use ahash::AHashMap;

/// Handle to a style in a workbook's [`StylePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(u32);

impl StyleId {
    /// Index into the pool's table
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Handle to a font in a workbook's [`FontPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u32);

impl FontId {
    /// Index into the pool's table
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Deduplicating style table
///
/// Index 0 always holds the default style.
#[derive(Debug)]
pub struct StylePool {
    styles: Vec<Style>,
    lookup: AHashMap<Style, StyleId>,
}

impl StylePool {
    /// Create a new style pool with the default style at index 0
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::with_capacity(16),
            lookup: AHashMap::with_capacity(16),
        };
        pool.get_or_insert(Style::default());
        pool
    }

    /// Get or create a style, returning its handle
    ///
    /// If an identical style already exists, its existing handle is returned.
    pub fn get_or_insert(&mut self, style: Style) -> StyleId {
        if let Some(&id) = self.lookup.get(&style) {
            return id;
        }
        let id = StyleId(self.styles.len() as u32);
        self.lookup.insert(style.clone(), id);
        self.styles.push(style);
        id
    }

    /// Get a style by handle
    pub fn get(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id.index())
    }

    /// Get the default style (index 0)
    pub fn default_style(&self) -> &Style {
        &self.styles[0]
    }

    /// Get the number of styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool holds only the default style
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles with their handles
    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &Style)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, s)| (StyleId(i as u32), s))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicating font table
///
/// Index 0 always holds the default font.
#[derive(Debug)]
pub struct FontPool {
    fonts: Vec<FontStyle>,
    lookup: AHashMap<FontStyle, FontId>,
}

impl FontPool {
    /// Create a new font pool with the default font at index 0
    pub fn new() -> Self {
        let mut pool = Self {
            fonts: Vec::with_capacity(8),
            lookup: AHashMap::with_capacity(8),
        };
        pool.get_or_insert(FontStyle::default());
        pool
    }

    /// Get or create a font, returning its handle
    pub fn get_or_insert(&mut self, font: FontStyle) -> FontId {
        if let Some(&id) = self.lookup.get(&font) {
            return id;
        }
        let id = FontId(self.fonts.len() as u32);
        self.lookup.insert(font.clone(), id);
        self.fonts.push(font);
        id
    }

    /// Get a font by handle
    pub fn get(&self, id: FontId) -> Option<&FontStyle> {
        self.fonts.get(id.index())
    }

    /// Get the default font (index 0)
    pub fn default_font(&self) -> &FontStyle {
        &self.fonts[0]
    }

    /// Get the number of fonts
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Check if the pool holds only the default font
    pub fn is_empty(&self) -> bool {
        self.fonts.len() <= 1
    }
}

impl Default for FontPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FillStyle};

    #[test]
    fn default_style_is_index_zero() {
        let pool = StylePool::new();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(StyleId(0)), Some(&Style::default()));
    }

    #[test]
    fn styles_are_deduplicated() {
        let mut pool = StylePool::new();

        let mut red = Style::new();
        red.fill = FillStyle::solid(Color::RED);
        let red_again = red.clone();
        let mut blue = Style::new();
        blue.fill = FillStyle::solid(Color::BLUE);

        let id1 = pool.get_or_insert(red);
        let id2 = pool.get_or_insert(red_again);
        let id3 = pool.get_or_insert(blue);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(pool.len(), 3); // default + 2 custom
    }

    #[test]
    fn fonts_are_deduplicated() {
        let mut pool = FontPool::new();

        let mut bold = FontStyle::new();
        bold.bold = true;
        let bold_again = bold.clone();

        let id1 = pool.get_or_insert(bold.clone());
        let id2 = pool.get_or_insert(bold_again);

        assert_eq!(id1, id2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(id1), Some(&bold));
    }
}
