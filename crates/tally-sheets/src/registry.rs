//! Style and font resolution
//!
//! The registry maps the layer's immutable [`CellStyle`]/[`Font`] value
//! objects to the document model's pooled handles. Lookup is by structural
//! equality: two equal values always resolve to the same handle, and a new
//! native object is materialized only the first time a value is seen.

use crate::error::{Error, Result};
use crate::font::{Font, FontOffset};
use crate::style::CellStyle;
use ahash::AHashMap;
use tally_sheets_core as core;
use tally_sheets_core::{BorderEdge, FontId, StyleId};

/// Value-keyed cache of resolved styles and fonts
///
/// Scoped to one workbook and insert-only: entries are never evicted while
/// the workbook is being built.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: AHashMap<CellStyle, StyleId>,
    fonts: AHashMap<Font, FontId>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a style to its handle, materializing it on first sight
    ///
    /// Every set field of `style` is copied onto a fresh native style;
    /// unset fields are left at the document model's defaults. Calling this
    /// again with a structurally equal value returns the identical handle
    /// without touching the workbook.
    pub fn resolve_style(
        &mut self,
        workbook: &mut core::Workbook,
        style: &CellStyle,
    ) -> Result<StyleId> {
        if let Some(&id) = self.styles.get(style) {
            return Ok(id);
        }

        let font = match style.font() {
            Some(font) => Some(self.resolve_font(workbook, font)),
            None => None,
        };

        let native = build_native_style(style, font)?;
        let id = workbook.add_style(native);
        self.styles.insert(style.clone(), id);
        log::debug!("materialized new cell style ({} registered)", self.styles.len());
        Ok(id)
    }

    /// Resolve a font to its handle, materializing it on first sight
    pub fn resolve_font(&mut self, workbook: &mut core::Workbook, font: &Font) -> FontId {
        if let Some(&id) = self.fonts.get(font) {
            return id;
        }

        let native = build_native_font(font);
        let id = workbook.add_font(native);
        self.fonts.insert(font.clone(), id);
        log::debug!("materialized new font ({} registered)", self.fonts.len());
        id
    }

    /// Look up the handle of an already-registered style
    pub fn style_handle(&self, style: &CellStyle) -> Option<StyleId> {
        self.styles.get(style).copied()
    }

    /// Look up the handle of an already-registered font
    pub fn font_handle(&self, font: &Font) -> Option<FontId> {
        self.fonts.get(font).copied()
    }

    /// Number of distinct styles registered so far
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Number of distinct fonts registered so far
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}

/// Copy every set field of a style onto a fresh native style
fn build_native_style(style: &CellStyle, font: Option<FontId>) -> Result<core::Style> {
    let mut native = core::Style::default();
    native.font = font;

    if let Some(align) = style.align() {
        native.alignment.horizontal = align;
    }
    if let Some(align) = style.vertical_align() {
        native.alignment.vertical = align;
    }
    if let Some(wrap) = style.wrap_text() {
        native.alignment.wrap_text = wrap;
    }
    if let Some(indention) = style.indention() {
        native.alignment.indent =
            u8::try_from(indention).map_err(|_| Error::ValueOutOfRange {
                field: "indention",
                value: indention as i64,
            })?;
    }
    if let Some(rotation) = style.rotation() {
        native.alignment.rotation =
            i16::try_from(rotation).map_err(|_| Error::ValueOutOfRange {
                field: "rotation",
                value: rotation as i64,
            })?;
    }

    native.border.top = build_native_edge(style.top_border(), style.top_border_color());
    native.border.left = build_native_edge(style.left_border(), style.left_border_color());
    native.border.bottom = build_native_edge(style.bottom_border(), style.bottom_border_color());
    native.border.right = build_native_edge(style.right_border(), style.right_border_color());

    if let Some(locked) = style.locked() {
        native.protection.locked = locked;
    }
    if let Some(hidden) = style.hidden() {
        native.protection.hidden = hidden;
    }

    if let Some(color) = style.background_color() {
        native.fill = core::FillStyle::solid(color);
    }

    if let Some(format) = style.data_format() {
        native.number_format = core::NumberFormat::from_string(format);
    }

    Ok(native)
}

/// An edge is materialized when either its line style or its color is set;
/// the other half stays at the native default.
fn build_native_edge(
    line: Option<core::BorderLineStyle>,
    color: Option<core::Color>,
) -> Option<BorderEdge> {
    if line.is_none() && color.is_none() {
        return None;
    }
    Some(BorderEdge::new(
        line.unwrap_or_default(),
        color.unwrap_or_default(),
    ))
}

/// Copy every set field of a font onto a fresh native font
fn build_native_font(font: &Font) -> core::FontStyle {
    let mut native = core::FontStyle::default();

    if let Some(name) = font.name() {
        native.name = name.to_string();
    }
    if let Some(size) = font.size_in_points() {
        native.size = size as f64;
    }
    if let Some(bold) = font.bold() {
        native.bold = bold;
    }
    if let Some(italic) = font.italic() {
        native.italic = italic;
    }
    if let Some(strikeout) = font.strikeout() {
        native.strikethrough = strikeout;
    }
    if let Some(underline) = font.underline() {
        native.underline = if underline {
            core::Underline::Single
        } else {
            core::Underline::None
        };
    }
    if let Some(double) = font.double_underline() {
        native.underline = if double {
            core::Underline::Double
        } else {
            core::Underline::None
        };
    }
    if let Some(offset) = font.offset() {
        native.vertical_align = match offset {
            FontOffset::Baseline => core::FontVerticalAlign::Baseline,
            FontOffset::Superscript => core::FontVerticalAlign::Superscript,
            FontOffset::Subscript => core::FontVerticalAlign::Subscript,
        };
    }

    native
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tally_sheets_core::{Color, HorizontalAlignment};

    #[test]
    fn equal_values_resolve_to_the_identical_handle() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let one = CellStyle::new()
            .with_align(HorizontalAlignment::Center)
            .with_wrap_text(true)
            .with_bold(true);
        let two = CellStyle::new()
            .with_align(HorizontalAlignment::Center)
            .with_wrap_text(true)
            .with_bold(true);

        let id1 = registry.resolve_style(&mut wb, &one).unwrap();
        let id2 = registry.resolve_style(&mut wb, &two).unwrap();

        assert_eq!(id1, id2);
        assert_eq!(registry.style_count(), 1);
        assert_eq!(registry.font_count(), 1);
    }

    #[test]
    fn resolve_is_idempotent_on_the_same_instance() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let style = CellStyle::center();
        let id1 = registry.resolve_style(&mut wb, &style).unwrap();
        let count = registry.style_count();
        let id2 = registry.resolve_style(&mut wb, &style).unwrap();

        assert_eq!(id1, id2);
        assert_eq!(registry.style_count(), count);
    }

    #[test]
    fn differing_in_one_field_gets_a_distinct_handle() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let base = CellStyle::new().with_align(HorizontalAlignment::Center).with_wrap_text(true);
        let variant = base.clone().with_wrap_text(false);

        let id1 = registry.resolve_style(&mut wb, &base).unwrap();
        let id2 = registry.resolve_style(&mut wb, &variant).unwrap();

        assert_ne!(id1, id2);
        assert_eq!(registry.style_count(), 2);
    }

    #[test]
    fn fonts_are_shared_between_styles() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let left = CellStyle::left().with_bold(true);
        let right = CellStyle::right().with_bold(true);

        registry.resolve_style(&mut wb, &left).unwrap();
        registry.resolve_style(&mut wb, &right).unwrap();

        assert_eq!(registry.style_count(), 2);
        assert_eq!(registry.font_count(), 1);

        let font_id = registry.font_handle(&Font::new().with_bold(true)).unwrap();
        assert!(wb.font(font_id).unwrap().bold);
    }

    #[test]
    fn set_fields_are_copied_unset_fields_stay_default() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let style = CellStyle::new()
            .with_align(HorizontalAlignment::Right)
            .with_top_border_color(Color::RED)
            .with_background_color(Color::YELLOW);
        let id = registry.resolve_style(&mut wb, &style).unwrap();

        let native = wb.style(id).unwrap();
        assert_eq!(native.alignment.horizontal, HorizontalAlignment::Right);
        // color-only edge keeps the default (no-line) style
        let top = native.border.top.as_ref().unwrap();
        assert_eq!(top.color, Color::RED);
        assert_eq!(top.style, core::BorderLineStyle::None);
        assert!(native.border.bottom.is_none());
        assert_eq!(native.fill, core::FillStyle::solid(Color::YELLOW));
        // untouched parts stay at document defaults
        assert_eq!(native.number_format, core::NumberFormat::General);
        assert!(native.font.is_none());
    }

    #[test]
    fn out_of_range_indention_is_rejected_at_resolve_time() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let style = CellStyle::new().with_indention(1000);
        let err = registry.resolve_style(&mut wb, &style).unwrap_err();
        assert!(matches!(err, Error::ValueOutOfRange { field: "indention", .. }));

        let style = CellStyle::new().with_rotation(100_000);
        let err = registry.resolve_style(&mut wb, &style).unwrap_err();
        assert!(matches!(err, Error::ValueOutOfRange { field: "rotation", .. }));
    }

    #[test]
    fn double_underline_maps_to_native_double() {
        let mut wb = core::Workbook::empty();
        let mut registry = StyleRegistry::new();

        let font = Font::new().with_double_underline(true);
        let id = registry.resolve_font(&mut wb, &font);
        assert_eq!(wb.font(id).unwrap().underline, core::Underline::Double);

        let font = Font::new().with_underline(true);
        let id = registry.resolve_font(&mut wb, &font);
        assert_eq!(wb.font(id).unwrap().underline, core::Underline::Single);
    }
}
