//! Immutable cell style value object

use crate::font::Font;
use tally_sheets_core::{BorderLineStyle, Color, HorizontalAlignment, VerticalAlignment};

/// Fill color of the "bad" entry in Excel's styles box
pub const COLOR_BAD: Color = Color::rgb(255, 199, 206);
/// Fill color of the "good" entry in Excel's styles box
pub const COLOR_GOOD: Color = Color::rgb(198, 239, 206);
/// Fill color of the "neutral" entry in Excel's styles box
pub const COLOR_NEUTRAL: Color = Color::rgb(255, 235, 156);
/// Fill color of the "note" entry in Excel's styles box
pub const COLOR_NOTE: Color = Color::rgb(255, 255, 204);

/// An immutable description of a cell's full visual style
///
/// Like [`Font`], every field starts out unset and values are built by
/// chaining `with_*` calls. A small style with only a few fields set can be
/// layered onto any base style with [`CellStyle::apply`] without disturbing
/// the base's other properties, e.g. an "invalid cell" overlay carrying
/// just a red background and red borders.
///
/// ```
/// use tally_sheets::CellStyle;
///
/// let header = CellStyle::header().with_font_name("Arial");
/// let highlighted = header.apply(&CellStyle::new().with_background_color(tally_sheets::COLOR_NOTE));
/// assert_eq!(highlighted.font_name(), Some("Arial"));
/// ```
///
/// The font is owned by value: copying a style never aliases its font with
/// the original. Style-level properties never implicitly create a font; the
/// font field is only populated once a font-level property is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    font: Option<Font>,
    align: Option<HorizontalAlignment>,
    vertical_align: Option<VerticalAlignment>,
    top_border: Option<BorderLineStyle>,
    right_border: Option<BorderLineStyle>,
    bottom_border: Option<BorderLineStyle>,
    left_border: Option<BorderLineStyle>,
    top_border_color: Option<Color>,
    left_border_color: Option<Color>,
    bottom_border_color: Option<Color>,
    right_border_color: Option<Color>,
    data_format: Option<String>,
    background_color: Option<Color>,
    locked: Option<bool>,
    hidden: Option<bool>,
    wrap_text: Option<bool>,
    indention: Option<u32>,
    rotation: Option<i32>,
}

impl CellStyle {
    /// Create a style with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    // === Stock styles ===

    /// Horizontally centered, whole numbers
    pub fn center() -> Self {
        Self::new()
            .with_align(HorizontalAlignment::Center)
            .with_num_decimals(0)
    }

    /// Right-aligned, whole numbers
    pub fn right() -> Self {
        Self::center().with_align(HorizontalAlignment::Right)
    }

    /// Left-aligned, whole numbers
    pub fn left() -> Self {
        Self::center().with_align(HorizontalAlignment::Left)
    }

    /// Centered with one decimal place
    pub fn center_one_decimal() -> Self {
        Self::center().with_num_decimals(1)
    }

    /// Bold, centered, medium border on all sides
    pub fn subtitle() -> Self {
        Self::center()
            .with_bold(true)
            .with_surround_border(BorderLineStyle::Medium)
    }

    /// Subtitle at 14 points
    pub fn title() -> Self {
        Self::subtitle().with_font_size_in_points(14)
    }

    /// Subtitle with vertical centering and wrapped text
    pub fn header() -> Self {
        Self::subtitle()
            .with_vertical_align(VerticalAlignment::Center)
            .with_wrap_text(true)
    }

    // === Merging ===

    /// Merge `overlay` onto this style, field by field
    ///
    /// Every set field of the overlay wins; every unset field keeps this
    /// style's value. The font is merged recursively: if this style has no
    /// font the overlay's font (if any) is taken whole, otherwise the
    /// overlay's font is applied onto this style's font.
    pub fn apply(&self, overlay: &CellStyle) -> CellStyle {
        CellStyle {
            font: match (&self.font, &overlay.font) {
                (None, overlay_font) => overlay_font.clone(),
                (Some(base), Some(ov)) => Some(base.apply(ov)),
                (Some(base), None) => Some(base.clone()),
            },
            align: overlay.align.or(self.align),
            vertical_align: overlay.vertical_align.or(self.vertical_align),
            top_border: overlay.top_border.or(self.top_border),
            right_border: overlay.right_border.or(self.right_border),
            bottom_border: overlay.bottom_border.or(self.bottom_border),
            left_border: overlay.left_border.or(self.left_border),
            top_border_color: overlay.top_border_color.or(self.top_border_color),
            left_border_color: overlay.left_border_color.or(self.left_border_color),
            bottom_border_color: overlay.bottom_border_color.or(self.bottom_border_color),
            right_border_color: overlay.right_border_color.or(self.right_border_color),
            data_format: overlay
                .data_format
                .clone()
                .or_else(|| self.data_format.clone()),
            background_color: overlay.background_color.or(self.background_color),
            locked: overlay.locked.or(self.locked),
            hidden: overlay.hidden.or(self.hidden),
            wrap_text: overlay.wrap_text.or(self.wrap_text),
            indention: overlay.indention.or(self.indention),
            rotation: overlay.rotation.or(self.rotation),
        }
    }

    // === Font-level properties ===
    //
    // Each of these creates the font on first use; the style's font stays
    // absent until one of them is called.

    /// The owned font, if any font-level property has been set
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// Replace the owned font wholesale
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    fn font_or_default(&self) -> Font {
        self.font.clone().unwrap_or_default()
    }

    /// Bold flag of the owned font
    pub fn bold(&self) -> Option<bool> {
        self.font.as_ref().and_then(|f| f.bold())
    }

    /// Set the bold flag on the owned font
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font = Some(self.font_or_default().with_bold(bold));
        self
    }

    /// Italic flag of the owned font
    pub fn italic(&self) -> Option<bool> {
        self.font.as_ref().and_then(|f| f.italic())
    }

    /// Set the italic flag on the owned font
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.font = Some(self.font_or_default().with_italic(italic));
        self
    }

    /// Underline flag of the owned font
    pub fn underline(&self) -> Option<bool> {
        self.font.as_ref().and_then(|f| f.underline())
    }

    /// Set the underline flag on the owned font
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.font = Some(self.font_or_default().with_underline(underline));
        self
    }

    /// Double-underline flag of the owned font
    pub fn double_underline(&self) -> Option<bool> {
        self.font.as_ref().and_then(|f| f.double_underline())
    }

    /// Set the double-underline flag on the owned font
    pub fn with_double_underline(mut self, double_underline: bool) -> Self {
        self.font = Some(self.font_or_default().with_double_underline(double_underline));
        self
    }

    /// Strikeout flag of the owned font
    pub fn strikeout(&self) -> Option<bool> {
        self.font.as_ref().and_then(|f| f.strikeout())
    }

    /// Set the strikeout flag on the owned font
    pub fn with_strikeout(mut self, strikeout: bool) -> Self {
        self.font = Some(self.font_or_default().with_strikeout(strikeout));
        self
    }

    /// Family name of the owned font
    pub fn font_name(&self) -> Option<&str> {
        self.font.as_ref().and_then(|f| f.name())
    }

    /// Set the family name on the owned font
    pub fn with_font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font = Some(self.font_or_default().with_name(name));
        self
    }

    /// Size in points of the owned font
    pub fn font_size_in_points(&self) -> Option<u32> {
        self.font.as_ref().and_then(|f| f.size_in_points())
    }

    /// Set the size in points on the owned font
    pub fn with_font_size_in_points(mut self, size: u32) -> Self {
        self.font = Some(self.font_or_default().with_size_in_points(size));
        self
    }

    /// Super-/subscript placement of the owned font
    pub fn font_offset(&self) -> Option<crate::font::FontOffset> {
        self.font.as_ref().and_then(|f| f.offset())
    }

    /// Set the super-/subscript placement on the owned font
    pub fn with_font_offset(mut self, offset: crate::font::FontOffset) -> Self {
        self.font = Some(self.font_or_default().with_offset(offset));
        self
    }

    // === Alignment ===

    /// Horizontal alignment
    pub fn align(&self) -> Option<HorizontalAlignment> {
        self.align
    }

    /// Set the horizontal alignment
    pub fn with_align(mut self, align: HorizontalAlignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Vertical alignment
    pub fn vertical_align(&self) -> Option<VerticalAlignment> {
        self.vertical_align
    }

    /// Set the vertical alignment
    pub fn with_vertical_align(mut self, align: VerticalAlignment) -> Self {
        self.vertical_align = Some(align);
        self
    }

    // === Borders ===

    /// Top border line style
    pub fn top_border(&self) -> Option<BorderLineStyle> {
        self.top_border
    }

    /// Set the top border line style
    pub fn with_top_border(mut self, border: BorderLineStyle) -> Self {
        self.top_border = Some(border);
        self
    }

    /// Right border line style
    pub fn right_border(&self) -> Option<BorderLineStyle> {
        self.right_border
    }

    /// Set the right border line style
    pub fn with_right_border(mut self, border: BorderLineStyle) -> Self {
        self.right_border = Some(border);
        self
    }

    /// Bottom border line style
    pub fn bottom_border(&self) -> Option<BorderLineStyle> {
        self.bottom_border
    }

    /// Set the bottom border line style
    pub fn with_bottom_border(mut self, border: BorderLineStyle) -> Self {
        self.bottom_border = Some(border);
        self
    }

    /// Left border line style
    pub fn left_border(&self) -> Option<BorderLineStyle> {
        self.left_border
    }

    /// Set the left border line style
    pub fn with_left_border(mut self, border: BorderLineStyle) -> Self {
        self.left_border = Some(border);
        self
    }

    /// Set the same line style on all four borders
    pub fn with_surround_border(self, border: BorderLineStyle) -> Self {
        self.with_top_border(border)
            .with_left_border(border)
            .with_bottom_border(border)
            .with_right_border(border)
    }

    /// Top border color
    pub fn top_border_color(&self) -> Option<Color> {
        self.top_border_color
    }

    /// Set the top border color
    pub fn with_top_border_color(mut self, color: Color) -> Self {
        self.top_border_color = Some(color);
        self
    }

    /// Left border color
    pub fn left_border_color(&self) -> Option<Color> {
        self.left_border_color
    }

    /// Set the left border color
    pub fn with_left_border_color(mut self, color: Color) -> Self {
        self.left_border_color = Some(color);
        self
    }

    /// Bottom border color
    pub fn bottom_border_color(&self) -> Option<Color> {
        self.bottom_border_color
    }

    /// Set the bottom border color
    pub fn with_bottom_border_color(mut self, color: Color) -> Self {
        self.bottom_border_color = Some(color);
        self
    }

    /// Right border color
    pub fn right_border_color(&self) -> Option<Color> {
        self.right_border_color
    }

    /// Set the right border color
    pub fn with_right_border_color(mut self, color: Color) -> Self {
        self.right_border_color = Some(color);
        self
    }

    /// Set the same color on all four border sides
    pub fn with_surround_border_color(self, color: Color) -> Self {
        self.with_top_border_color(color)
            .with_left_border_color(color)
            .with_bottom_border_color(color)
            .with_right_border_color(color)
    }

    // === Other cell-level properties ===

    /// Data format string (numeric display pattern)
    pub fn data_format(&self) -> Option<&str> {
        self.data_format.as_deref()
    }

    /// Set the data format string
    pub fn with_data_format<S: Into<String>>(mut self, format: S) -> Self {
        self.data_format = Some(format.into());
        self
    }

    /// Set a data format showing the given number of decimal places
    pub fn with_num_decimals(self, num_decimals: usize) -> Self {
        let format = if num_decimals < 1 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(num_decimals))
        };
        self.with_data_format(format)
    }

    /// Background color
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Locked flag
    pub fn locked(&self) -> Option<bool> {
        self.locked
    }

    /// Set the locked flag
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// Hidden flag
    pub fn hidden(&self) -> Option<bool> {
        self.hidden
    }

    /// Set the hidden flag
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Wrap-text flag
    pub fn wrap_text(&self) -> Option<bool> {
        self.wrap_text
    }

    /// Set the wrap-text flag
    pub fn with_wrap_text(mut self, wrap_text: bool) -> Self {
        self.wrap_text = Some(wrap_text);
        self
    }

    /// Indention level
    pub fn indention(&self) -> Option<u32> {
        self.indention
    }

    /// Set the indention level
    pub fn with_indention(mut self, indention: u32) -> Self {
        self.indention = Some(indention);
        self
    }

    /// Text rotation in degrees
    pub fn rotation(&self) -> Option<i32> {
        self.rotation
    }

    /// Set the text rotation in degrees
    pub fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = Some(rotation);
        self
    }
}
