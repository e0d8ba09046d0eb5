//! Immutable font value object

/// Super-/subscript placement of a font
///
/// `Baseline` is an explicit setting and participates in merging like any
/// other value; an offset that was never set is simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontOffset {
    /// Normal baseline placement
    Baseline,
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
}

/// An immutable description of a font's visual attributes
///
/// Every field starts out unset, which is distinct from `false`/zero: an
/// unset field never overwrites a set one during [`Font::apply`]. Values are
/// built by chaining `with_*` calls, each returning a new `Font`:
///
/// ```
/// use tally_sheets::Font;
///
/// let emphasis = Font::new().with_bold(true).with_size_in_points(14);
/// assert_eq!(emphasis.bold(), Some(true));
/// assert_eq!(emphasis.italic(), None);
/// ```
///
/// Equality and hashing cover every field, so two fonts built through
/// different chains of calls compare equal whenever their fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Font {
    name: Option<String>,
    offset: Option<FontOffset>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    double_underline: Option<bool>,
    strikeout: Option<bool>,
    size_in_points: Option<u32>,
}

impl Font {
    /// Create a font with every attribute unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `overlay` onto this font, field by field
    ///
    /// For every attribute, the result takes the overlay's value when it is
    /// set and this font's value otherwise. Pure; neither input is modified.
    pub fn apply(&self, overlay: &Font) -> Font {
        Font {
            name: overlay.name.clone().or_else(|| self.name.clone()),
            offset: overlay.offset.or(self.offset),
            bold: overlay.bold.or(self.bold),
            italic: overlay.italic.or(self.italic),
            underline: overlay.underline.or(self.underline),
            double_underline: overlay.double_underline.or(self.double_underline),
            strikeout: overlay.strikeout.or(self.strikeout),
            size_in_points: overlay.size_in_points.or(self.size_in_points),
        }
    }

    /// Font family name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the font family name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Super-/subscript placement
    pub fn offset(&self) -> Option<FontOffset> {
        self.offset
    }

    /// Set the super-/subscript placement
    pub fn with_offset(mut self, offset: FontOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Bold flag
    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    /// Set the bold flag
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Italic flag
    pub fn italic(&self) -> Option<bool> {
        self.italic
    }

    /// Set the italic flag
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Single-underline flag
    pub fn underline(&self) -> Option<bool> {
        self.underline
    }

    /// Set the single-underline flag, clearing any double-underline setting
    ///
    /// Single and double underline are mutually exclusive.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self.double_underline = None;
        self
    }

    /// Double-underline flag
    pub fn double_underline(&self) -> Option<bool> {
        self.double_underline
    }

    /// Set the double-underline flag, clearing any single-underline setting
    ///
    /// Single and double underline are mutually exclusive.
    pub fn with_double_underline(mut self, double_underline: bool) -> Self {
        self.double_underline = Some(double_underline);
        self.underline = None;
        self
    }

    /// Strikeout flag
    pub fn strikeout(&self) -> Option<bool> {
        self.strikeout
    }

    /// Set the strikeout flag
    pub fn with_strikeout(mut self, strikeout: bool) -> Self {
        self.strikeout = Some(strikeout);
        self
    }

    /// Font size in points
    pub fn size_in_points(&self) -> Option<u32> {
        self.size_in_points
    }

    /// Set the font size in points
    pub fn with_size_in_points(mut self, size: u32) -> Self {
        self.size_in_points = Some(size);
        self
    }
}
