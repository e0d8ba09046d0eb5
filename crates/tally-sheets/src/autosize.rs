//! Row height estimation
//!
//! A crude approximation of how a spreadsheet application sizes rows for
//! wrapped text: a constant line-height factor over the font size, with no
//! per-character metrics. Traded for determinism and speed.

/// Line height as a multiple of the font size
const LINE_HEIGHT_FACTOR: f64 = 1.3;

/// Estimate the height in points of a row showing `num_lines` lines of text
/// at the given font size.
///
/// The raw height is rounded to the nearest quarter point. Rows are never
/// shrunk below the sheet default, only grown: anything under
/// `default_row_height_points + 1` comes back as the default.
pub fn estimate_row_height_points(
    font_size_points: u32,
    num_lines: u32,
    default_row_height_points: f64,
) -> f64 {
    let line_height = LINE_HEIGHT_FACTOR * font_size_points as f64;
    let mut height = line_height * num_lines as f64;
    height = (height * 4.0).round() / 4.0; // round to the nearest 0.25

    if height < default_row_height_points + 1.0 {
        height = default_row_height_points;
    }
    height
}

/// Number of display lines in a text value: 1 plus embedded newlines.
pub fn line_count(text: &str) -> u32 {
    1 + text.bytes().filter(|&b| b == b'\n').count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn five_lines_at_eleven_points() {
        // 11 * 1.3 * 5 = 71.5, already on a quarter-point boundary
        assert_eq!(estimate_row_height_points(11, 5, 15.0), 71.5);
        assert_eq!(estimate_row_height_points(11, 5, 70.0), 71.5);
    }

    #[test]
    fn rounds_to_nearest_quarter_point() {
        // 13 * 1.3 * 3 = 50.7 -> 50.75
        assert_eq!(estimate_row_height_points(13, 3, 15.0), 50.75);
        // 12 * 1.3 * 1 = 15.6 -> 15.5, below 15 + 1 -> default
        assert_eq!(estimate_row_height_points(12, 1, 15.0), 15.0);
    }

    #[test]
    fn never_shrinks_below_default() {
        // 6 * 1.3 * 1 = 7.8, well under any normal default
        assert_eq!(estimate_row_height_points(6, 1, 15.0), 15.0);
        assert_eq!(estimate_row_height_points(6, 1, 9.0), 9.0);
        // but a default small enough to be exceeded is left behind
        assert_eq!(estimate_row_height_points(6, 1, 6.0), 7.75);
    }

    #[test]
    fn counts_lines() {
        assert_eq!(line_count("one line"), 1);
        assert_eq!(line_count("two\nlines"), 2);
        assert_eq!(line_count("three\nlines\nhere"), 3);
        assert_eq!(line_count(""), 1);
    }
}
