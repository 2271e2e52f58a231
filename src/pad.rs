//! # Padding Helpers
//!
//! Fixed-width cell padding shared by the layout modules. Widths are counted in
//! chars so that every cell lines up in a monospaced font.

/// Fill character used for tab cells.
pub const DASH: char = '-';

/// A run of `n` dashes.
pub fn dashes(n: usize) -> String {
    DASH.to_string().repeat(n)
}

/// Center `label` inside a cell of `total_width` dashes.
///
/// When the leftover is odd the extra dash goes to the right
/// (`left = floor(leftover / 2)`).
///
/// # Example
/// ```
/// use songbook::pad::center_pad;
///
/// assert_eq!(center_pad("3", 2), "3-");
/// assert_eq!(center_pad("3", 3), "-3-");
/// assert_eq!(center_pad("12", 3), "12-");
/// ```
pub fn center_pad(label: &str, total_width: usize) -> String {
    center_pad_with(label, total_width, DASH)
}

// Callers guarantee `total_width >= label.chars().count()`. A narrower cell
// returns the label unpadded.
fn center_pad_with(label: &str, total_width: usize, fill: char) -> String {
    let len = label.chars().count();
    let padding = total_width.saturating_sub(len);
    let left = padding / 2;
    let right = padding - left;

    let mut cell = String::with_capacity(label.len() + padding);
    cell.extend(std::iter::repeat(fill).take(left));
    cell.push_str(label);
    cell.extend(std::iter::repeat(fill).take(right));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes() {
        assert_eq!(dashes(0), "");
        assert_eq!(dashes(3), "---");
    }

    #[test]
    fn test_extra_padding_goes_right() {
        assert_eq!(center_pad("7", 2), "7-");
        assert_eq!(center_pad("7", 4), "-7--");
        assert_eq!(center_pad("10", 5), "-10--");
    }

    #[test]
    fn test_exact_fit() {
        assert_eq!(center_pad("24", 2), "24");
    }

    #[test]
    fn test_narrow_cell_is_unpadded() {
        assert_eq!(center_pad("123", 1), "123");
    }

    #[test]
    fn test_custom_fill() {
        assert_eq!(center_pad_with("Am", 6, ' '), "  Am  ");
        assert_eq!(center_pad_with("G", 4, '.'), ".G..");
    }
}
