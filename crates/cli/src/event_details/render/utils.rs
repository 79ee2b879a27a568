//! Small rendering helpers

use unicode_width::UnicodeWidthStr;

/// Truncate a string to a maximum number of characters.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Right-pad a string to a display width (not a char count), so box borders
/// line up around emoji and wide glyphs.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(current)))
}
