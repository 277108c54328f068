//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn dim(s: &str) -> String {
    format!("\x1b[90m{}\x1b[0m", s)
}

/// Left-align `s` in `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(used)), s)
}

/// Display width of the widest string, at least `min`.
pub fn max_width<'a, I>(items: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .map(UnicodeWidthStr::width)
        .fold(min, usize::max)
}
