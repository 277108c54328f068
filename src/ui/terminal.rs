//! Terminal rendering of the counter.

use crate::models::Row;
use crate::models::stopwatch::toggle_label;
use crate::ui::view::View;
use crate::utils::format_elapsed;
use crate::utils::formatting::{bold, dim, max_width, pad_left, pad_right};
use std::io::{self, IsTerminal, Write};

pub struct TerminalView {
    separator_char: String,
    /// Redraw the stopwatch in place instead of printing a new line.
    live: bool,
    /// Set the terminal window title along with the project name.
    title: bool,
    out: Box<dyn Write>,
}

impl TerminalView {
    pub fn new(separator_char: &str) -> Self {
        let stdout = io::stdout();
        let title = stdout.is_terminal();
        Self::with_writer(separator_char, Box::new(stdout)).with_title(title)
    }

    pub fn with_writer(separator_char: &str, out: Box<dyn Write>) -> Self {
        let separator_char = if separator_char.is_empty() {
            "-".to_string()
        } else {
            separator_char.to_string()
        };
        Self {
            separator_char,
            live: false,
            title: false,
            out,
        }
    }

    pub fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    pub fn set_live(&mut self, live: bool) {
        if self.live && !live {
            let _ = writeln!(self.out);
        }
        self.live = live;
    }

    fn separator(&self, width: usize) -> String {
        self.separator_char.repeat(width)
    }
}

/// Rows as aligned text lines, header first.
pub fn format_rows(rows: &[Row], separator: &str) -> Vec<String> {
    let pos_w = rows.len().to_string().len().max(1);
    let name_w = max_width(rows.iter().map(|r| r.name.as_str()), 4);
    let count_w = rows
        .iter()
        .map(|r| r.count.to_string().len())
        .max()
        .unwrap_or(1)
        .max(5);
    let removable = rows.len() > 1;

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{}  {}  {}  Remove",
        pad_left("#", pos_w),
        pad_right("Name", name_w),
        pad_left("Count", count_w)
    ));
    lines.push(separator.repeat(pos_w + name_w + count_w + 12));

    for (i, row) in rows.iter().enumerate() {
        lines.push(format!(
            "{}  {}  {}  {}",
            pad_left(&(i + 1).to_string(), pos_w),
            pad_right(&row.name, name_w),
            pad_left(&row.count.to_string(), count_w),
            if removable { "yes" } else { "-" }
        ));
    }
    lines
}

/// `HH:MM:SS [Label]`
pub fn format_stopwatch(elapsed_ms: u64, running: bool) -> String {
    format!("{} [{}]", format_elapsed(elapsed_ms), toggle_label(running))
}

impl View for TerminalView {
    fn render_rows(&mut self, rows: &[Row]) {
        let lines = format_rows(rows, &self.separator_char);
        for line in lines {
            let _ = writeln!(self.out, "{}", line);
        }
        if rows.len() <= 1 {
            let _ = writeln!(
                self.out,
                "{}",
                dim("(the last row cannot be removed)")
            );
        }
    }

    fn render_stopwatch(&mut self, elapsed_ms: u64, running: bool) {
        let text = format!("⏱  {}", format_stopwatch(elapsed_ms, running));
        if self.live {
            let _ = write!(self.out, "\r{}", text);
        } else {
            let _ = writeln!(self.out, "{}", text);
        }
        let _ = self.out.flush();
    }

    fn render_project_name(&mut self, name: &str) {
        if self.title {
            let _ = write!(self.out, "\x1b]0;{}\x07", name);
        }
        let line = self.separator(name.chars().count().max(8));
        let _ = writeln!(self.out, "{}\n{}", bold(name), line);
    }
}
