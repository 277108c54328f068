use serde::Serialize;

/// A single counted row of the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub name: String,
    pub count: u64,
}

impl Row {
    /// New row named after its 1-based position at creation time.
    pub fn numbered(position: usize) -> Self {
        Self {
            name: default_row_name(position),
            count: 0,
        }
    }
}

/// `"Row {n}"` with `n` 1-based.
pub fn default_row_name(position: usize) -> String {
    format!("Row {}", position)
}

/// Stored counts are plain JSON numbers; anything negative, fractional or
/// non-finite is folded into the non-negative integer domain.
pub(crate) fn clamp_stored_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}
