use crate::models::Row;

/// Rendering surface the application state is shown on.
///
/// The controller calls these after every persisted mutation; a view never
/// reaches back into the state.
pub trait View {
    /// One entry per row; removal is only offered while more than one row exists.
    fn render_rows(&mut self, rows: &[Row]);

    /// Elapsed time plus the toggle label ("Start" when stopped, "Stop" when running).
    fn render_stopwatch(&mut self, elapsed_ms: u64, running: bool);

    /// Project name, also used as the window/terminal title.
    fn render_project_name(&mut self, name: &str);
}

/// What a [`RecordingView`] was asked to draw.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Rows(Vec<Row>),
    Stopwatch { elapsed_ms: u64, running: bool },
    ProjectName(String),
}

/// View that keeps every render call.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<Rendered>,
}

#[cfg(test)]
impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Rendered> {
        self.calls.last()
    }

    pub fn last_rows(&self) -> Option<&[Row]> {
        self.calls.iter().rev().find_map(|c| match c {
            Rendered::Rows(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    pub fn last_stopwatch(&self) -> Option<(u64, bool)> {
        self.calls.iter().rev().find_map(|c| match c {
            Rendered::Stopwatch {
                elapsed_ms,
                running,
            } => Some((*elapsed_ms, *running)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

#[cfg(test)]
impl View for RecordingView {
    fn render_rows(&mut self, rows: &[Row]) {
        self.calls.push(Rendered::Rows(rows.to_vec()));
    }

    fn render_stopwatch(&mut self, elapsed_ms: u64, running: bool) {
        self.calls.push(Rendered::Stopwatch {
            elapsed_ms,
            running,
        });
    }

    fn render_project_name(&mut self, name: &str) {
        self.calls.push(Rendered::ProjectName(name.to_string()));
    }
}
