//! Opening the persisted state for one command invocation.

use crate::config::Config;
use crate::core::{App, SystemClock};
use crate::store::SessionStore;
use crate::ui::TerminalView;

pub type CliApp = App<SessionStore, TerminalView, SystemClock>;

/// Load the whole application state from the configured database.
pub fn open(cfg: &Config) -> CliApp {
    let db_path = cfg.database_path();
    let store = SessionStore::open(&db_path.to_string_lossy());
    let view = TerminalView::new(&cfg.separator_char);
    App::load(store, view, SystemClock, cfg.tick_interval())
}

/// Convert a 1-based CLI position to a 0-based index; 0 maps to the first row.
pub fn to_index(pos: usize) -> usize {
    pos.saturating_sub(1)
}

/// Audit helper shared by the mutating commands.
pub fn audit(app: &CliApp, operation: &str, target: &str, message: &str) {
    app.store().audit(operation, target, message);
}

#[cfg(test)]
mod tests {
    use super::to_index;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(to_index(1), 0);
        assert_eq!(to_index(5), 4);
        assert_eq!(to_index(0), 0);
    }
}
