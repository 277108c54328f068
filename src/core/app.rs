//! Application controller.
//!
//! `App` owns the three sibling models together with the store, the clock and
//! the view. Every mutation follows the same path: change the in-memory
//! model, persist it, then re-render the affected view.

use crate::core::clock::Clock;
use crate::core::ticker::Ticker;
use crate::models::{PersistedRows, ProjectIdentity, RowList, Stopwatch};
use crate::store::{KeyValueStore, keys};
use crate::ui::messages::warning;
use crate::ui::view::View;
use std::time::{Duration, Instant};

pub struct App<S: KeyValueStore, V: View, C: Clock> {
    store: S,
    view: V,
    clock: C,
    project: ProjectIdentity,
    rows: RowList,
    stopwatch: Stopwatch,
    ticker: Ticker,
    /// Set after the first failed write; from then on the session is memory-only.
    memory_only: bool,
}

/// Read a key, treating a failing store like an empty one.
fn read<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warning(format!("Could not read '{}': {}", key, e));
            None
        }
    }
}

impl<S: KeyValueStore, V: View, C: Clock> App<S, V, C> {
    /// Build the state from the store. Legacy row data is migrated here,
    /// before anything else can touch it.
    pub fn load(store: S, view: V, clock: C, tick_interval: Duration) -> Self {
        let project = ProjectIdentity::from_persisted(read(&store, keys::PROJECT_NAME).as_deref());

        let rows_raw = read(&store, keys::ROWS);
        let decoded = PersistedRows::decode(rows_raw.as_deref());
        let decoded_any = decoded.is_some();
        let rows = decoded.map_or_else(RowList::default, |p| RowList::from_rows(p.normalize()));

        let stopwatch = Stopwatch::from_persisted(
            read(&store, keys::STOPWATCH_ELAPSED).as_deref(),
            read(&store, keys::STOPWATCH_RUNNING).as_deref(),
            read(&store, keys::STOPWATCH_START_TIME).as_deref(),
        );

        let mut app = Self {
            store,
            view,
            clock,
            project,
            rows,
            stopwatch,
            ticker: Ticker::new(tick_interval),
            memory_only: false,
        };

        // Upgrade legacy or partly damaged row data in place. Data that could
        // not be read at all stays untouched until the next real change.
        if decoded_any
            && let Some(raw) = rows_raw
            && let Ok(current) = app.rows.to_json()
            && raw != current
        {
            app.persist_rows();
        }

        if app.stopwatch.needs_restart_anchor() {
            let now = app.clock.now_ms();
            app.stopwatch.anchor(now);
            app.persist_stopwatch();
        }

        if app.stopwatch.is_running() {
            app.ticker.start(Instant::now());
        }

        app
    }

    pub fn project(&self) -> &ProjectIdentity {
        &self.project
    }

    pub fn rows(&self) -> &RowList {
        &self.rows
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// False once a write has failed in this session.
    pub fn is_persisting(&self) -> bool {
        !self.memory_only
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ---------------------------
    // Persistence
    // ---------------------------

    fn persist(&mut self, key: &str, value: &str) {
        if self.memory_only {
            return;
        }
        if let Err(e) = self.store.set(key, value) {
            warning(format!(
                "Could not save '{}': {}. Continuing without saving for this session.",
                key, e
            ));
            self.memory_only = true;
        }
    }

    fn persist_rows(&mut self) {
        match self.rows.to_json() {
            Ok(json) => self.persist(keys::ROWS, &json),
            Err(e) => warning(format!("Could not encode rows: {}", e)),
        }
    }

    fn persist_stopwatch(&mut self) {
        let elapsed = self.stopwatch.accumulated_ms().to_string();
        let running = self.stopwatch.is_running().to_string();
        let start = self.stopwatch.start_timestamp().to_string();
        self.persist(keys::STOPWATCH_ELAPSED, &elapsed);
        self.persist(keys::STOPWATCH_RUNNING, &running);
        self.persist(keys::STOPWATCH_START_TIME, &start);
    }

    // ---------------------------
    // Rendering
    // ---------------------------

    pub fn render_project_name(&mut self) {
        self.view.render_project_name(self.project.name());
    }

    pub fn render_rows(&mut self) {
        self.view.render_rows(self.rows.rows());
    }

    /// Redraw the stopwatch with the elapsed time as of now.
    pub fn refresh_stopwatch(&mut self) {
        let elapsed = self.current_elapsed();
        self.view
            .render_stopwatch(elapsed, self.stopwatch.is_running());
    }

    pub fn render_all(&mut self) {
        self.render_project_name();
        self.refresh_stopwatch();
        self.render_rows();
    }

    fn commit_rows(&mut self) {
        self.persist_rows();
        self.render_rows();
    }

    // ---------------------------
    // Project
    // ---------------------------

    pub fn rename_project(&mut self, new_name: &str) {
        self.project.rename(new_name);
        let name = self.project.name().to_string();
        self.persist(keys::PROJECT_NAME, &name);
        self.render_project_name();
    }

    // ---------------------------
    // Rows
    // ---------------------------

    /// Returns the index of the new row.
    pub fn add_row(&mut self, after: Option<usize>) -> usize {
        let at = self.rows.add(after);
        self.commit_rows();
        at
    }

    /// Returns false (and changes nothing) when only one row is left.
    pub fn remove_row(&mut self, index: usize) -> bool {
        let removed = self.rows.remove(index);
        if removed {
            self.commit_rows();
        }
        removed
    }

    pub fn rename_row(&mut self, index: usize, new_name: &str) {
        self.rows.rename(index, new_name);
        self.commit_rows();
    }

    pub fn change_count(&mut self, index: usize, delta: i64) {
        self.rows.change_count(index, delta);
        self.commit_rows();
    }

    pub fn set_count(&mut self, index: usize, value: i64) {
        self.rows.set_count(index, value);
        self.commit_rows();
    }

    pub fn set_count_input(&mut self, index: usize, raw: &str) {
        self.rows.set_count_input(index, raw);
        self.commit_rows();
    }

    pub fn move_row(&mut self, from: usize, to: usize) -> bool {
        let moved = self.rows.move_row(from, to);
        if moved {
            self.commit_rows();
        }
        moved
    }

    // ---------------------------
    // Stopwatch
    // ---------------------------

    pub fn current_elapsed(&self) -> u64 {
        self.stopwatch.current_elapsed(self.clock.now_ms())
    }

    /// Start or stop the stopwatch. Returns the new running state.
    pub fn toggle_stopwatch(&mut self) -> bool {
        let now = self.clock.now_ms();
        let running = self.stopwatch.toggle(now);
        self.persist_stopwatch();
        if running {
            self.ticker.start(Instant::now());
        } else {
            self.ticker.stop();
        }
        self.refresh_stopwatch();
        running
    }

    /// Redraw the stopwatch if a tick is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.ticker.poll(now) {
            self.refresh_stopwatch();
            true
        } else {
            false
        }
    }
}
