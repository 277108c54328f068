use crate::utils::parse::parse_int_lenient;

/// Accumulating stopwatch that survives reloads.
///
/// Time is banked into `accumulated_ms` on every stop; while running, the
/// live interval is derived from the persisted start timestamp, so reading
/// the elapsed time never depends on how often it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stopwatch {
    accumulated_ms: u64,
    running: bool,
    start_timestamp: i64,
}

impl Stopwatch {
    pub fn new(accumulated_ms: u64, running: bool, start_timestamp: i64) -> Self {
        Self {
            accumulated_ms,
            running,
            start_timestamp,
        }
    }

    /// Rebuild from the three stored string values. Missing or malformed
    /// numbers read as 0, and only the exact string `"true"` means running.
    pub fn from_persisted(
        elapsed: Option<&str>,
        running: Option<&str>,
        start_time: Option<&str>,
    ) -> Self {
        let accumulated_ms = elapsed.map_or(0, parse_int_lenient).max(0).unsigned_abs();
        let running = running == Some("true");
        let start_timestamp = start_time.map_or(0, parse_int_lenient);
        Self::new(accumulated_ms, running, start_timestamp)
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start_timestamp(&self) -> i64 {
        self.start_timestamp
    }

    /// Whether a running stopwatch lacks a usable start timestamp.
    pub fn needs_restart_anchor(&self) -> bool {
        self.running && self.start_timestamp <= 0
    }

    /// Re-anchor a running interval at `now_ms`.
    pub(crate) fn anchor(&mut self, now_ms: i64) {
        self.start_timestamp = now_ms;
    }

    /// Milliseconds of the currently running interval. A clock that went
    /// backwards contributes nothing.
    fn running_span(&self, now_ms: i64) -> u64 {
        if self.running {
            now_ms.saturating_sub(self.start_timestamp).max(0).unsigned_abs()
        } else {
            0
        }
    }

    /// Total elapsed time at `now_ms`. Pure read.
    pub fn current_elapsed(&self, now_ms: i64) -> u64 {
        self.accumulated_ms.saturating_add(self.running_span(now_ms))
    }

    /// Start or stop. Returns the new running state.
    pub fn toggle(&mut self, now_ms: i64) -> bool {
        if self.running {
            self.accumulated_ms = self.current_elapsed(now_ms);
            self.running = false;
        } else {
            self.start_timestamp = now_ms;
            self.running = true;
        }
        self.running
    }

    /// Label of the toggle control: the action it would perform.
    pub fn label(&self) -> &'static str {
        toggle_label(self.running)
    }
}

pub fn toggle_label(running: bool) -> &'static str {
    if running { "Stop" } else { "Start" }
}
