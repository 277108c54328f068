//! Storage key names. Kept identical to the browser version's localStorage
//! keys so that exported stores stay interchangeable.

pub const PROJECT_NAME: &str = "projectName";
pub const ROWS: &str = "rows";
pub const STOPWATCH_ELAPSED: &str = "stopwatchElapsed";
pub const STOPWATCH_RUNNING: &str = "stopwatchRunning";
pub const STOPWATCH_START_TIME: &str = "stopwatchStartTime";
