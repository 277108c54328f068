pub mod persisted;
pub mod project;
pub mod row;
pub mod row_list;
pub mod stopwatch;

pub use persisted::PersistedRows;
pub use project::{DEFAULT_PROJECT_NAME, ProjectIdentity};
pub use row::Row;
pub use row_list::RowList;
pub use stopwatch::Stopwatch;
