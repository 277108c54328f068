pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;

pub use initialize::init_db;
pub use pool::DbPool;
