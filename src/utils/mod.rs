pub mod formatting;
pub mod parse;
pub mod path;
pub mod time;

pub use time::format_elapsed;
