pub mod app;
pub mod clock;
pub mod log;
pub mod ticker;

pub use app::App;
pub use clock::{Clock, SystemClock};
pub use ticker::Ticker;
