pub mod messages;
pub mod terminal;
pub mod view;

pub use terminal::TerminalView;
pub use view::View;
