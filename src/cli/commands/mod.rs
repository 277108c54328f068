pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod name;
pub mod rows;
pub mod session;
pub mod status;
pub mod watch;
