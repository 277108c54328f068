use crate::cli::commands::session;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle `status` (also the default command).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut app = session::open(cfg);
    app.render_all();
    Ok(())
}
