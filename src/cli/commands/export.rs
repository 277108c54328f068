use crate::cli::commands::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ProjectExport};
use crate::utils::time::now_epoch_ms;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let app = session::open(cfg);
        let snapshot = ProjectExport::snapshot(
            app.project(),
            app.rows(),
            app.stopwatch(),
            now_epoch_ms(),
            Local::now().to_rfc3339(),
        );

        ExportLogic::export(&snapshot, *format, file, *force)?;
        session::audit(
            &app,
            "export",
            format.as_str(),
            &format!("Exported {} rows to {}", snapshot.rows.len(), file),
        );
    }
    Ok(())
}
