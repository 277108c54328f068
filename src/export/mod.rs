mod fs_utils;
mod json_csv;
pub mod model;

pub use model::{ProjectExport, RowExport};

use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `snapshot` to `file` in the requested format.
    pub fn export(
        snapshot: &ProjectExport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        fs_utils::ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => json_csv::export_json(snapshot, &path),
            ExportFormat::Csv => json_csv::export_csv(&snapshot.rows, &path),
        }
    }
}
