use crate::models::{ProjectIdentity, RowList, Stopwatch};
use crate::utils::format_elapsed;
use serde::Serialize;

/// Flat row record for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RowExport {
    pub position: usize,
    pub name: String,
    pub count: u64,
}

/// Whole-project snapshot for JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ProjectExport {
    pub project: String,
    pub elapsed_ms: u64,
    pub elapsed: String,
    pub running: bool,
    pub total_count: u64,
    pub rows: Vec<RowExport>,
    pub exported_at: String,
}

impl ProjectExport {
    pub fn snapshot(
        project: &ProjectIdentity,
        rows: &RowList,
        stopwatch: &Stopwatch,
        now_ms: i64,
        exported_at: String,
    ) -> Self {
        let elapsed_ms = stopwatch.current_elapsed(now_ms);
        let rows: Vec<RowExport> = rows
            .rows()
            .iter()
            .enumerate()
            .map(|(i, r)| RowExport {
                position: i + 1,
                name: r.name.clone(),
                count: r.count,
            })
            .collect();

        Self {
            project: project.name().to_string(),
            elapsed_ms,
            elapsed: format_elapsed(elapsed_ms),
            running: stopwatch.is_running(),
            total_count: rows.iter().fold(0u64, |acc, r| acc.saturating_add(r.count)),
            rows,
            exported_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_numbers_rows_from_one() {
        let mut rows = RowList::new();
        rows.add(Some(0));
        rows.set_count(0, 4);
        rows.set_count(1, 6);
        let sw = Stopwatch::new(61_000, false, 0);

        let export = ProjectExport::snapshot(
            &ProjectIdentity::default(),
            &rows,
            &sw,
            0,
            "2026-10-18T10:00:00+00:00".into(),
        );

        assert_eq!(export.elapsed, "00:01:01");
        assert_eq!(export.total_count, 10);
        assert_eq!(export.rows[1].position, 2);
        assert_eq!(export.rows[1].name, "Row 2");
    }
}
