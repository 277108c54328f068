use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 40;

/// ANSI colour per operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "rows" => Colour::Green,
        "watch" => Colour::Yellow,
        "name" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)`, truncated to `OP_TARGET_MAX` visible characters.
fn op_target(entry: &LogEntry) -> String {
    let full = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };
    if full.chars().count() > OP_TARGET_MAX {
        let mut s: String = full.chars().take(OP_TARGET_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let label = op_target(entry);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            // Only the operation word is coloured.
            let colour = color_for_operation(&entry.operation);
            let coloured = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
                None => colour.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                coloured,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(operation: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2026-10-18T09:00:00+02:00".into(),
            operation: operation.into(),
            target: target.into(),
            message: String::new(),
        }
    }

    #[test]
    fn op_target_joins_and_truncates() {
        assert_eq!(op_target(&entry("init", "")), "init");
        assert_eq!(op_target(&entry("rows", "add")), "rows (add)");

        let long = op_target(&entry("migration_applied", "20260301_0001_create_kv_and_more"));
        assert_eq!(long.chars().count(), OP_TARGET_MAX);
        assert!(long.ends_with("..."));
    }
}
