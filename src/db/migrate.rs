use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration bookkeeping lives in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run `sql` once for `version`, then record it as applied.
fn apply_once(conn: &Connection, version: &str, sql: &str, message: &str) -> Result<bool> {
    if is_applied(conn, version)? {
        return Ok(false);
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    tx.commit()?;

    Ok(true)
}

const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20260301_0001_create_kv",
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL
        );
        "#,
        "Created kv table",
    ),
    (
        "20260412_0002_kv_updated_at",
        r#"
        ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
        "#,
        "Added updated_at to kv table",
    ),
];

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db(). Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, sql, message) in MIGRATIONS {
        if apply_once(conn, version, sql, message)? {
            success(format!("Migration applied: {} → {}", version, message));
        }
    }

    Ok(())
}
