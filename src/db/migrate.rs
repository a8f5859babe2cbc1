use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the migration
/// bookkeeping store (operation = 'migration_applied', target = version).
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

struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_employees",
        message: "Created employees table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS employees (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                username    TEXT NOT NULL UNIQUE,
                full_name   TEXT NOT NULL,
                national_id TEXT,
                phone       TEXT,
                role        TEXT,
                hire_date   TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250301_0002_create_punches",
        message: "Created punches table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS punches (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                employee_id INTEGER NOT NULL
                            REFERENCES employees(id) ON DELETE CASCADE,
                timestamp   TEXT NOT NULL,
                kind        TEXT NOT NULL CHECK(kind IN ('entry','exit')),
                note        TEXT,
                source      TEXT NOT NULL DEFAULT 'server'
            );

            CREATE INDEX IF NOT EXISTS idx_punches_employee_ts
                ON punches(employee_id, timestamp);
            CREATE INDEX IF NOT EXISTS idx_punches_kind
                ON punches(kind);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)?;
        mark_applied(conn, m)?;
        success(format!("Migration applied: {}", m.version));
    }

    Ok(())
}

/// Versions already recorded in the bookkeeping store.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log
         WHERE operation = 'migration_applied'
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
