use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;

fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let n: i64 = pool.conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(n)
}

/// Print database facts: path, size, row counts, applied migrations.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!("🗄️  Database: {db_path}");

    if let Ok(meta) = fs::metadata(db_path) {
        println!("   Size: {} bytes", meta.len());
    }

    println!("   Employees: {}", count(pool, "employees")?);
    println!("   Punches:   {}", count(pool, "punches")?);
    println!("   Log rows:  {}", count(pool, "log")?);

    let versions = applied_versions(&pool.conn)?;
    println!("   Applied migrations:");
    for v in versions {
        println!("   - {v}");
    }

    Ok(())
}
