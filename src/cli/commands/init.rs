use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = if cli.test {
        // test mode never writes the config file; honor the --db override
        let mut cfg = Config::default();
        if let Some(custom) = &cli.db {
            cfg.database = custom.clone();
        }
        cfg
    } else {
        Config::load()
    };

    println!("⚙️  Initializing punchclock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    ) {
        eprintln!("⚠️ Failed to write internal log: {e}");
    }

    println!("🎉 punchclock initialization completed!");
    Ok(())
}
