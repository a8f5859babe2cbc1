use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::register_punch;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { employee, at } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let recorded = register_punch(&mut pool, *employee, at.as_deref(), cfg.offset())?;

        success(format!(
            "{} recorded at {} on {} (next: {}).",
            recorded.recorded_kind.label(),
            recorded.local_time,
            recorded.local_date,
            recorded.next_kind.label(),
        ));

        if recorded.source != "client" {
            info(format!("Timestamp source: {}", recorded.source));
        }
    }

    Ok(())
}
