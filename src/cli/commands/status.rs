use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolve::resolve_status;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { employee } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let status = resolve_status(&pool.conn, *employee)?;

        println!("Next punch: {}", status.next_kind.label());

        match (status.last_kind, status.last_timestamp) {
            (Some(kind), Some(ts)) => {
                let local = ts.with_timezone(&cfg.offset());
                println!(
                    "Last punch: {} at {}",
                    kind.label(),
                    local.format("%d/%m/%Y %H:%M")
                );
            }
            _ => println!("Last punch: none"),
        }
    }

    Ok(())
}
