use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::update_punch_note;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { punch, text, clear } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let note = match (text, clear) {
            (Some(t), false) => Some(t.as_str()),
            (None, true) => None,
            _ => {
                return Err(AppError::Other(
                    "specify either --text or --clear".to_string(),
                ));
            }
        };

        update_punch_note(&pool.conn, *punch, note)?;

        let action = if note.is_some() { "updated" } else { "cleared" };
        ttlog(
            &pool.conn,
            "note",
            &punch.to_string(),
            &format!("Note {action}"),
        )?;

        success(format!("Note {action} for punch {punch}."));
    }

    Ok(())
}
