use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for each audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "employee_add" => Colour::Cyan,
        "employee_del" => Colour::Red,
        "note" => Colour::Yellow,
        "report" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);

        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(date);

            let colored_op = color_for_operation(&operation)
                .paint(operation.as_str())
                .to_string();
            let op_target = if target.is_empty() {
                colored_op
            } else {
                format!("{colored_op} ({target})")
            };

            // padding computed on visible width, colors excluded
            let visible = strip_ansi(&op_target);
            let padding = " ".repeat(op_w.saturating_sub(visible.len()));

            println!("{id:>id_w$}: {date} | {op_target}{padding} => {message}");
        }
    }

    Ok(())
}
