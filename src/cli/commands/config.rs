use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::{parse_offset, parse_shift_minutes};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(cfg) {
                Ok(yaml) => println!("{yaml}"),
                Err(e) => warning(format!("Could not render configuration: {e}")),
            }
        }

        if *check {
            let mut ok = true;

            if parse_offset(&cfg.business_offset).is_none() {
                warning(format!(
                    "business_offset '{}' is not a valid +HH:MM / -HH:MM offset",
                    cfg.business_offset
                ));
                ok = false;
            }

            match parse_shift_minutes(&cfg.standard_shift) {
                Some(m) if m > 0 => {}
                _ => {
                    warning(format!(
                        "standard_shift '{}' is not a valid duration (try \"7h30\")",
                        cfg.standard_shift
                    ));
                    ok = false;
                }
            }

            if !std::path::Path::new(&cfg.database).exists() {
                warning(format!("database file '{}' does not exist yet", cfg.database));
            }

            if ok {
                success("Configuration looks valid.");
            }
        }
    }

    Ok(())
}
