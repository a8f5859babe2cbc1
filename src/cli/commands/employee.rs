use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_employee, insert_employee, list_employees};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::ui::messages::success;
use crate::utils::date::{parse_date, today};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add {
                username,
                full_name,
                national_id,
                phone,
                role,
                hire_date,
            } => {
                let hired = match hire_date {
                    Some(s) => parse_date(s)?,
                    None => today(),
                };

                let emp = Employee {
                    id: 0,
                    username: username.clone(),
                    full_name: full_name.clone(),
                    national_id: national_id.clone(),
                    phone: phone.clone(),
                    role: role.clone(),
                    hire_date: hired,
                };

                let id = insert_employee(&pool.conn, &emp)?;
                ttlog(
                    &pool.conn,
                    "employee_add",
                    username,
                    &format!("Registered employee #{id}"),
                )?;

                success(format!("Employee '{}' registered with id {}.", full_name, id));
            }

            EmployeeAction::List => {
                let employees = list_employees(&pool.conn)?;

                if employees.is_empty() {
                    println!("No employees registered.");
                    return Ok(());
                }

                let mut table = Table::new(vec!["ID", "Username", "Name", "Role", "Hired"]);
                for e in &employees {
                    table.add_row(vec![
                        e.id.to_string(),
                        e.username.clone(),
                        e.display_name().to_string(),
                        e.role.clone().unwrap_or_else(|| "-".to_string()),
                        e.hire_date.format("%Y-%m-%d").to_string(),
                    ]);
                }

                print!("{}", table.render());
            }

            EmployeeAction::Del { id } => {
                delete_employee(&pool.conn, *id)?;
                ttlog(
                    &pool.conn,
                    "employee_del",
                    &id.to_string(),
                    "Removed employee and punch history",
                )?;

                success(format!("Employee {id} removed together with their punches."));
            }
        }
    }

    Ok(())
}
