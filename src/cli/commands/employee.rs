use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::identity::hash_pin;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{deactivate_employee, insert_employee, list_employees};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open(&cfg.database)?;

    match action {
        EmployeeAction::Add { name, pin } => {
            let name = name.trim();
            let pin_hash = hash_pin(pin)?;
            let emp = insert_employee(&pool.conn, name, &pin_hash)?;

            ttlog_or_warn(
                &pool.conn,
                "employee_add",
                &emp.name,
                &format!("Employee #{} registered", emp.id),
            );
            success(format!("Employee '{}' registered (id {}).", emp.name, emp.id));
        }

        EmployeeAction::List { all } => {
            let employees = list_employees(&pool.conn, *all)?;
            if employees.is_empty() {
                info("No employees registered.");
                return Ok(());
            }

            let mut table = Table::new(vec!["ID", "Name", "Status", "Registered"], cfg.separator());
            for emp in employees {
                let status = if emp.active {
                    "active".to_string()
                } else {
                    format!("{GREY}inactive{RESET}")
                };
                table.add_row(vec![emp.id.to_string(), emp.name, status, emp.created_at]);
            }
            print!("{}", table.render());
        }

        EmployeeAction::Deactivate { name } => {
            let emp = deactivate_employee(&pool.conn, name)?;

            ttlog_or_warn(
                &pool.conn,
                "employee_deactivate",
                &emp.name,
                &format!("Employee #{} deactivated", emp.id),
            );
            success(format!("Employee '{}' deactivated.", emp.name));
        }
    }

    Ok(())
}
