use crate::cli::commands::export::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::shifts::PairingIssue;
use crate::core::logic::display_name;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::EmployeeId;
use crate::models::shift_report::ShiftReport;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::colorize_overtime;
use crate::utils::hours2readable;
use crate::utils::table::Table;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts {
        range,
        employee,
        issues,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let filter = build_filter(&pool, range.as_deref(), employee.as_deref())?;
        let names = ReportLogic::employee_names(&pool.conn)?;
        let policy = cfg.shift_policy();

        let report = ReportLogic::build(&pool, &names, &filter, &policy)?;

        if report.shifts.is_empty() {
            info("No completed shifts found.");
        } else {
            print_shifts(&report, &names, cfg);
            print_totals(&report, cfg);
        }

        if !report.open.is_empty() {
            println!();
            for ev in &report.open {
                info(format!(
                    "{} is clocked in since {}",
                    display_name(&names, ev.employee_id),
                    ev.local_time_str()
                ));
            }
        }

        if *issues {
            print_issues(&report.issues, &names);
        } else if !report.issues.is_empty() {
            warning(format!(
                "{} unpaired event(s) ignored, use --issues to list them.",
                report.issues.len()
            ));
        }
    }

    Ok(())
}

fn print_shifts(report: &ShiftReport, names: &HashMap<EmployeeId, String>, cfg: &Config) {
    let mut table = Table::new(
        vec!["Employee", "In", "Out", "Worked", "Hours", "Overtime"],
        cfg.separator(),
    );

    for s in &report.shifts {
        let overtime = if s.is_overtime { "YES" } else { "no" };
        table.add_row(vec![
            display_name(names, s.employee_id),
            s.in_event.local_time_str(),
            s.out_event.local_time_str(),
            hours2readable(s.duration_hours),
            format!("{:.2}", s.duration_hours),
            colorize_overtime(overtime, s.is_overtime),
        ]);
    }

    print!("{}", table.render());
}

fn print_totals(report: &ShiftReport, cfg: &Config) {
    println!();
    header("Totals");

    let mut table = Table::new(
        vec!["Employee", "Shifts", "Worked", "Overtime shifts", "Overtime"],
        cfg.separator(),
    );

    for t in &report.totals {
        table.add_row(vec![
            t.name.clone(),
            t.shifts.to_string(),
            hours2readable(t.hours),
            t.overtime_shifts.to_string(),
            colorize_overtime(&hours2readable(t.overtime_hours), t.overtime_shifts > 0),
        ]);
    }

    print!("{}", table.render());
}

fn print_issues(issues: &[PairingIssue], names: &HashMap<EmployeeId, String>) {
    if issues.is_empty() {
        println!();
        info("No pairing issues.");
        return;
    }

    println!();
    header("Pairing issues");

    for issue in issues {
        let who = display_name(names, issue.employee_id());
        match issue {
            PairingIssue::SupersededIn { superseded, by } => println!(
                "- {who}: IN at {} superseded by IN at {}",
                superseded.local_time_str(),
                by.local_time_str()
            ),
            PairingIssue::OrphanOut(ev) => {
                println!("- {who}: OUT at {} has no matching IN", ev.local_time_str())
            }
            PairingIssue::NonPositiveDuration {
                in_event,
                out_event,
            } => println!(
                "- {who}: OUT at {} is not after IN at {}",
                out_event.local_time_str(),
                in_event.local_time_str()
            ),
        }
    }
}
