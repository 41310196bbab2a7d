use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::missing_append_only_triggers;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // Plain open: `--migrate` must be the one applying migrations.
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        migrate_schema(&pool)?;
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        check_database(&pool)?;
    }

    if *vacuum {
        let before = file_size(&cfg.database);
        pool.conn.execute_batch("VACUUM;")?;
        let after = file_size(&cfg.database);
        success(format!("Vacuum completed ({before} → {after} bytes)."));
    }

    Ok(())
}

fn migrate_schema(pool: &DbPool) -> AppResult<()> {
    let pending = pending_migrations(&pool.conn)?;
    if pending.is_empty() {
        info("Schema is up to date, nothing to migrate.");
        return Ok(());
    }

    info(format!("{} pending migration(s):", pending.len()));
    for version in &pending {
        println!("   • {version}");
    }
    run_pending_migrations(&pool.conn)?;
    success("Migration completed.");
    Ok(())
}

/// SQLite integrity, pending schema steps and the append-only guards.
fn check_database(pool: &DbPool) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        warning(format!("Integrity check failed: {integrity}"));
    }

    let pending = pending_migrations(&pool.conn)?;
    if !pending.is_empty() {
        warning(format!(
            "{} migration(s) not applied, run `geoclock db --migrate`.",
            pending.len()
        ));
        // Triggers come from a migration; their absence is expected here.
        return Ok(());
    }

    let missing = missing_append_only_triggers(&pool.conn)?;
    if missing.is_empty() {
        success("Attendance events are append-only.");
    } else {
        warning(format!(
            "Append-only triggers missing on events: {}",
            missing.join(", ")
        ));
    }
    Ok(())
}

fn file_size(path: &str) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
