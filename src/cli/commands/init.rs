use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    let cfg = Config::init_all(config_path, cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing geoclock…");
    println!("📄 Config file : {}", config_path.display());
    println!("🗄️  Database   : {}", &db_path);

    // Opening the pool applies the migrations.
    let pool = DbPool::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    ttlog_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 geoclock initialization completed!");
    Ok(())
}
