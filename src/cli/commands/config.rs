use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            ConfigLogic::check(config_path, cfg)?;
        }

        if *migrate {
            ConfigLogic::migrate(config_path)?;
        }

        if *edit_config {
            ConfigLogic::edit(config_path, editor.as_deref())?;
        }
    }

    Ok(())
}
