use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// The office still sits at (0, 0).
pub const OFFICE_UNSET: &str =
    "Office location is not set: add office_latitude / office_longitude to the configuration.";

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the configuration file, and an office
    /// location that was never set.
    pub fn check(path: &Path, cfg: &Config) -> AppResult<Vec<String>> {
        if cfg.office_is_unset() {
            warning(OFFICE_UNSET);
        }

        if !path.exists() {
            warning(format!(
                "Configuration file {} not found, defaults are in use.",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing configuration keys: {}", missing.join(", ")));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file {} not found, run `geoclock init` first",
                path.display()
            )));
        }

        let added = migrate::add_missing_keys(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added configuration keys: {}", added.join(", ")));
        }
        Ok(added)
    }

    /// Open the configuration file in an editor, falling back to the platform
    /// default when the requested one is not available.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            ))),
        }
    }
}
