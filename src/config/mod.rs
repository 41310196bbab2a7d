use crate::core::calculator::geofence::GeofenceConfig;
use crate::core::calculator::shifts::{DEFAULT_OVERTIME_THRESHOLD_HOURS, ShiftPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub office_latitude: f64,
    #[serde(default)]
    pub office_longitude: f64,
    #[serde(default = "default_radius")]
    pub geofence_radius_meters: f64,
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold_hours: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_radius() -> f64 {
    100.0
}
fn default_overtime_threshold() -> f64 {
    DEFAULT_OVERTIME_THRESHOLD_HOURS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(&Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: &Path) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            office_latitude: 0.0,
            office_longitude: 0.0,
            geofence_radius_meters: default_radius(),
            overtime_threshold_hours: default_overtime_threshold(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("geoclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".geoclock")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("geoclock.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("geoclock.sqlite")
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.office().is_valid() {
            return Err(AppError::Config(format!(
                "office coordinate out of range: {}, {}",
                self.office_latitude, self.office_longitude
            )));
        }
        if !self.geofence_radius_meters.is_finite() || self.geofence_radius_meters < 0.0 {
            return Err(AppError::Config(format!(
                "geofence_radius_meters must be a non-negative number, got {}",
                self.geofence_radius_meters
            )));
        }
        if !self.overtime_threshold_hours.is_finite() || self.overtime_threshold_hours < 0.0 {
            return Err(AppError::Config(format!(
                "overtime_threshold_hours must be a non-negative number, got {}",
                self.overtime_threshold_hours
            )));
        }
        Ok(())
    }

    /// First character of `separator_char`, used to draw table rules.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn office(&self) -> Coordinate {
        Coordinate::new(self.office_latitude, self.office_longitude)
    }

    /// Office left at the (0, 0) placeholder, i.e. never configured.
    pub fn office_is_unset(&self) -> bool {
        self.office_latitude == 0.0 && self.office_longitude == 0.0
    }

    pub fn geofence(&self) -> GeofenceConfig {
        GeofenceConfig::new(self.office(), self.geofence_radius_meters)
    }

    pub fn shift_policy(&self) -> ShiftPolicy {
        ShiftPolicy {
            overtime_threshold_hours: self.overtime_threshold_hours,
        }
    }

    /// A relative database name lives next to the configuration file.
    pub fn resolve_db_path(config_path: &Path, name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            return p.to_path_buf();
        }
        config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir)
            .join(p)
    }

    /// Create the configuration file (unless `is_test`) and an empty database
    /// file. A relative `custom_db` is placed next to the configuration.
    pub fn init_all(config_path: &Path, custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);
        fs::create_dir_all(&dir)?;

        // An existing file keeps its geofence settings and database path
        // unless `--db` overrides the latter.
        let mut config = if config_path.exists() {
            Self::load(config_path)?
        } else {
            Self::with_database(&dir.join("geoclock.sqlite"))
        };
        if let Some(name) = custom_db {
            config.database = Self::resolve_db_path(config_path, name)
                .to_string_lossy()
                .to_string();
        }
        let db_path = PathBuf::from(&config.database);
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            config.save(config_path)?;
            println!("✅ Config file: {:?}", config_path);
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
