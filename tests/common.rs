#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const OFFICE_LAT: f64 = 40.7128;
pub const OFFICE_LON: f64 = -74.0060;

pub fn geo() -> Command {
    cargo_bin_cmd!("geoclock")
}

/// Isolated config + database living in its own temp directory.
pub struct TestEnv {
    pub dir: PathBuf,
    pub config: String,
    pub db: String,
}

impl TestEnv {
    /// Create (or reset) the directory and write a config with a 100 m
    /// geofence around the office and an 8 hour overtime threshold.
    pub fn new(name: &str) -> Self {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("geoclock_{}", name));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create test dir");

        let config = dir.join("geoclock.conf").to_string_lossy().to_string();
        let db = dir.join("geoclock.sqlite").to_string_lossy().to_string();

        let yaml = format!(
            "database: '{}'\noffice_latitude: {}\noffice_longitude: {}\ngeofence_radius_meters: 100.0\novertime_threshold_hours: 8.0\nseparator_char: '-'\n",
            db, OFFICE_LAT, OFFICE_LON
        );
        fs::write(&config, yaml).expect("write test config");

        Self { dir, config, db }
    }

    /// `geoclock --config <this env>`
    pub fn cmd(&self) -> Command {
        let mut c = geo();
        c.args(["--config", &self.config]);
        c
    }

    /// Output file path inside the env directory.
    pub fn out(&self, file: &str) -> String {
        self.dir.join(file).to_string_lossy().to_string()
    }

    pub fn init(&self) {
        self.cmd().arg("init").assert().success();
    }

    pub fn add_employee(&self, name: &str, pin: &str) {
        self.cmd()
            .args(["employee", "add", name, "--pin", pin])
            .assert()
            .success();
    }

    /// Record an event at local time `at`, at the office.
    pub fn clock_at_office(&self, kind: &str, name: &str, pin: &str, at: &str) {
        self.cmd()
            .args(["clock", kind, "--employee", name, "--pin", pin, "--at", at])
            .arg(format!("--lat={}", OFFICE_LAT))
            .arg(format!("--lon={}", OFFICE_LON))
            .assert()
            .success();
    }

    /// Initialized database with one employee, `Alice` / PIN `1234`.
    pub fn with_alice(name: &str) -> Self {
        let env = Self::new(name);
        env.init();
        env.add_employee("Alice", "1234");
        env
    }
}
