//! Configuration file upgrades: detect keys missing from an older file and
//! fill them with their defaults, leaving user values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Comment lines written after a freshly added key.
fn doc_for(key: &str) -> Option<&'static str> {
    match key {
        "geofence_radius_meters" => Some(concat!(
            "# geofence_radius_meters: events farther than this ",
            "from the office are OUT_OF_RANGE\n",
        )),
        "overtime_threshold_hours" => Some(concat!(
            "# overtime_threshold_hours: shifts strictly longer than this ",
            "are flagged as overtime\n",
        )),
        _ => None,
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default configuration is not a mapping".into())),
    }
}

/// Keys known to the current version but absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Returns the keys added.
pub fn add_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))?;

    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if let Some((key, _)) = line.split_once(':')
            && added.iter().any(|a| a == key)
            && let Some(doc) = doc_for(key)
        {
            new_content.push_str(doc);
        }
    }

    fs::write(path, new_content)?;
    Ok(added)
}
