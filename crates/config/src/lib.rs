//! Destination catalog models and loaders.
//!
//! Catalogs are read by the CLI only; the simulation core never touches the
//! filesystem. A catalog is either a YAML file holding a list of records, a
//! TOML file holding one record, or a directory of single-record TOML files.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One destination record parsed from a catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct DestinationConfig {
    pub name: String,
    /// Distance from the solar system in light-years.
    pub distance_ly: f64,
}

/// Errors that can occur while loading or querying catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("destination '{0}' not found in catalog")]
    NotFound(String),
}

/// Load destination records from a YAML file, TOML file, or directory of TOML files.
pub fn load_destinations<P: AsRef<Path>>(path: P) -> Result<Vec<DestinationConfig>, ConfigError> {
    load_records(path)
}

/// Select a destination by case-insensitive name.
pub fn find_destination(
    catalog: &[DestinationConfig],
    name: &str,
) -> Result<DestinationConfig, ConfigError> {
    let upper = name.to_uppercase();
    catalog
        .iter()
        .find(|dest| dest.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
