//! Configuration module
//!
//! Loads and saves the user's home city and requested cities as TOML.
//! A missing file means the defaults apply.

mod types;

pub use types::ClockConfig;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ClockError, Result};

const APP_DIR: &str = "clock";
const CONFIG_FILE: &str = "config.toml";

/// Default location: `$XDG_CONFIG_HOME/clock/config.toml`, then
/// `$HOME/.config/clock/config.toml`, then `./clock.toml`
pub fn default_path() -> PathBuf {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var_os("HOME")
                .filter(|v| !v.is_empty())
                .map(|home| PathBuf::from(home).join(".config"))
        });

    match base {
        Some(dir) => dir.join(APP_DIR).join(CONFIG_FILE),
        None => PathBuf::from("clock.toml"),
    }
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load(path: &Path) -> Result<ClockConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ClockConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: ClockConfig = toml::from_str(&content).map_err(|e| {
        ClockError::Config(format!(
            "Cannot parse config '{}': {}. Run 'clock config reset' to start over.",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &ClockConfig, path: &Path) -> Result<()> {
    let toml = to_toml(config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, toml)?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

/// Delete the config file; returns whether one existed
pub fn delete(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

pub fn to_toml(config: &ClockConfig) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ClockError::Config(format!("Failed to serialize config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CityId;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(loaded, ClockConfig::default());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "home_city = \"not a number\"").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(matches!(err, ClockError::Config(_)));
        assert!(err.to_string().contains("clock config reset"));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/config.toml");

        save(&ClockConfig::default(), &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        let config = ClockConfig::default()
            .with_home(CityId(1072))
            .with_city_added(CityId(1035))
            .unwrap();

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.home_city, Some(CityId(1072)));
        assert_eq!(loaded.requested_cities.len(), 3);
    }

    #[test]
    fn test_delete() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        assert!(!delete(&config_path).unwrap());
        save(&ClockConfig::default(), &config_path).unwrap();
        assert!(delete(&config_path).unwrap());
        assert!(!config_path.exists());
    }

    #[test]
    #[serial]
    fn test_default_path_prefers_xdg() {
        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", "/tmp/xdg");

        assert_eq!(default_path(), PathBuf::from("/tmp/xdg/clock/config.toml"));

        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}
