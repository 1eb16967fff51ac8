pub mod model;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, DiagnosticsConfig, JournalConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shuppi")
        .join("config.toml")
}

/// Load the config, writing the defaults out on first run.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        save_config(path, &config)?;
        return Ok(config);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    check_format("ui.time_format", &config.ui.time_format)
        .and_then(|_| check_format("ui.date_format", &config.ui.date_format))
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Write `config` to `path` as pretty TOML, creating parent directories.
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Rejects strftime strings chrono cannot render; formatting one panics at draw time.
fn check_format(key: &str, format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("{} = {:?} is not a valid time format", key, format);
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shuppi-config-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("nested").join("config.toml")
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/x.log"), PathBuf::from("/var/log/x.log"));
        assert_eq!(expand_home("relative/dir"), PathBuf::from("relative/dir"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let mut cfg = AppConfig::default();
        cfg.ui.currency_symbol = "€".into();
        cfg.journal.enabled = true;

        save_config(&path, &cfg).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), cfg);

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let path = scratch_path("first-run");
        assert!(!path.exists());

        assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
        assert!(path.exists());
        assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let path = scratch_path("bad-format");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[ui]\ndate_format = \"%Q\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("ui.date_format"));

        std::fs::write(&path, "[ui]\ntime_format = \"%H:%\"\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("ui.time_format"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_default_formats_accepted() {
        let cfg = AppConfig::default();
        assert!(check_format("ui.time_format", &cfg.ui.time_format).is_ok());
        assert!(check_format("ui.date_format", &cfg.ui.date_format).is_ok());
    }
}
