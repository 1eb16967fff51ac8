//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::expense::category::{self, DEFAULT_CATEGORY};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// `chrono` format for row times.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// `chrono` format for the date on the total card.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// New-expense form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Category preselected when the form is reset.
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
        }
    }
}

impl FormConfig {
    /// Index into the category table; unknown names fall back to the first entry.
    pub fn default_category_index(&self) -> usize {
        category::position(&self.default_category).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub bell_on_rejected_submit: bool,
}

/// Append-only expense journal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_journal_dir")]
    pub dir: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_journal_dir(),
        }
    }
}

/// `tracing` output. The terminal is owned by the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            file: default_log_file(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}
fn default_date_format() -> String {
    "%d %b %Y".to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
/// `<data_local_dir>/shuppi`, or `./shuppi` when the platform has none.
fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shuppi")
}
fn default_journal_dir() -> String {
    data_dir().join("journal").display().to_string()
}
fn default_level() -> String {
    "info".to_string()
}
fn default_log_file() -> String {
    data_dir().join("shuppi.log").display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.ui.currency_symbol, "$");
        assert_eq!(cfg.form.default_category, "Food");
        assert!(!cfg.journal.enabled);
        assert!(cfg.diagnostics.enabled);
    }

    #[test]
    fn test_partial_section_fills_missing_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            currency_symbol = "€"

            [journal]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.currency_symbol, "€");
        assert_eq!(cfg.ui.time_format, "%H:%M");
        assert!(cfg.journal.enabled);
        assert_eq!(cfg.journal.dir, default_journal_dir());
    }

    #[test]
    fn test_default_paths_under_data_dir() {
        let journal = PathBuf::from(default_journal_dir());
        let log = PathBuf::from(default_log_file());
        assert!(journal.ends_with("shuppi/journal"));
        assert!(log.ends_with("shuppi/shuppi.log"));
        if let Some(data) = dirs::data_local_dir() {
            assert!(journal.starts_with(&data));
            assert!(log.starts_with(&data));
        }
    }

    #[test]
    fn test_round_trip() {
        let mut cfg = AppConfig::default();
        cfg.form.default_category = "Bills".into();
        cfg.behavior.bell_on_rejected_submit = true;
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_default_category_index() {
        let mut form = FormConfig::default();
        assert_eq!(form.default_category_index(), 0);
        form.default_category = "Entertainment".into();
        assert_eq!(form.default_category_index(), 4);
        form.default_category = "Snacks".into();
        assert_eq!(form.default_category_index(), 0);
    }
}
