use crate::config::{expand_home, DiagnosticsConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// Parse a level name, falling back to `INFO` for anything unrecognised.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

/// Install the global `tracing` subscriber writing plain-text lines to the
/// configured file. Stdout belongs to the terminal UI, so nothing is logged there.
pub fn init(config: &DiagnosticsConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = expand_home(&config.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[test]
    fn test_disabled_is_noop() {
        let cfg = DiagnosticsConfig {
            enabled: false,
            level: "info".into(),
            file: "/nonexistent/dir/never-created.log".into(),
        };
        assert!(init(&cfg).is_ok());
    }
}
