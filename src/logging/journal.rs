//! Append-only expense journal.
//!
//! When enabled, every add and delete is written as one line to a daily file
//! `expenses_<date>.log` in the configured directory. The journal is never
//! read back; in-memory state stays the only source of truth.

use crate::config::{expand_home, JournalConfig};
use crate::expense::Expense;
use chrono::Local;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum JournalEntry {
    Added(Expense),
    Removed(Expense),
}

impl JournalEntry {
    pub fn expense(&self) -> &Expense {
        match self {
            JournalEntry::Added(e) | JournalEntry::Removed(e) => e,
        }
    }

    fn format_line(&self) -> String {
        let (sign, e) = match self {
            JournalEntry::Added(e) => ('+', e),
            JournalEntry::Removed(e) => ('-', e),
        };
        format!(
            "[{}] {} {} {} {:.2} {}",
            Local::now().format("%H:%M:%S"),
            sign,
            e.id,
            e.category,
            e.amount,
            e.description
        )
    }
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Failed to create journal directory {}: {}", .path.display(), .source)]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to open journal file {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to write journal entry: {0}")]
    Write(#[from] io::Error),
}

/// Writes journal entries to daily files.
///
/// File handles are cached per file name for the lifetime of the journal.
pub struct ExpenseJournal {
    enabled: bool,
    dir: PathBuf,
    file_handles: HashMap<String, File>,
}

impl ExpenseJournal {
    pub fn new(config: &JournalConfig) -> Self {
        Self {
            enabled: config.enabled,
            dir: expand_home(&config.dir),
            file_handles: HashMap::new(),
        }
    }

    /// Append `entry` to today's file. No-op if the journal is disabled.
    pub fn record(&mut self, entry: &JournalEntry) -> Result<(), JournalError> {
        if !self.enabled {
            return Ok(());
        }

        let date = Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("expenses_{}.log", date);

        if !self.file_handles.contains_key(&filename) {
            fs::create_dir_all(&self.dir).map_err(|source| JournalError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
            let path = self.dir.join(&filename);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| JournalError::Open { path, source })?;
            self.file_handles.insert(filename.clone(), file);
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            writeln!(handle, "{}", entry.format_line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::ExpenseId;
    use chrono::TimeZone;

    fn coffee() -> Expense {
        Expense {
            id: ExpenseId::from("1714564800000"),
            description: "Coffee".into(),
            amount: 4.5,
            category: "Food".into(),
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shuppi-journal-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let dir = scratch_dir("disabled");
        let mut journal = ExpenseJournal::new(&JournalConfig {
            enabled: false,
            dir: dir.display().to_string(),
        });
        journal.record(&JournalEntry::Added(coffee())).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_records_add_and_remove() {
        let dir = scratch_dir("enabled");
        let mut journal = ExpenseJournal::new(&JournalConfig {
            enabled: true,
            dir: dir.display().to_string(),
        });
        journal.record(&JournalEntry::Added(coffee())).unwrap();
        journal.record(&JournalEntry::Removed(coffee())).unwrap();

        let filename = format!("expenses_{}.log", Local::now().format("%Y-%m-%d"));
        let contents = fs::read_to_string(dir.join(filename)).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("+ 1714564800000 Food 4.50 Coffee"));
        assert!(lines[1].ends_with("- 1714564800000 Food 4.50 Coffee"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_entry_expense_accessor() {
        let entry = JournalEntry::Removed(coffee());
        assert_eq!(entry.expense().description, "Coffee");
    }
}
