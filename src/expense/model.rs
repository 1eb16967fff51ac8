use chrono::{DateTime, Local};
use std::fmt;

/// Session-unique identifier derived from the creation time in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseId(String);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One recorded spending event. Never edited after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    /// Category name as entered. May not resolve; see [`super::category::resolve`].
    pub category: String,
    pub timestamp: DateTime<Local>,
}

/// Hands out time-based ids that stay unique even when two records are
/// created within the same millisecond or the wall clock steps backwards.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now: DateTime<Local>) -> ExpenseId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        ExpenseId(id.to_string())
    }
}
