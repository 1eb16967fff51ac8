//! Everything the app writes to disk: the optional expense journal and the
//! `tracing` diagnostics log.

pub mod diagnostics;
pub mod journal;

pub use journal::{ExpenseJournal, JournalEntry};
