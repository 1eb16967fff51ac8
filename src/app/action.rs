use crate::logging::journal::JournalEntry;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug)]
pub enum Action {
    Journal(JournalEntry),
    Bell,
    Quit,
}
