use crate::app::form::ExpenseForm;
use crate::config::AppConfig;
use crate::expense::total::{format_money, today_total};
use crate::expense::{Expense, ExpenseId, ExpenseStore, IdGenerator, ValidationError};
use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

/// Single-line text field with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: ExpenseStore,
    pub form: ExpenseForm,
    pub ids: IdGenerator,
    /// Local calendar date the total was last computed for.
    pub today: NaiveDate,
    pub today_total: f64,
    /// Row the delete key acts on.
    pub selected: usize,
    pub status_message: Option<StatusMessage>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_date(config, Local::now().date_naive())
    }

    pub fn with_date(config: AppConfig, today: NaiveDate) -> Self {
        let form = ExpenseForm::new(config.form.default_category_index());
        Self {
            config,
            store: ExpenseStore::new(),
            form,
            ids: IdGenerator::new(),
            today,
            today_total: 0.0,
            selected: 0,
            status_message: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            pending_bell: false,
        }
    }

    /// Prepend `expense` and recompute the total.
    pub fn add_expense(&mut self, expense: Expense) {
        info!(id = %expense.id, amount = expense.amount, category = %expense.category, "expense added");
        self.store.add(expense);
        self.selected = 0;
        self.recompute_total();
    }

    /// Remove by id and recompute the total. Unknown ids change nothing.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> Option<Expense> {
        let removed = self.store.remove(id)?;
        info!(id = %removed.id, "expense removed");
        if self.selected >= self.store.len() {
            self.selected = self.store.len().saturating_sub(1);
        }
        self.recompute_total();
        Some(removed)
    }

    pub fn remove_selected(&mut self) -> Option<Expense> {
        let id = self.selected_expense()?.id.clone();
        self.remove_expense(&id)
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.store.get(self.selected)
    }

    pub fn recompute_total(&mut self) {
        self.today_total = today_total(self.store.list(), self.today);
        self.dirty = true;
    }

    /// Move "today" forward when the local date changes. Returns whether it did.
    pub fn roll_date(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        info!(from = %self.today, to = %today, "calendar date rolled over");
        self.today = today;
        self.recompute_total();
        true
    }

    /// Validate the form and, on success, record a new expense stamped `now`.
    /// A rejected submit leaves the store and the form untouched.
    pub fn submit_form(&mut self, now: DateTime<Local>) -> Result<Expense, ValidationError> {
        let draft = self.form.submit().inspect_err(|e| {
            debug!(error = %e, "submit rejected");
        })?;
        let expense = Expense {
            id: self.ids.next_id(now),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            timestamp: now,
        };
        self.add_expense(expense.clone());
        Ok(expense)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self) {
        self.selected = self.store.len().saturating_sub(1);
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Info,
        });
        self.dirty = true;
    }

    pub fn set_error(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Error,
        });
        self.dirty = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn money(&self, amount: f64) -> String {
        format_money(&self.config.ui.currency_symbol, amount)
    }
}
