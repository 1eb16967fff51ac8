use super::model::{Expense, ExpenseId};

/// Newest-first, in-memory sequence of expenses. The only mutations are
/// [`ExpenseStore::add`] and [`ExpenseStore::remove`].
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front. No dedup and no validation.
    pub fn add(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    /// Remove the first record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &ExpenseId) -> Option<Expense> {
        let idx = self.expenses.iter().position(|e| &e.id == id)?;
        Some(self.expenses.remove(idx))
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
