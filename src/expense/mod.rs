//! Expense domain: records, categories, the store, and today's total.

pub mod category;
pub mod model;
pub mod store;
pub mod total;
pub mod validation;

pub use model::{Expense, ExpenseId, IdGenerator};
pub use store::ExpenseStore;
pub use validation::ValidationError;
