//! New-expense form: visibility, field focus, and submit-time validation.

use crate::app::state::InputState;
use crate::expense::category::CATEGORIES;
use crate::expense::validation::{parse_amount, parse_description};
use crate::expense::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVisibility {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Category,
            FormField::Category => FormField::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Description => FormField::Category,
            FormField::Amount => FormField::Description,
            FormField::Category => FormField::Amount,
        }
    }
}

/// Validated form contents, ready to become an `Expense`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub category: String,
}

/// Categories are laid out three to a row in the picker.
pub const CATEGORY_COLUMNS: usize = 3;

#[derive(Debug)]
pub struct ExpenseForm {
    pub visibility: FormVisibility,
    pub focus: FormField,
    pub description: InputState,
    pub amount: InputState,
    /// Index into `CATEGORIES`.
    pub category: usize,
    default_category: usize,
}

impl ExpenseForm {
    pub fn new(default_category: usize) -> Self {
        let default_category = default_category.min(CATEGORIES.len() - 1);
        Self {
            visibility: FormVisibility::Collapsed,
            focus: FormField::Description,
            description: InputState::new(),
            amount: InputState::new(),
            category: default_category,
            default_category,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.visibility == FormVisibility::Expanded
    }

    pub fn expand(&mut self) {
        self.visibility = FormVisibility::Expanded;
        self.focus = FormField::Description;
    }

    /// Hide the form. Drafts survive so reopening picks up where the user left off.
    pub fn cancel(&mut self) {
        self.visibility = FormVisibility::Collapsed;
    }

    pub fn category_name(&self) -> &'static str {
        CATEGORIES[self.category].name
    }

    pub fn select_category(&mut self, index: usize) {
        if index < CATEGORIES.len() {
            self.category = index;
        }
    }

    pub fn next_category(&mut self) {
        self.category = (self.category + 1) % CATEGORIES.len();
    }

    pub fn prev_category(&mut self) {
        self.category = (self.category + CATEGORIES.len() - 1) % CATEGORIES.len();
    }

    /// Move one picker row down, wrapping to the top.
    pub fn category_row_down(&mut self) {
        self.category = (self.category + CATEGORY_COLUMNS) % CATEGORIES.len();
    }

    pub fn category_row_up(&mut self) {
        self.category = (self.category + CATEGORIES.len() - CATEGORY_COLUMNS) % CATEGORIES.len();
    }

    /// The text input under focus, if focus is on a text field.
    pub fn active_input(&mut self) -> Option<&mut InputState> {
        match self.focus {
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            FormField::Category => None,
        }
    }

    /// Whether `c` may be typed into the amount field: digits and a single point.
    pub fn accepts_amount_char(&self, c: char) -> bool {
        c.is_ascii_digit() || (c == '.' && !self.amount.text.contains('.'))
    }

    pub fn validate(&self) -> Result<ExpenseDraft, ValidationError> {
        let description = parse_description(&self.description.text)?;
        let amount = parse_amount(&self.amount.text)?;
        Ok(ExpenseDraft {
            description,
            amount,
            category: self.category_name().to_string(),
        })
    }

    /// Validate, then reset and collapse on success. On failure nothing changes.
    pub fn submit(&mut self) -> Result<ExpenseDraft, ValidationError> {
        let draft = self.validate()?;
        self.reset();
        self.visibility = FormVisibility::Collapsed;
        Ok(draft)
    }

    pub fn reset(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category = self.default_category;
        self.focus = FormField::Description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(form: &mut ExpenseForm, field: FormField, text: &str) {
        form.focus = field;
        if let Some(input) = form.active_input() {
            for c in text.chars() {
                input.insert_char(c);
            }
        }
    }

    #[test]
    fn test_starts_collapsed_with_default_category() {
        let form = ExpenseForm::new(0);
        assert_eq!(form.visibility, FormVisibility::Collapsed);
        assert_eq!(form.category_name(), "Food");
    }

    #[test]
    fn test_submit_resets_and_collapses() {
        let mut form = ExpenseForm::new(0);
        form.expand();
        typed(&mut form, FormField::Description, " Coffee ");
        typed(&mut form, FormField::Amount, "4.50");
        form.select_category(1);

        let draft = form.submit().unwrap();
        assert_eq!(
            draft,
            ExpenseDraft {
                description: "Coffee".into(),
                amount: 4.5,
                category: "Transport".into(),
            }
        );
        assert!(!form.is_expanded());
        assert!(form.description.text.is_empty());
        assert!(form.amount.text.is_empty());
        assert_eq!(form.category_name(), "Food");
    }

    #[test]
    fn test_rejected_submit_keeps_everything() {
        let mut form = ExpenseForm::new(0);
        form.expand();
        typed(&mut form, FormField::Description, "Coffee");

        assert_eq!(form.submit(), Err(ValidationError::MissingAmount));
        assert!(form.is_expanded());
        assert_eq!(form.description.text, "Coffee");
    }

    #[test]
    fn test_description_checked_before_amount() {
        let mut form = ExpenseForm::new(0);
        form.expand();
        assert_eq!(form.submit(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_cancel_keeps_drafts() {
        let mut form = ExpenseForm::new(0);
        form.expand();
        typed(&mut form, FormField::Description, "Bus");
        form.cancel();
        assert!(!form.is_expanded());
        form.expand();
        assert_eq!(form.description.text, "Bus");
        assert_eq!(form.focus, FormField::Description);
    }

    #[test]
    fn test_category_navigation_wraps() {
        let mut form = ExpenseForm::new(0);
        form.prev_category();
        assert_eq!(form.category_name(), "Other");
        form.next_category();
        assert_eq!(form.category_name(), "Food");
        form.category_row_down();
        assert_eq!(form.category_name(), "Bills");
        form.category_row_down();
        assert_eq!(form.category_name(), "Food");
        form.category_row_up();
        assert_eq!(form.category_name(), "Bills");
        form.select_category(42);
        assert_eq!(form.category_name(), "Bills");
    }

    #[test]
    fn test_amount_char_filter() {
        let mut form = ExpenseForm::new(0);
        assert!(form.accepts_amount_char('4'));
        assert!(form.accepts_amount_char('.'));
        assert!(!form.accepts_amount_char('-'));
        assert!(!form.accepts_amount_char('e'));
        typed(&mut form, FormField::Amount, "4.5");
        assert!(!form.accepts_amount_char('.'));
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(FormField::Description.next(), FormField::Amount);
        assert_eq!(FormField::Category.next(), FormField::Description);
        assert_eq!(FormField::Description.prev(), FormField::Category);
    }

    #[test]
    fn test_default_category_from_config_index() {
        let mut form = ExpenseForm::new(3);
        assert_eq!(form.category_name(), "Bills");
        form.next_category();
        form.reset();
        assert_eq!(form.category_name(), "Bills");
    }
}
