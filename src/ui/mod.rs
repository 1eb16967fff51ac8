mod expense_form;
mod expense_list;
mod header;
mod input_box;
mod layout;
mod status_bar;
mod theme;
mod total_card;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::screen()), area);

    let app_layout = layout::compute_layout(area, state.form.is_expanded());

    header::render(frame, app_layout.header);
    total_card::render(frame, app_layout.total_card, state);
    expense_form::render(frame, app_layout.form, state);
    expense_list::render(frame, app_layout.list, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::expense::{Expense, ExpenseId};
    use chrono::{Local, NaiveDate, TimeZone};
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state_on(y: i32, m: u32, d: u32) -> AppState {
        AppState::with_date(AppConfig::default(), NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn expense(id: &str, description: &str, amount: f64, category: &str) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            description: description.into(),
            amount,
            category: category.into(),
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_state() {
        let screen = draw(&state_on(2024, 5, 1));
        assert!(screen.contains("No expenses recorded yet"));
        assert!(screen.contains("0 items"));
        assert!(screen.contains("$0.00"));
        assert!(screen.contains("01 May 2024"));
    }

    #[test]
    fn test_rows_and_total() {
        let mut state = state_on(2024, 5, 1);
        state.add_expense(expense("1", "Coffee", 4.5, "Food"));
        state.add_expense(expense("2", "Train", 2.8, "Transport"));
        let screen = draw(&state);

        assert!(!screen.contains("No expenses recorded yet"));
        assert!(screen.contains("2 items"));
        assert!(screen.contains("$7.30"));
        assert!(screen.contains("-$4.50"));
        assert!(screen.contains("09:05 · Transport"));
        assert!(screen.find("Train").unwrap() < screen.find("Coffee").unwrap());
    }

    #[test]
    fn test_unknown_category_uses_fallback_icon() {
        let mut state = state_on(2024, 5, 1);
        state.add_expense(expense("1", "Mystery", 1.0, "Groceries"));
        let screen = draw(&state);

        assert!(screen.contains("他"));
        assert!(screen.contains("09:05 · Groceries"));
        assert_eq!(state.store.list()[0].category, "Groceries");
    }

    #[test]
    fn test_form_and_validation_message() {
        let mut state = state_on(2024, 5, 1);
        assert!(draw(&state).contains("+ Add New Expense"));

        state.form.expand();
        state.set_error("Description is required".into());
        let screen = draw(&state);
        assert!(screen.contains("NEW ENTRY"));
        assert!(screen.contains("DESCRIPTION"));
        assert!(screen.contains("Entertainment"));
        assert!(screen.contains("Description is required"));
    }

    #[test]
    fn test_delete_last_shows_empty_state() {
        let mut state = state_on(2024, 5, 1);
        state.add_expense(expense("1", "Coffee", 4.5, "Food"));
        state.remove_expense(&ExpenseId::from("1"));
        let screen = draw(&state);
        assert!(screen.contains("No expenses recorded yet"));
        assert!(screen.contains("$0.00"));
        assert!(!screen.contains("-0.00"));
    }

    #[test]
    fn test_total_card_after_rollover() {
        let mut state = state_on(2024, 5, 1);
        state.add_expense(expense("1", "Coffee", 4.5, "Food"));
        assert!(state.roll_date(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()));

        let screen = draw(&state);
        assert!(screen.contains("02 May 2024"));
        assert!(screen.contains("$0.00"));
        assert!(!screen.contains("-0.00"));
        assert!(screen.contains("-$4.50"));
    }
}
