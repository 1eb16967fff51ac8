use super::model::Expense;
use chrono::NaiveDate;

/// Sum of `amount` over records whose local calendar date is `today`.
pub fn today_total(expenses: &[Expense], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.timestamp.date_naive() == today)
        .fold(0.0, |acc, e| acc + e.amount)
}

/// Two-decimal money string, e.g. `$12.30`.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}
