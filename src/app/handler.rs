use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::form::FormField;
use crate::app::state::*;
use crate::logging::JournalEntry;
use chrono::{Local, NaiveDate};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state, Local::now().date_naive()),
    }
}

fn handle_tick(state: &mut AppState, today: NaiveDate) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.roll_date(today);
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if state.form.is_expanded() {
        handle_form_key(state, key)
    } else {
        handle_list_key(state, key)
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('+') => {
            state.form.expand();
            state.clear_status();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.selected = 0;
            vec![]
        }
        KeyCode::End => {
            state.select_last();
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => match state.remove_selected() {
            Some(expense) => {
                state.set_status(format!("Deleted \"{}\"", expense.description));
                vec![Action::Journal(JournalEntry::Removed(expense))]
            }
            None => vec![],
        },
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.form.cancel();
            state.clear_status();
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Tab => {
            state.form.focus = state.form.focus.next();
            vec![]
        }
        KeyCode::BackTab => {
            state.form.focus = state.form.focus.prev();
            vec![]
        }
        _ if state.form.focus == FormField::Category => {
            handle_category_key(state, key);
            vec![]
        }
        _ => {
            handle_text_key(state, key);
            vec![]
        }
    }
}

fn submit(state: &mut AppState) -> Vec<Action> {
    match state.submit_form(Local::now()) {
        Ok(expense) => {
            let msg = format!(
                "Recorded \"{}\" {}",
                expense.description,
                state.money(expense.amount)
            );
            state.set_status(msg);
            vec![Action::Journal(JournalEntry::Added(expense))]
        }
        Err(e) => {
            state.set_error(e.to_string());
            if state.config.behavior.bell_on_rejected_submit {
                vec![Action::Bell]
            } else {
                vec![]
            }
        }
    }
}

fn handle_category_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => state.form.prev_category(),
        KeyCode::Right => state.form.next_category(),
        KeyCode::Up => state.form.category_row_up(),
        KeyCode::Down => state.form.category_row_down(),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            state.form.select_category(idx);
        }
        _ => {}
    }
}

fn handle_text_key(state: &mut AppState, key: KeyEvent) {
    let is_amount = state.form.focus == FormField::Amount;
    let accepts = match key.code {
        KeyCode::Char(c) => !is_amount || state.form.accepts_amount_char(c),
        _ => true,
    };
    let Some(input) = state.form.active_input() else {
        warn!("text key with no active input");
        return;
    };

    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'w' => input.delete_word_back(),
                    'u' => input.clear(),
                    _ => {}
                }
            } else if accepts {
                input.insert_char(c);
            } else {
                debug!(%c, "ignored non-numeric amount input");
            }
        }
        _ => {}
    }
}
