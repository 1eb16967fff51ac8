use crate::app::form::{FormField, CATEGORY_COLUMNS};
use crate::app::state::AppState;
use crate::expense::category::CATEGORIES;
use crate::ui::input_box::{self, Field};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.form.is_expanded() {
        render_form(frame, area, state);
    } else {
        render_button(frame, area);
    }
}

fn render_button(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::SAGE))
        .style(Theme::button());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let line = Line::from(vec![
        Span::styled("+ Add New Expense", Theme::button()),
        Span::styled("  (a)", Theme::button()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let block = Block::default()
        .title(Line::from(Span::styled(" NEW ENTRY ", Theme::label())).left_aligned())
        .title(Line::from(Span::styled(" Esc × ", Theme::muted())).right_aligned())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Theme::card());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(2), // Amount
            Constraint::Length(3), // Category picker
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    input_box::render(
        frame,
        rows[0],
        &Field {
            label: "DESCRIPTION",
            prefix: "",
            placeholder: "What did you spend on?",
            input: &form.description,
            focused: form.focus == FormField::Description,
        },
    );
    input_box::render(
        frame,
        rows[1],
        &Field {
            label: "AMOUNT",
            prefix: &state.config.ui.currency_symbol,
            placeholder: "0.00",
            input: &form.amount,
            focused: form.focus == FormField::Amount,
        },
    );
    render_picker(frame, rows[2], state);

    let hints = Line::from(vec![
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" record  ", Theme::muted()),
        Span::styled("Tab", Theme::key_hint()),
        Span::styled(" next field  ", Theme::muted()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" cancel", Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[4]);
}

fn render_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let focused = form.focus == FormField::Category;
    if area.height == 0 {
        return;
    }

    let marker = if focused { "▸ " } else { "  " };
    let label = Line::from(vec![
        Span::styled(marker, Theme::key_hint()),
        Span::styled("CATEGORY", Theme::label()),
    ]);
    frame.render_widget(Paragraph::new(label), Rect::new(area.x, area.y, area.width, 1));

    let grid = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(1),
    );
    let row_areas = Layout::vertical([Constraint::Length(1); 2]).split(grid);
    for (row, chunk) in CATEGORIES.chunks(CATEGORY_COLUMNS).enumerate() {
        let Some(row_area) = row_areas.get(row) else {
            break;
        };
        let cells = Layout::horizontal([Constraint::Ratio(1, CATEGORY_COLUMNS as u32); CATEGORY_COLUMNS])
            .split(*row_area);
        for (col, category) in chunk.iter().enumerate() {
            let index = row * CATEGORY_COLUMNS + col;
            let selected = index == form.category;
            let text = format!(" {} {} {} ", index + 1, category.icon, category.name);
            let mut style = Theme::chip(selected);
            if selected && focused {
                style = style.bg(Theme::category_color(category));
            }
            frame.render_widget(Paragraph::new(Span::styled(text, style)), cells[col]);
        }
    }
}
