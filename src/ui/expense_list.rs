use crate::app::state::AppState;
use crate::expense::category;
use crate::expense::Expense;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = state.store.len();
    let block = Block::default()
        .title(Line::from(Span::styled(" RECENT ENTRIES ", Theme::label())).left_aligned())
        .title(Line::from(Span::styled(format!(" {} items ", count), Theme::muted())).right_aligned())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::card());

    if state.store.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("空", Theme::muted())),
            Line::from(Span::styled("No expenses recorded yet", Theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return;
    }

    // Borders plus the highlight symbol column.
    let row_width = (area.width as usize).saturating_sub(4);
    let items: Vec<ListItem> = state
        .store
        .list()
        .iter()
        .map(|e| expense_item(e, state, row_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::row_selected())
        .highlight_symbol("▌ ")
        .highlight_spacing(HighlightSpacing::Always);

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn expense_item<'a>(expense: &'a Expense, state: &AppState, width: usize) -> ListItem<'a> {
    let meta = category::resolve(&expense.category);
    let icon = Span::styled(
        format!(" {} ", meta.icon),
        Style::default()
            .fg(Theme::CARD)
            .bg(Theme::category_color(meta))
            .add_modifier(Modifier::BOLD),
    );
    let amount = format!("-{}", state.money(expense.amount));

    // icon tile (4) + gap (1) + gap before amount (1)
    let desc_room = width.saturating_sub(4 + 1 + 1 + amount.width());
    let description = truncate(&expense.description, desc_room);
    let pad = desc_room.saturating_sub(description.width());

    let top = Line::from(vec![
        icon,
        Span::raw(" "),
        Span::styled(description, Theme::input_text()),
        Span::raw(" ".repeat(pad + 1)),
        Span::styled(amount, Theme::total()),
    ]);
    let bottom = Line::from(vec![
        Span::raw("     "),
        Span::styled(
            format!(
                "{} · {}",
                expense.timestamp.format(&state.config.ui.time_format),
                expense.category
            ),
            Theme::muted(),
        ),
    ]);
    ListItem::new(vec![top, bottom])
}

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
