use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let date = state.today.format(&state.config.ui.date_format).to_string();

    let block = Block::default()
        .title(Line::from(Span::styled(" TODAY'S TOTAL ", Theme::label())).left_aligned())
        .title(Line::from(Span::styled(format!(" {} ", date), Theme::muted())).right_aligned())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::card());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dots = "•".repeat((inner.width as usize).saturating_sub(8).min(27));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(state.money(state.today_total), Theme::total())),
        Line::from(Span::styled(dots, Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
