use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("出 費", Theme::title())),
        Line::from(Span::styled("DAILY EXPENSE TRACKER", Theme::muted())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
