use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// One labelled text field: a label line, then the value line.
pub struct Field<'a> {
    pub label: &'a str,
    /// Drawn before the value, e.g. a currency symbol.
    pub prefix: &'a str,
    pub placeholder: &'a str,
    pub input: &'a InputState,
    pub focused: bool,
}

pub fn render(frame: &mut Frame, area: Rect, field: &Field) {
    if area.height < 2 {
        return;
    }
    let label_area = Rect::new(area.x, area.y, area.width, 1);
    let value_area = Rect::new(area.x, area.y + 1, area.width, 1);

    let marker = if field.focused { "▸ " } else { "  " };
    let label = Line::from(vec![
        Span::styled(marker, Theme::key_hint()),
        Span::styled(field.label, Theme::label()),
    ]);
    frame.render_widget(Paragraph::new(label), label_area);

    let prompt = if field.focused { "❯ " } else { "  " };
    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(Theme::SAGE)),
        Span::styled(field.prefix, Theme::muted()),
    ];
    if field.input.text.is_empty() && !field.focused {
        spans.push(Span::styled(field.placeholder, Theme::placeholder()));
    } else {
        spans.push(Span::styled(field.input.text.as_str(), Theme::input_text()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), value_area);

    if field.focused {
        let width = prompt.width() + field.prefix.width() + field.input.cursor_width();
        let offset = u16::try_from(width).unwrap_or(u16::MAX);
        let cursor_x = value_area
            .x
            .saturating_add(offset)
            .min(value_area.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, value_area.y));
    }
}
