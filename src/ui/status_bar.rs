use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status_message {
        Some(StatusMessage { text, kind }) => {
            let style = match kind {
                StatusKind::Error => Theme::status_error(),
                StatusKind::Info => Theme::status_info(),
            };
            Line::from(Span::styled(format!(" {} ", text), style))
        }
        None => hints(state),
    };

    let paragraph = Paragraph::new(line).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

fn hints(state: &AppState) -> Line<'static> {
    let pairs: &[(&str, &str)] = if state.form.is_expanded() {
        &[("Enter", "record"), ("Tab", "field"), ("←→", "category"), ("Esc", "cancel")]
    } else if state.store.is_empty() {
        &[("a", "add"), ("q", "quit")]
    } else {
        &[("a", "add"), ("↑↓", "select"), ("d", "delete"), ("q", "quit")]
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, what) in pairs {
        let key_style = if *key == "d" {
            Theme::delete_hint()
        } else {
            Theme::key_hint()
        };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}  ", what), Theme::status_bar()));
    }
    Line::from(spans)
}
