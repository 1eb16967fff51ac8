use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the content column grows; extra space becomes margin.
pub const MAX_CONTENT_WIDTH: u16 = 64;

/// Height of the expanded form: two lines each for description and amount,
/// three for the category picker, a spacer and hint line, plus borders.
pub const FORM_HEIGHT: u16 = 12;

pub struct AppLayout {
    pub header: Rect,
    pub total_card: Rect,
    pub form: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, form_expanded: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let status_bar = main_chunks[1];

    // Centered column
    let content = main_chunks[0];
    let column_w = content.width.min(MAX_CONTENT_WIDTH);
    let column_x = content.x + (content.width - column_w) / 2;
    let column = Rect::new(column_x, content.y, column_w, content.height);

    let form_height = if form_expanded { FORM_HEIGHT } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(5),           // Total card
            Constraint::Length(form_height), // Add button or form
            Constraint::Min(3),              // Entries
        ])
        .split(column);

    AppLayout {
        header: chunks[0],
        total_card: chunks[1],
        form: chunks[2],
        list: chunks[3],
        status_bar,
    }
}
