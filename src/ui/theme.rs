use crate::expense::category::Category;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Ink-on-paper palette.
pub struct Theme;

impl Theme {
    pub const PAPER: Color = Color::Rgb(0xF5, 0xF1, 0xE8);
    pub const CARD: Color = Color::Rgb(0xFE, 0xFD, 0xFB);
    pub const INK: Color = Color::Rgb(0x2D, 0x2A, 0x26);
    pub const INK_SOFT: Color = Color::Rgb(0x6C, 0x6A, 0x67);
    pub const INK_FAINT: Color = Color::Rgb(0xA0, 0x9C, 0x96);
    pub const RULE: Color = Color::Rgb(0xD5, 0xD0, 0xC6);
    pub const SAGE: Color = Color::Rgb(0x7B, 0x9E, 0x87);
    pub const CORAL: Color = Color::Rgb(0xE8, 0x92, 0x7C);

    pub fn category_color(category: &Category) -> Color {
        let (r, g, b) = category.color;
        Color::Rgb(r, g, b)
    }

    pub fn screen() -> Style {
        Style::default().fg(Self::INK).bg(Self::PAPER)
    }

    pub fn card() -> Style {
        Style::default().fg(Self::INK).bg(Self::CARD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::RULE)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::SAGE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn label() -> Style {
        Style::default().fg(Self::INK_SOFT).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::INK_FAINT)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::INK).add_modifier(Modifier::BOLD)
    }

    pub fn total() -> Style {
        Style::default().fg(Self::INK).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::CARD).bg(Self::SAGE).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::INK)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::INK_FAINT).add_modifier(Modifier::ITALIC)
    }

    pub fn row_selected() -> Style {
        Style::default().bg(Self::PAPER).add_modifier(Modifier::BOLD)
    }

    pub fn delete_hint() -> Style {
        Style::default().fg(Self::CORAL)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::INK_SOFT).bg(Self::PAPER)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Self::CARD).bg(Self::CORAL).add_modifier(Modifier::BOLD)
    }

    pub fn status_info() -> Style {
        Style::default().fg(Self::CARD).bg(Self::SAGE)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::SAGE).add_modifier(Modifier::BOLD)
    }

    pub fn chip(selected: bool) -> Style {
        if selected {
            Style::default().fg(Self::CARD).bg(Self::INK).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::INK_SOFT)
        }
    }
}
