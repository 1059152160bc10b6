use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const SURFACE: Color = Color::Rgb(28, 30, 38);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn card() -> Style {
        Style::default().bg(Self::SURFACE)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn headline() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn display_name() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_hobby() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn avatar() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn chip_editing() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn chip_locked() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn field_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn field_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn field_icon() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn toast() -> Style {
        Style::default().fg(Color::White).bg(Color::Rgb(50, 50, 60))
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Self::ACCENT).bg(Color::DarkGray)
    }
}
