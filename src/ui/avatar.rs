use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Placeholder portrait shown until profiles carry real pictures.
const BLANK_PROFILE: [&str; 5] = [
    "   ___   ",
    "  /   \\  ",
    "  \\___/  ",
    " /     \\ ",
    "/_______\\",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = BLANK_PROFILE
        .iter()
        .map(|row| Line::from(Span::styled(*row, Theme::avatar())))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
