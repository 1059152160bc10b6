use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "Tab move  ^E edit  ^S save  ^L lock  ^Q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    let hints = format!(" {} ", KEY_HINTS);

    // Pad to fill remaining space
    let used = status.width() + hints.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(hints, Theme::status_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
