use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(toast) = state.toasts.current() else {
        return;
    };

    let stamp = toast
        .timestamp
        .format(&state.config.ui.timestamp_format)
        .to_string();
    let block = Block::default()
        .title(Line::from(format!(" {} ", stamp)).alignment(Alignment::Right))
        .title_style(Theme::border())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Theme::toast());

    let paragraph = Paragraph::new(toast.text.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
