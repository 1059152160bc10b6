use crate::app::state::*;
use crate::strings::StringKey;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn button<'a>(icon: &'a str, label: &'a str, enabled: bool, focused: bool) -> Span<'a> {
    let style = if !enabled {
        Theme::button_disabled()
    } else if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    Span::styled(format!("[ {} {} ]", icon, label), style)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let controls = state.form.controls();
    let line = Line::from(vec![
        button(
            "✎",
            state.text(StringKey::EditButton),
            controls.edit_button,
            state.focus == Focus::EditButton,
        ),
        Span::raw("  "),
        button(
            "✓",
            state.text(StringKey::SaveButton),
            controls.save_button,
            state.focus == Focus::SaveButton,
        ),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(line), area);
}
