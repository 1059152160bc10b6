use crate::app::form::is_blank;
use crate::app::state::*;
use crate::strings::StringKey;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const EDIT_ICON: &str = "✎";
const LOCK_ICON: &str = "🔒";

/// Icon and label of the lock chip for the current mode.
pub fn chip_content(state: &AppState) -> (&'static str, &str) {
    if state.form.is_editing() {
        (EDIT_ICON, state.text(StringKey::IsEditing))
    } else {
        (LOCK_ICON, state.text(StringKey::IsLocked))
    }
}

/// Columns the chip needs: brackets, padding, icon, gap, label.
pub fn chip_width(state: &AppState) -> u16 {
    let (icon, label) = chip_content(state);
    (icon.width() + label.width() + 5) as u16
}

pub fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let name_style = if is_blank(state.form.name()) {
        Theme::placeholder()
    } else {
        Theme::display_name()
    };
    let hobby_style = if is_blank(state.form.hobby()) {
        Theme::placeholder()
    } else {
        Theme::display_hobby()
    };
    let lines = vec![
        Line::from(Span::styled(state.display_name(), name_style)),
        Line::from(Span::styled(state.display_hobby(), hobby_style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_chip(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::LockChip;
    let (icon, label) = chip_content(state);
    let base = if state.form.is_editing() {
        Theme::chip_editing()
    } else {
        Theme::chip_locked()
    };
    let style = if focused { Theme::button_focused() } else { base };
    let line = Line::from(vec![
        Span::styled("( ", style),
        Span::styled(icon, style),
        Span::styled(" ", style),
        Span::styled(label, style),
        Span::styled(" )", style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
