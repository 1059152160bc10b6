use crate::app::form::Field;
use crate::app::state::*;
use crate::strings::StringKey;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

fn label(field: Field) -> StringKey {
    match field {
        Field::Name => StringKey::CardNameLabel,
        Field::Hobby => StringKey::CardHobbyLabel,
        Field::Age => StringKey::CardAgeLabel,
    }
}

fn icon(field: Field) -> &'static str {
    match field {
        Field::Name => "☺",
        Field::Hobby => "♥",
        Field::Age => "#",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, field: Field) {
    let enabled = state.form.controls().fields;
    let focused = enabled && state.focus == Focus::Field(field);

    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let title_style = if focused { Theme::title() } else { Theme::border() };

    let block = Block::default()
        .title(format!(" {} ", state.text(label(field))))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = icon(field);
    let prompt_offset = u16::try_from(icon.width() + 1).unwrap_or(u16::MAX);
    let value = state.form.value(field);
    let text_width = usize::from(inner.width.saturating_sub(prompt_offset));

    // Focused fields scroll so the cursor stays inside the box
    let (start, column) = if focused {
        scroll_window(value, state.cursor(field), text_width)
    } else {
        (0, 0)
    };

    let text_style = if enabled {
        Theme::field_text()
    } else {
        Theme::field_disabled()
    };
    let line = Line::from(vec![
        Span::styled(icon, Theme::field_icon()),
        Span::raw(" "),
        Span::styled(&value[start..], text_style),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let column = u16::try_from(column.min(text_width)).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(prompt_offset).saturating_add(column);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Supporting text under the age field, only while editing.
pub fn render_age_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.form.is_editing() {
        return;
    }
    let hint = Paragraph::new(Span::styled(state.text(StringKey::AgeWarning), Theme::hint()))
        .block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(hint, area);
}
