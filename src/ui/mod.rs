mod avatar;
mod buttons;
mod card_header;
mod fields;
mod layout;
mod status_bar;
mod theme;
mod toast;

use crate::app::form::Field;
use crate::app::state::AppState;
use crate::strings::StringKey;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    let title = Paragraph::new(Span::styled(state.text(StringKey::AppName), Theme::headline()))
        .alignment(Alignment::Center);
    frame.render_widget(title, app_layout.title);

    render_card(frame, app_layout.card, state);
    toast::render(frame, app_layout.toast, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_card(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::card());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let card = layout::card_layout(inner, card_header::chip_width(state));

    avatar::render(frame, card.avatar);
    card_header::render_summary(frame, card.summary, state);
    card_header::render_chip(frame, card.chip, state);

    let divider = Paragraph::new("─".repeat(card.divider.width as usize)).style(Theme::border());
    frame.render_widget(divider, card.divider);

    fields::render(frame, card.name, state, Field::Name);
    fields::render(frame, card.hobby, state, Field::Hobby);
    fields::render(frame, card.age, state, Field::Age);
    fields::render_age_hint(frame, card.age_hint, state);
    buttons::render(frame, card.buttons, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Focus;
    use crate::config::AppConfig;
    use crate::notify::Notifier;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 28)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_locked_card() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(screen.contains("Cardfolio"));
        assert!(screen.contains("Your Name"));
        assert!(screen.contains("Your Hobby"));
        assert!(screen.contains("Locked"));
        assert!(screen.contains(" Name "));
        assert!(screen.contains(" Age "));
        assert!(!screen.contains("Digits only"));
    }

    #[test]
    fn test_editing_card_shows_values_and_hint() {
        let mut state = AppState::new(AppConfig::default());
        state.form.begin_edit();
        state.form.set_name("Alice");
        state.form.set_hobby("Reading");
        state.form.set_age("30");
        let screen = draw(&state);
        assert!(screen.contains("Editing"));
        assert!(screen.contains("Digits only"));
        assert!(screen.contains("Alice"));
        assert!(screen.contains("Reading"));
        assert!(!screen.contains("Your Name"));
    }

    fn editing_name(value: String) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.form.begin_edit();
        state.focus = Focus::Field(Field::Name);
        state.cursors.set(Field::Name, value.len());
        state.form.set_name(value);
        state
    }

    #[test]
    fn test_focused_field_wider_than_u16_draws() {
        let state = editing_name("a".repeat(usize::from(u16::MAX) + 10));
        let screen = draw(&state);
        assert!(screen.contains("aaaa"));
    }

    #[test]
    fn test_focused_field_scrolls_to_cursor() {
        let state = editing_name(format!("{}END", "x".repeat(80)));
        let screen = draw(&state);
        assert!(screen.contains("xEND"));
    }

    #[test]
    fn test_unfocused_field_shows_start() {
        let mut state = editing_name(format!("START{}", "y".repeat(80)));
        state.focus = Focus::Field(Field::Hobby);
        let screen = draw(&state);
        assert!(screen.contains("☺ START"));
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut state = AppState::new(AppConfig::default());
        state.toasts.notify("Please enter: Hobby");
        let screen = draw(&state);
        assert!(screen.contains("Please enter: Hobby"));
    }

    #[test]
    fn test_string_overrides_reach_the_screen() {
        let mut config = AppConfig::default();
        config.strings.insert(StringKey::IsLocked, "Read only".into());
        let state = AppState::new(config);
        let screen = draw(&state);
        assert!(screen.contains("Read only"));
    }
}
