use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::form::{Field, SaveOutcome};
use crate::app::state::*;
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            if state.toasts.expire(Instant::now()) {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Char('l') => {
                toggle_edit_lock(state);
                return vec![];
            }
            KeyCode::Char('e') => {
                if state.form.controls().edit_button {
                    begin_edit(state);
                }
                return vec![];
            }
            KeyCode::Char('s') => {
                if state.form.controls().save_button {
                    return save(state);
                }
                return vec![];
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => {
            state.toasts.dismiss();
            return vec![];
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        Focus::Field(field) => handle_field_key(state, field, key),
        focus => {
            if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                return vec![];
            }
            let controls = state.form.controls();
            if !focus.is_enabled(&controls) {
                return vec![];
            }
            match focus {
                Focus::LockChip => toggle_edit_lock(state),
                Focus::EditButton => begin_edit(state),
                Focus::SaveButton => return save(state),
                Focus::Field(_) => {}
            }
            vec![]
        }
    }
}

fn handle_field_key(state: &mut AppState, field: Field, key: KeyEvent) -> Vec<Action> {
    if !state.form.controls().fields {
        return vec![];
    }
    let mut edit = state.edit_for(field);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            state.focus_next();
            return vec![];
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                edit.delete_word_back();
            } else {
                edit.delete_back();
            }
        }
        KeyCode::Char('w') if ctrl => edit.delete_word_back(),
        KeyCode::Char('u') if ctrl => edit.clear(),
        KeyCode::Delete => edit.delete_forward(),
        KeyCode::Left => edit.move_left(),
        KeyCode::Right => edit.move_right(),
        KeyCode::Home => edit.move_home(),
        KeyCode::End => edit.move_end(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            edit.insert_char(c)
        }
        _ => return vec![],
    }
    state.commit_edit(field, edit);
    vec![]
}

fn toggle_edit_lock(state: &mut AppState) {
    state.form.toggle_edit_lock();
    state.ensure_focus_enabled();
    state.dirty = true;
}

fn begin_edit(state: &mut AppState) {
    state.form.begin_edit();
    state.focus = Focus::Field(Field::Name);
    state.dirty = true;
}

fn save(state: &mut AppState) -> Vec<Action> {
    let outcome = state.form.save();
    if outcome == SaveOutcome::Saved {
        state.last_saved = Some(Local::now());
        state.ensure_focus_enabled();
    }
    state.dirty = true;
    vec![Action::Notify(outcome.message())]
}
