use crate::app::form::{is_blank, Controls, EditMode, Field, ProfileCardForm};
use crate::config::AppConfig;
use crate::notify::Toasts;
use crate::strings::{StringKey, Strings};
use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A scratch copy of a field value plus its cursor. Edits are applied here
/// first and only written back if the form accepts the result.
#[derive(Debug, Clone)]
pub struct TextEdit {
    pub text: String,
    pub cursor: usize,
}

impl TextEdit {
    pub fn new(text: &str, cursor: usize) -> Self {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Self {
            text: text.to_string(),
            cursor,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        // Skip trailing whitespace, then the word before it
        let head = self.text[..self.cursor].trim_end();
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Display column of a byte cursor inside `text`.
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    text.get(..cursor).map(UnicodeWidthStr::width).unwrap_or_else(|| text.width())
}

/// Horizontal window of `width` columns that keeps the cursor visible.
///
/// Returns the byte offset the window starts at and the cursor's column
/// inside the window, which is always below `width` when `width > 0`.
pub fn scroll_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let column = cursor_column(text, cursor);
    let skip = column.saturating_sub(width.saturating_sub(1));
    let mut start = 0;
    let mut skipped = 0;
    for (i, c) in text.char_indices() {
        start = i;
        if skipped >= skip {
            break;
        }
        skipped += c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }
    (start, column.saturating_sub(skipped))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    LockChip,
    Field(Field),
    EditButton,
    SaveButton,
}

impl Focus {
    pub const RING: [Focus; 6] = [
        Focus::LockChip,
        Focus::Field(Field::Name),
        Focus::Field(Field::Hobby),
        Focus::Field(Field::Age),
        Focus::EditButton,
        Focus::SaveButton,
    ];

    pub fn is_enabled(self, controls: &Controls) -> bool {
        match self {
            Focus::LockChip => controls.lock_chip,
            Focus::Field(_) => controls.fields,
            Focus::EditButton => controls.edit_button,
            Focus::SaveButton => controls.save_button,
        }
    }

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FieldCursors {
    name: usize,
    hobby: usize,
    age: usize,
}

impl FieldCursors {
    pub fn get(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name,
            Field::Hobby => self.hobby,
            Field::Age => self.age,
        }
    }

    pub fn set(&mut self, field: Field, cursor: usize) {
        match field {
            Field::Name => self.name = cursor,
            Field::Hobby => self.hobby = cursor,
            Field::Age => self.age = cursor,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub strings: Strings,
    pub form: ProfileCardForm,
    pub cursors: FieldCursors,
    pub focus: Focus,
    pub toasts: Toasts,
    pub last_saved: Option<DateTime<Local>>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let strings = Strings::new(config.strings.clone());
        let toasts = Toasts::new(config.ui.toast_duration());
        Self {
            config,
            strings,
            form: ProfileCardForm::new(),
            cursors: FieldCursors::default(),
            focus: Focus::LockChip,
            toasts,
            last_saved: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn text(&self, key: StringKey) -> &str {
        self.strings.get(key)
    }

    /// Header line: the name, or its placeholder while blank.
    pub fn display_name(&self) -> &str {
        let name = self.form.name();
        if is_blank(name) {
            self.text(StringKey::CardName)
        } else {
            name
        }
    }

    pub fn display_hobby(&self) -> &str {
        let hobby = self.form.hobby();
        if is_blank(hobby) {
            self.text(StringKey::CardHobby)
        } else {
            hobby
        }
    }

    /// Cursor of `field`, clamped to the current value.
    pub fn cursor(&self, field: Field) -> usize {
        TextEdit::new(self.form.value(field), self.cursors.get(field)).cursor
    }

    pub fn edit_for(&self, field: Field) -> TextEdit {
        TextEdit::new(self.form.value(field), self.cursors.get(field))
    }

    /// Write an edited copy back through the form. The cursor only moves if
    /// the form took the new text.
    pub fn commit_edit(&mut self, field: Field, edit: TextEdit) -> bool {
        let cursor = edit.cursor;
        let accepted = self.form.set_field(field, edit.text);
        if accepted {
            self.cursors.set(field, cursor);
        }
        self.dirty = true;
        accepted
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(Focus::RING.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let controls = self.form.controls();
        let len = Focus::RING.len();
        let mut idx = self.focus.index();
        for _ in 0..len {
            idx = (idx + step) % len;
            if Focus::RING[idx].is_enabled(&controls) {
                self.focus = Focus::RING[idx];
                break;
            }
        }
        self.dirty = true;
    }

    /// Move focus off a control that the current mode disabled.
    pub fn ensure_focus_enabled(&mut self) {
        if !self.focus.is_enabled(&self.form.controls()) {
            self.focus_next();
        }
    }

    pub fn status_line(&self) -> String {
        let mode = match self.form.mode() {
            EditMode::Editing => self.text(StringKey::IsEditing),
            EditMode::Locked => self.text(StringKey::IsLocked),
        };
        match self.last_saved {
            Some(at) => format!(
                "{} | Last saved {}",
                mode,
                at.format(&self.config.ui.timestamp_format)
            ),
            None => format!("{} | Not saved yet", mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_edit_utf8() {
        let mut edit = TextEdit::new("", 0);
        edit.insert_char('h');
        edit.insert_char('é');
        edit.insert_char('!');
        assert_eq!(edit.text, "hé!");
        edit.move_left();
        edit.delete_back();
        assert_eq!(edit.text, "h!");
        assert_eq!(edit.cursor, 1);
        edit.move_home();
        edit.delete_forward();
        assert_eq!(edit.text, "!");
        edit.move_end();
        assert_eq!(edit.cursor, 1);
    }

    #[test]
    fn test_text_edit_clamps_cursor_to_boundary() {
        let edit = TextEdit::new("né", 2);
        assert_eq!(edit.cursor, 1);
        let edit = TextEdit::new("ab", 99);
        assert_eq!(edit.cursor, 2);
    }

    #[test]
    fn test_delete_word_back() {
        let mut edit = TextEdit::new("rock climbing  ", 15);
        edit.delete_word_back();
        assert_eq!(edit.text, "rock ");
        assert_eq!(edit.cursor, 5);
    }

    #[test]
    fn test_delete_word_back_unicode_whitespace() {
        let mut edit = TextEdit::new("rock\tclimbing", 13);
        edit.delete_word_back();
        assert_eq!(edit.text, "rock\t");
        assert_eq!(edit.cursor, 5);

        let mut edit = TextEdit::new("tea\u{3000}ceremony\u{00a0}", 16);
        edit.delete_word_back();
        assert_eq!(edit.text, "tea\u{3000}");
        assert_eq!(edit.cursor, 6);

        let mut edit = TextEdit::new("word", 4);
        edit.delete_word_back();
        assert_eq!(edit.text, "");
        assert_eq!(edit.cursor, 0);
    }

    #[test]
    fn test_scroll_window() {
        assert_eq!(scroll_window("short", 5, 10), (0, 5));
        assert_eq!(scroll_window("abcdefghij", 10, 4), (7, 3));
        assert_eq!(scroll_window("abcdefghij", 2, 4), (0, 2));
        // Wide chars are skipped whole
        assert_eq!(scroll_window("日本語", 9, 3), (6, 2));
        assert_eq!(scroll_window("abc", 3, 0), (3, 0));
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        assert_eq!(cursor_column("日本", 3), 2);
        assert_eq!(cursor_column("ab", 2), 2);
    }

    #[test]
    fn test_commit_rejected_age_keeps_cursor() {
        let mut state = AppState::new(AppConfig::default());
        state.form.begin_edit();
        let mut edit = state.edit_for(Field::Age);
        edit.insert_char('3');
        assert!(state.commit_edit(Field::Age, edit));
        assert_eq!(state.cursor(Field::Age), 1);

        let mut edit = state.edit_for(Field::Age);
        edit.insert_char('x');
        assert!(!state.commit_edit(Field::Age, edit));
        assert_eq!(state.form.age(), "3");
        assert_eq!(state.cursor(Field::Age), 1);
    }

    #[test]
    fn test_focus_skips_disabled_controls() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, Focus::LockChip);
        state.focus_next();
        assert_eq!(state.focus, Focus::EditButton);
        state.focus_next();
        assert_eq!(state.focus, Focus::LockChip);
        state.focus_prev();
        assert_eq!(state.focus, Focus::EditButton);

        state.form.begin_edit();
        state.ensure_focus_enabled();
        assert_eq!(state.focus, Focus::SaveButton);
        state.focus_next();
        assert_eq!(state.focus, Focus::LockChip);
        state.focus_next();
        assert_eq!(state.focus, Focus::Field(Field::Name));
    }

    #[test]
    fn test_display_placeholders() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.display_name(), "Your Name");
        assert_eq!(state.display_hobby(), "Your Hobby");
        state.form.set_name("Alice");
        state.form.set_hobby("  ");
        assert_eq!(state.display_name(), "Alice");
        assert_eq!(state.display_hobby(), "Your Hobby");
    }

    #[test]
    fn test_status_line() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.status_line(), "Locked | Not saved yet");
        state.form.begin_edit();
        assert!(state.status_line().starts_with("Editing"));
    }
}
