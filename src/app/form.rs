//! The profile card form: three text fields gated by an edit/lock mode.
//!
//! The form never fails. Age input that is not made of decimal digits is
//! dropped, and `save` reports blank fields through a [`SaveOutcome`] that the
//! caller turns into a notification.

use thiserror::Error;

pub const SAVED_MESSAGE: &str = "Saved successfully!";
const MISSING_PREFIX: &str = "Please enter: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Locked,
    Editing,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Locked => EditMode::Editing,
            EditMode::Editing => EditMode::Locked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Hobby,
    Age,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Hobby, Field::Age];

    /// Name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Hobby => "Hobby",
            Field::Age => "Age",
        }
    }
}

/// Why a value was refused by a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("non-digit character {ch:?} at index {index}")]
    NonDigit { ch: char, index: usize },
}

pub fn validate_age(text: &str) -> Result<(), FieldError> {
    match text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, ch)) => Err(FieldError::NonDigit { ch, index }),
        None => Ok(()),
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub hobby: String,
    pub age: String,
    pub mode: EditMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Missing(Vec<Field>),
}

impl SaveOutcome {
    /// Text of the notification shown for this outcome.
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved => SAVED_MESSAGE.to_string(),
            SaveOutcome::Missing(fields) => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                format!("{}{}", MISSING_PREFIX, labels.join(", "))
            }
        }
    }
}

/// Enabled flags for every control on the card, derived from the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub lock_chip: bool,
    pub fields: bool,
    pub edit_button: bool,
    pub save_button: bool,
}

#[derive(Debug, Default)]
pub struct ProfileCardForm {
    state: FormState,
}

impl ProfileCardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn hobby(&self) -> &str {
        &self.state.hobby
    }

    pub fn age(&self) -> &str {
        &self.state.age
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.state.name,
            Field::Hobby => &self.state.hobby,
            Field::Age => &self.state.age,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.state.mode
    }

    pub fn is_editing(&self) -> bool {
        self.state.mode == EditMode::Editing
    }

    pub fn controls(&self) -> Controls {
        let editing = self.is_editing();
        Controls {
            lock_chip: true,
            fields: editing,
            edit_button: !editing,
            save_button: editing,
        }
    }

    /// Flip between locked and editing. Skips validation.
    pub fn toggle_edit_lock(&mut self) {
        self.state.mode = self.state.mode.toggled();
        tracing::debug!(mode = ?self.state.mode, "edit lock toggled");
    }

    pub fn begin_edit(&mut self) {
        self.state.mode = EditMode::Editing;
        tracing::debug!("editing started");
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.state.name = text.into();
    }

    pub fn set_hobby(&mut self, text: impl Into<String>) {
        self.state.hobby = text.into();
    }

    /// Replace the age only when `text` is all digits. Returns whether the
    /// value was taken.
    pub fn set_age(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        match validate_age(&text) {
            Ok(()) => {
                self.state.age = text;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "age input rejected");
                false
            }
        }
    }

    /// Route a value to the setter of `field`. Returns whether it was taken.
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) -> bool {
        match field {
            Field::Name => {
                self.set_name(text);
                true
            }
            Field::Hobby => {
                self.set_hobby(text);
                true
            }
            Field::Age => self.set_age(text),
        }
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| is_blank(self.value(*f)))
            .collect()
    }

    /// Validate and, when every field is filled in, lock the card.
    pub fn save(&mut self) -> SaveOutcome {
        let missing = self.missing_fields();
        if missing.is_empty() {
            self.state.mode = EditMode::Locked;
            tracing::info!("profile saved");
            SaveOutcome::Saved
        } else {
            tracing::debug!(?missing, "save blocked by blank fields");
            SaveOutcome::Missing(missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing_form(name: &str, hobby: &str, age: &str) -> ProfileCardForm {
        let mut form = ProfileCardForm::new();
        form.begin_edit();
        form.set_name(name);
        form.set_hobby(hobby);
        assert!(form.set_age(age));
        form
    }

    #[test]
    fn test_initial_state() {
        let form = ProfileCardForm::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.hobby(), "");
        assert_eq!(form.age(), "");
        assert!(!form.is_editing());
        assert_eq!(form.mode(), EditMode::Locked);
    }

    #[test]
    fn test_set_age_rejects_non_digits() {
        let mut form = ProfileCardForm::new();
        assert!(form.set_age("42"));
        for bad in ["4a", "abc", " 42", "-1", "3.5", "٣", "12 "] {
            assert!(!form.set_age(bad), "{:?} should be rejected", bad);
            assert_eq!(form.age(), "42");
        }
    }

    #[test]
    fn test_set_age_accepts_digits_and_empty() {
        let mut form = ProfileCardForm::new();
        assert!(form.set_age("007"));
        assert_eq!(form.age(), "007");
        assert!(form.set_age(""));
        assert_eq!(form.age(), "");
    }

    #[test]
    fn test_validate_age_reports_first_offender() {
        assert_eq!(validate_age("12x4y"), Err(FieldError::NonDigit { ch: 'x', index: 2 }));
        assert_eq!(validate_age(""), Ok(()));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut form = ProfileCardForm::new();
        form.toggle_edit_lock();
        assert!(form.is_editing());
        form.toggle_edit_lock();
        assert!(!form.is_editing());

        form.begin_edit();
        form.toggle_edit_lock();
        form.toggle_edit_lock();
        assert!(form.is_editing());
    }

    #[test]
    fn test_toggle_bypasses_validation() {
        let mut form = ProfileCardForm::new();
        form.begin_edit();
        form.toggle_edit_lock();
        assert!(!form.is_editing());
        assert_eq!(form.missing_fields().len(), 3);
    }

    #[test]
    fn test_save_success_locks() {
        let mut form = editing_form("Alice", "Reading", "30");
        let outcome = form.save();
        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(outcome.message(), "Saved successfully!");
        assert!(!form.is_editing());
    }

    #[test]
    fn test_save_missing_hobby() {
        let mut form = editing_form("Alice", "", "30");
        let outcome = form.save();
        assert_eq!(outcome.message(), "Please enter: Hobby");
        assert!(form.is_editing());
    }

    #[test]
    fn test_save_missing_name_and_age_keeps_order() {
        let mut form = editing_form("", "Reading", "");
        let outcome = form.save();
        assert_eq!(outcome, SaveOutcome::Missing(vec![Field::Name, Field::Age]));
        assert_eq!(outcome.message(), "Please enter: Name, Age");
        assert!(form.is_editing());
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut form = editing_form("   ", "\t\n", "1");
        assert_eq!(form.save().message(), "Please enter: Name, Hobby");
        assert!(form.is_editing());
    }

    #[test]
    fn test_setters_leave_mode_alone() {
        let mut form = ProfileCardForm::new();
        form.set_name("Bob");
        form.set_hobby("Chess");
        form.set_age("x");
        form.set_age("9");
        assert!(!form.is_editing());

        form.begin_edit();
        form.set_name("");
        form.set_field(Field::Age, "12");
        assert!(form.is_editing());
    }

    #[test]
    fn test_controls_follow_mode() {
        let mut form = ProfileCardForm::new();
        let locked = form.controls();
        assert!(locked.lock_chip && locked.edit_button);
        assert!(!locked.fields && !locked.save_button);

        form.begin_edit();
        let editing = form.controls();
        assert!(editing.lock_chip && editing.fields && editing.save_button);
        assert!(!editing.edit_button);
    }
}
