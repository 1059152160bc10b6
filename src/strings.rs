//! Display text for the card, keyed by identifier.
//!
//! Built-in defaults can be replaced per key from the `[strings]` table of the
//! config file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKey {
    AppName,
    CardName,
    CardHobby,
    IsEditing,
    IsLocked,
    CardNameLabel,
    CardHobbyLabel,
    CardAgeLabel,
    AgeWarning,
    EditButton,
    SaveButton,
}

impl StringKey {
    pub fn default_text(self) -> &'static str {
        match self {
            StringKey::AppName => "Cardfolio",
            StringKey::CardName => "Your Name",
            StringKey::CardHobby => "Your Hobby",
            StringKey::IsEditing => "Editing",
            StringKey::IsLocked => "Locked",
            StringKey::CardNameLabel => "Name",
            StringKey::CardHobbyLabel => "Hobby",
            StringKey::CardAgeLabel => "Age",
            StringKey::AgeWarning => "Digits only",
            StringKey::EditButton => "Edit",
            StringKey::SaveButton => "Save",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Strings {
    overrides: BTreeMap<StringKey, String>,
}

impl Strings {
    pub fn new(overrides: BTreeMap<StringKey, String>) -> Self {
        Self { overrides }
    }

    pub fn get(&self, key: StringKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let strings = Strings::default();
        assert_eq!(strings.get(StringKey::AppName), "Cardfolio");
        assert_eq!(strings.get(StringKey::IsLocked), "Locked");
    }

    #[test]
    fn test_override_only_touches_its_key() {
        let mut overrides = BTreeMap::new();
        overrides.insert(StringKey::CardName, "Nameless".to_string());
        let strings = Strings::new(overrides);
        assert_eq!(strings.get(StringKey::CardName), "Nameless");
        assert_eq!(strings.get(StringKey::CardHobby), "Your Hobby");
    }
}
