//! Keyed table of user-facing error messages.

use std::collections::BTreeMap;

use crate::error::{Result, WizardError};

/// Key looked up when the resolved root is not a directory.
pub const GLOB_DIRECTORY_INVALID: &str = "glob-directory-invalid";

const GLOB_DIRECTORY_INVALID_TEXT: &str = "The path you provided for the root of your web app \
is invalid. Please provide the path to a directory that exists.";

/// Error-message lookup by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    entries: BTreeMap<String, String>,
}

impl MessageTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| WizardError::MissingMessage {
                key: key.to_string(),
            })
    }
}

/// Built-in messages, used when the config does not override them.
pub fn default_messages() -> BTreeMap<String, String> {
    BTreeMap::from([(
        GLOB_DIRECTORY_INVALID.to_string(),
        GLOB_DIRECTORY_INVALID_TEXT.to_string(),
    )])
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::new(default_messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_glob_directory_invalid() {
        let table = MessageTable::default();
        assert!(table.get(GLOB_DIRECTORY_INVALID).expect("message").contains("directory"));
    }

    #[test]
    fn missing_key_is_reported() {
        let table = MessageTable::new(BTreeMap::new());
        let err = table.get(GLOB_DIRECTORY_INVALID).unwrap_err();
        assert!(matches!(err, WizardError::MissingMessage { key } if key == GLOB_DIRECTORY_INVALID));
    }
}
