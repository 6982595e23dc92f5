//! Entry records and their lookup key.

use std::fmt;

/// Key identifying an entry. Always equal to the entry's `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(String);

impl EntryKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single named record with a one-line summary and a longer description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub summary: String,
    pub description: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            description: description.into(),
        }
    }

    /// The key this entry is stored under.
    pub fn key(&self) -> EntryKey {
        EntryKey::from(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_matches_name() {
        let entry = Entry::new("Kotlin", "Newcomer", "learning");
        assert_eq!(entry.key(), EntryKey::from("Kotlin"));
        assert_eq!(entry.key().as_str(), entry.name);
    }

    #[test]
    fn key_display() {
        assert_eq!(EntryKey::from("C++").to_string(), "C++");
    }
}
