//! Read-only store of entries keyed by name.
//!
//! The store is built once at startup and shared behind an `Arc`. It has no
//! mutation operations, so it can be read from any view without locking.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{Entry, EntryKey};

/// Errors produced by the entry store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry exists under the requested key.
    #[error("no entry named \"{0}\"")]
    NotFound(EntryKey),
    /// Two entries share a name while building a store.
    #[error("duplicate entry name \"{0}\"")]
    DuplicateName(EntryKey),
}

/// Immutable collection of entries, keyed by name.
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
    index: HashMap<EntryKey, usize>,
}

impl EntryStore {
    /// The compiled-in entries the application ships with.
    pub fn builtin() -> Self {
        let entries = vec![
            Entry::new(
                "C++",
                "Quite Powerful Monster",
                "One of the most popular language. ",
            ),
            Entry::new(
                "Perl",
                "Old Pal",
                "the most fastest way to make quick hacks like as oneliner",
            ),
            Entry::new(
                "Python",
                "For Almost All Purpose",
                "Quite usable for exploratory data analysis because of Jupyter notebook",
            ),
            Entry::new(
                "Kotlin",
                "Newcomer",
                "learning for the challenge just right now",
            ),
        ];

        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.key(), idx))
            .collect();

        Self { entries, index }
    }

    /// Build a store from arbitrary entries.
    ///
    /// Insertion order is kept for iteration. Fails on the first repeated name.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Result<Self, StoreError> {
        let mut store = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for entry in entries {
            let key = entry.key();
            if store.index.contains_key(&key) {
                return Err(StoreError::DuplicateName(key));
            }
            store.index.insert(key, store.entries.len());
            store.entries.push(entry);
        }

        Ok(store)
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &EntryKey) -> Option<&Entry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// Look up an entry by key, reporting a miss as an error.
    pub fn resolve(&self, key: &EntryKey) -> Result<&Entry, StoreError> {
        self.get(key).ok_or_else(|| StoreError::NotFound(key.clone()))
    }

    /// Iterate over all entries. Each call starts a fresh pass.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
