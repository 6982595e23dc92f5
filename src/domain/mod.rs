//! Core domain types.
//!
//! Plain data with no UI or framework dependencies, shared by the store,
//! the navigation controller and the screens.

mod entry;

pub use entry::{Entry, EntryKey};
