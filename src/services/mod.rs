//! Application services.
//!
//! Services own data access for the UI layer. Views never reach for global
//! state; they receive a service handle at construction time.

mod entry_store;

pub use entry_store::{EntryStore, StoreError};
