//! Application views.
//!
//! The main window hosts one screen at a time: the entry list or the entry
//! detail. Each screen keeps its own state and reports activations back to
//! the window through callbacks.

mod entry_detail;
mod entry_list;
mod main_window;

pub use entry_detail::EntryDetail;
pub use entry_list::EntryList;
pub use main_window::{MainWindow, APP_TITLE};
