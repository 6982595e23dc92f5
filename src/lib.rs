//! My Puppies: a two-screen list/detail browser over a fixed set of entries.

pub mod app;
pub mod config;
pub mod domain;
pub mod services;
pub mod ui;
