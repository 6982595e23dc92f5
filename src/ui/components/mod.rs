//! Reusable UI components.
//!
//! Components are stateless and styled from the palette they are given.

pub mod button;

pub use button::Button;
