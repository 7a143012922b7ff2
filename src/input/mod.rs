//! Debounced button input.
//!
//! Converts raw button levels into clean, edge-triggered logical events,
//! filtering switch bounce within the configured window.

mod reader;

pub use reader::{ButtonEvent, ButtonId, ButtonLevels, InputReader};
