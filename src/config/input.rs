//! Button input configuration.

use serde::Deserialize;

/// Debounce timing for the physical buttons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum time between accepted presses of the same button.
    pub debounce_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}
