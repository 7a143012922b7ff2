//! Pin/role bindings from configuration.
//!
//! Every logical role of the original controller maps to one physical
//! channel. The bindings are configuration surface only: nothing in this
//! crate reads or writes a channel number directly, the application wires the
//! channels to concrete pins when constructing a driver.

use serde::Deserialize;

/// Logical-to-physical channel bindings for the whole machine.
///
/// Defaults match the original controller's wiring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinMap {
    /// Electromagnet driver channel.
    pub magnet: u8,

    /// Axis A STEP channel.
    pub step_a: u8,
    /// Axis A DIR channel.
    pub dir_a: u8,
    /// Axis A enable channel.
    pub en_a: u8,

    /// Axis B STEP channel.
    pub step_b: u8,
    /// Axis B DIR channel.
    pub dir_b: u8,
    /// Axis B enable channel.
    pub en_b: u8,

    /// X limit switch channel.
    pub limit_x: u8,
    /// Y limit switch channel.
    pub limit_y: u8,

    /// Easy-difficulty button channel.
    pub easy_button: u8,
    /// Hard-difficulty button channel.
    pub hard_button: u8,
    /// Move-confirm button channel.
    pub move_confirm_button: u8,
    /// Start button channel.
    pub start_button: u8,
    /// End button channel.
    pub end_button: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            magnet: 6,
            step_a: 2,
            dir_a: 3,
            en_a: 22,
            step_b: 4,
            dir_b: 5,
            en_b: 24,
            limit_x: 7,
            limit_y: 8,
            easy_button: 9,
            hard_button: 10,
            move_confirm_button: 11,
            start_button: 12,
            end_button: 13,
        }
    }
}

impl PinMap {
    /// All bound channels in declaration order.
    pub fn channels(&self) -> [u8; 14] {
        [
            self.magnet,
            self.step_a,
            self.dir_a,
            self.en_a,
            self.step_b,
            self.dir_b,
            self.en_b,
            self.limit_x,
            self.limit_y,
            self.easy_button,
            self.hard_button,
            self.move_confirm_button,
            self.start_button,
            self.end_button,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let pins = PinMap::default();
        assert_eq!(pins.magnet, 6);
        assert_eq!(pins.step_a, 2);
        assert_eq!(pins.en_b, 24);
        assert_eq!(pins.end_button, 13);
    }

    #[test]
    fn test_defaults_are_distinct() {
        let pins = PinMap::default();
        let channels = pins.channels();
        for (i, a) in channels.iter().enumerate() {
            for b in &channels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
