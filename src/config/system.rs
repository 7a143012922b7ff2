//! System configuration - root configuration structure.

use serde::Deserialize;

use super::board::BoardConfig;
use super::input::InputConfig;
use super::motion::MotionConfig;
use super::pins::PinMap;

/// Root configuration structure from TOML.
///
/// Every section has firmware-accurate defaults, so `SystemConfig::default()`
/// is a complete, valid configuration for the original machine and no_std
/// targets can skip the parser entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Logical-to-physical channel bindings.
    pub pins: PinMap,

    /// Board and capture zone geometry.
    pub board: BoardConfig,

    /// Step rates and calibration bounds.
    pub motion: MotionConfig,

    /// Button debounce timing.
    pub input: InputConfig,
}
