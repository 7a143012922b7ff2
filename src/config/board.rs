//! Board geometry configuration.

use serde::Deserialize;

use super::units::Steps;

/// Number of squares along each side of the playing grid.
pub const GRID_SIZE: u8 = 8;

/// Upper bound on configurable capture zone slots.
pub const MAX_CAPTURE_SLOTS: u32 = 32;

/// Physical layout of the board, in motor steps.
///
/// Defaults reproduce the original controller: 275 steps per square, with
/// square (0,0) offset from the homed zero by the trolley start position
/// (2 squares on axis A, 5.7 squares on axis B).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Steps of travel per board square.
    pub square_size: i32,

    /// Axis A offset of square (0,0) from the calibrated zero.
    pub origin_a: Steps,

    /// Axis B offset of square (0,0) from the calibrated zero.
    pub origin_b: Steps,

    /// Capture zone layout.
    pub capture: CaptureLayout,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: 275,
            origin_a: Steps(550),
            origin_b: Steps(1567),
            capture: CaptureLayout::default(),
        }
    }
}

/// Off-board parking area for captured pieces.
///
/// Slots form a single column at a fixed offset from the board origin,
/// spaced `slot_pitch` steps apart along axis B.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CaptureLayout {
    /// Physical slot capacity.
    pub slots: u32,

    /// Spacing between adjacent slots, in steps.
    pub slot_pitch: i32,

    /// Axis A offset of the slot column from the board origin.
    pub offset_a: Steps,

    /// Axis B offset of the first slot from the board origin.
    pub offset_b: Steps,
}

impl Default for CaptureLayout {
    fn default() -> Self {
        // One square to the left of the grid, slots at square pitch.
        Self {
            slots: 16,
            slot_pitch: 275,
            offset_a: Steps(-275),
            offset_b: Steps(0),
        }
    }
}
