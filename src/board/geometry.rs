//! Board geometry - logical coordinates to physical trolley positions.
//!
//! Derived once from configuration and used for all planning.

use crate::config::units::Steps;
use crate::config::BoardConfig;
use crate::error::BoardError;

use super::coordinate::BoardCoordinate;
use super::position::TrolleyPosition;

/// Fixed linear transform between board squares and trolley positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGeometry {
    square_size: i32,
    origin: TrolleyPosition,
    capture_slots: u32,
    capture_pitch: i32,
    capture_offset: (Steps, Steps),
}

impl BoardGeometry {
    /// Derive the geometry from board configuration.
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            square_size: config.square_size,
            origin: TrolleyPosition::new(config.origin_a, config.origin_b),
            capture_slots: config.capture.slots,
            capture_pitch: config.capture.slot_pitch,
            capture_offset: (config.capture.offset_a, config.capture.offset_b),
        }
    }

    /// Steps of travel per board square.
    #[inline]
    pub fn square_size(&self) -> i32 {
        self.square_size
    }

    /// Capture zone slot capacity.
    #[inline]
    pub fn capture_slots(&self) -> u32 {
        self.capture_slots
    }

    /// Map a board coordinate to the trolley position over its square center.
    ///
    /// Pure linear transform: `origin + coordinate * square_size`.
    /// Deterministic and injective over the grid; the coordinate itself is
    /// already validated at construction.
    pub fn to_physical(&self, coord: BoardCoordinate) -> TrolleyPosition {
        TrolleyPosition::new(
            Steps(self.origin.a.0 + coord.col() as i32 * self.square_size),
            Steps(self.origin.b.0 + coord.row() as i32 * self.square_size),
        )
    }

    /// Parking position for a capture zone slot.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::CaptureZoneFull` if `index` exceeds the physical
    /// capacity.
    pub fn capture_slot(&self, index: u32) -> Result<TrolleyPosition, BoardError> {
        if index >= self.capture_slots {
            return Err(BoardError::CaptureZoneFull {
                capacity: self.capture_slots,
            });
        }
        let (offset_a, offset_b) = self.capture_offset;
        Ok(TrolleyPosition::new(
            Steps(self.origin.a.0 + offset_a.0),
            Steps(self.origin.b.0 + offset_b.0 + index as i32 * self.capture_pitch),
        ))
    }
}
