//! Capture zone slot accounting.

use crate::error::BoardError;

/// Counter of pieces parked in the capture zone.
///
/// Slot indices are reserved monotonically: the slot for a capture is the
/// counter value at the time of capture, and a slot is never reused within a
/// game. The counter never exceeds the physical capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CaptureZone {
    count: u32,
    capacity: u32,
}

impl CaptureZone {
    /// Create an empty capture zone with the given physical capacity.
    #[inline]
    pub const fn new(capacity: u32) -> Self {
        Self { count: 0, capacity }
    }

    /// Number of pieces currently parked.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Physical slot capacity.
    #[inline]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Reserve the next free slot, returning its index.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::CaptureZoneFull` when every slot is occupied.
    pub fn reserve_slot(&mut self) -> Result<u32, BoardError> {
        if self.count >= self.capacity {
            return Err(BoardError::CaptureZoneFull {
                capacity: self.capacity,
            });
        }
        let slot = self.count;
        self.count += 1;
        Ok(slot)
    }

    /// Empty the zone for a new game.
    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }
}
