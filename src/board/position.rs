//! Trolley position tracking.
//!
//! Physical location of the gantry head in motor steps along both axes,
//! relative to the calibrated zero.

use crate::config::units::Steps;
use crate::driver::Axis;

/// Physical trolley position in steps.
///
/// Mutated only by the motion executor after a confirmed step, or reset by
/// calibration. Positions originate from the geometry map or the calibrated
/// zero, so they stay within the board's travel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrolleyPosition {
    /// Position along axis A.
    pub a: Steps,
    /// Position along axis B.
    pub b: Steps,
}

impl TrolleyPosition {
    /// Create a position from per-axis step counts.
    #[inline]
    pub const fn new(a: Steps, b: Steps) -> Self {
        Self { a, b }
    }

    /// The calibrated zero (both limit switches tripped).
    #[inline]
    pub const fn zero() -> Self {
        Self {
            a: Steps(0),
            b: Steps(0),
        }
    }

    /// Per-axis delta from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: TrolleyPosition) -> (Steps, Steps) {
        (other.a - self.a, other.b - self.b)
    }

    /// Move one axis by a signed step count.
    #[inline]
    pub fn offset_axis(&mut self, axis: Axis, delta: i32) {
        match axis {
            Axis::A => self.a = Steps(self.a.0 + delta),
            Axis::B => self.b = Steps(self.b.0 + delta),
        }
    }
}
