//! Unit types for physical quantities.
//!
//! Provides type-safe representations of motor steps, step timing, and
//! millisecond timestamps to prevent unit confusion at compile time.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Motor position or distance in steps along one axis.
///
/// Uses i32, matching the signed step counts consumed by stepper drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i32);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Get absolute value as u32.
    #[inline]
    pub const fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Get the sign (-1, 0, or 1).
    #[inline]
    pub const fn signum(self) -> i32 {
        self.0.signum()
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Step interval for pulse timing, in microseconds between steps.
///
/// Larger values mean slower motion. The original firmware drives moves at
/// two fixed rates; both are configuration surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepRate(pub u32);

impl StepRate {
    /// Create a new StepRate value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw interval in microseconds.
    #[inline]
    pub const fn interval_us(self) -> u32 {
        self.0
    }
}

/// Millisecond timestamp with wrapping arithmetic.
///
/// Mirrors the Arduino `millis()` clock: a free-running u32 that wraps.
/// Elapsed-time comparisons use `wrapping_sub` so the wrap is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Create a new timestamp.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Milliseconds elapsed since an earlier timestamp.
    #[inline]
    pub const fn since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_arithmetic() {
        assert_eq!(Steps(275) + Steps(-550), Steps(-275));
        assert_eq!(Steps(825) - Steps(275), Steps(550));
        assert_eq!((-Steps(100)).value(), -100);
        assert_eq!(Steps(-42).abs(), 42);
        assert_eq!(Steps(-42).signum(), -1);
    }

    #[test]
    fn test_millis_wrapping() {
        let before = Millis(u32::MAX - 50);
        let after = Millis(150);
        assert_eq!(after.since(before), 201);
    }
}
