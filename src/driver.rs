//! Gantry hardware seam.
//!
//! [`GantryDriver`] is the capability boundary toward the low-level drivers:
//! step pulse generation, electromagnet switching, and limit switch reads.
//! [`GpioGantry`] is a reference implementation over embedded-hal 1.0 pin
//! types for boards that drive STEP/DIR stepper drivers directly.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::StepRate;

/// Step pulse width in microseconds (1-10 us is sufficient for common
/// stepper drivers).
const STEP_PULSE_US: u32 = 2;

/// The two gantry axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Axis A (columns, limit switch X).
    A,
    /// Axis B (rows, limit switch Y).
    B,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::A => write!(f, "A"),
            Axis::B => write!(f, "B"),
        }
    }
}

/// Fault reported by the low-level driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveFault {
    /// Mechanical stall or unexpected limit trip mid-move.
    Stall,
    /// GPIO pin operation failed.
    PinError,
}

/// Capabilities consumed from the excluded low-level drivers.
///
/// Implementations must only return from [`step_axis`](Self::step_axis) once
/// every requested pulse has been emitted, so a returned `Ok` confirms the
/// head is stationary at the new step boundary.
pub trait GantryDriver {
    /// Move one axis by a signed step count at the given rate.
    fn step_axis(
        &mut self,
        axis: Axis,
        steps: i32,
        rate: StepRate,
    ) -> core::result::Result<(), DriveFault>;

    /// Energize or de-energize the electromagnet. Idempotent.
    fn set_magnet(&mut self, on: bool);

    /// Raw level of the axis's limit switch.
    fn limit_tripped(&mut self, axis: Axis) -> bool;
}

/// STEP/DIR pin pair for one axis.
///
/// Caches the last commanded direction to avoid redundant DIR writes.
pub struct AxisPins<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    step: STEP,
    dir: DIR,
    invert_direction: bool,
    current_positive: Option<bool>,
}

impl<STEP, DIR> AxisPins<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    /// Create a pin pair for one axis.
    pub fn new(step: STEP, dir: DIR) -> Self {
        Self {
            step,
            dir,
            invert_direction: false,
            current_positive: None,
        }
    }

    /// Invert DIR pin logic for this axis.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    fn set_direction(&mut self, positive: bool) -> core::result::Result<(), DriveFault> {
        if self.current_positive == Some(positive) {
            return Ok(());
        }

        let pin_high = positive != self.invert_direction;
        if pin_high {
            self.dir.set_high().map_err(|_| DriveFault::PinError)?;
        } else {
            self.dir.set_low().map_err(|_| DriveFault::PinError)?;
        }

        self.current_positive = Some(positive);
        Ok(())
    }
}

fn pulse_axis<STEP, DIR, DELAY>(
    pins: &mut AxisPins<STEP, DIR>,
    delay: &mut DELAY,
    steps: i32,
    rate: StepRate,
) -> core::result::Result<(), DriveFault>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    if steps == 0 {
        return Ok(());
    }

    pins.set_direction(steps > 0)?;

    for _ in 0..steps.unsigned_abs() {
        pins.step.set_high().map_err(|_| DriveFault::PinError)?;
        delay.delay_us(STEP_PULSE_US);
        pins.step.set_low().map_err(|_| DriveFault::PinError)?;
        delay.delay_us(rate.interval_us().saturating_sub(STEP_PULSE_US));
    }

    Ok(())
}

/// Reference [`GantryDriver`] over embedded-hal 1.0 pins.
///
/// Generic over:
/// - `SA`/`DA`: axis A STEP/DIR pins
/// - `SB`/`DB`: axis B STEP/DIR pins
/// - `MAG`: electromagnet pin
/// - `LX`/`LY`: limit switch input pins
/// - `DELAY`: delay provider for step timing
pub struct GpioGantry<SA, DA, SB, DB, MAG, LX, LY, DELAY>
where
    SA: OutputPin,
    DA: OutputPin,
    SB: OutputPin,
    DB: OutputPin,
    MAG: OutputPin,
    LX: InputPin,
    LY: InputPin,
    DELAY: DelayNs,
{
    axis_a: AxisPins<SA, DA>,
    axis_b: AxisPins<SB, DB>,
    magnet: MAG,
    limit_x: LX,
    limit_y: LY,
    delay: DELAY,
}

impl<SA, DA, SB, DB, MAG, LX, LY, DELAY> GpioGantry<SA, DA, SB, DB, MAG, LX, LY, DELAY>
where
    SA: OutputPin,
    DA: OutputPin,
    SB: OutputPin,
    DB: OutputPin,
    MAG: OutputPin,
    LX: InputPin,
    LY: InputPin,
    DELAY: DelayNs,
{
    /// Assemble a gantry from its pins.
    pub fn new(
        axis_a: AxisPins<SA, DA>,
        axis_b: AxisPins<SB, DB>,
        magnet: MAG,
        limit_x: LX,
        limit_y: LY,
        delay: DELAY,
    ) -> Self {
        Self {
            axis_a,
            axis_b,
            magnet,
            limit_x,
            limit_y,
            delay,
        }
    }
}

impl<SA, DA, SB, DB, MAG, LX, LY, DELAY> GantryDriver
    for GpioGantry<SA, DA, SB, DB, MAG, LX, LY, DELAY>
where
    SA: OutputPin,
    DA: OutputPin,
    SB: OutputPin,
    DB: OutputPin,
    MAG: OutputPin,
    LX: InputPin,
    LY: InputPin,
    DELAY: DelayNs,
{
    fn step_axis(
        &mut self,
        axis: Axis,
        steps: i32,
        rate: StepRate,
    ) -> core::result::Result<(), DriveFault> {
        match axis {
            Axis::A => pulse_axis(&mut self.axis_a, &mut self.delay, steps, rate),
            Axis::B => pulse_axis(&mut self.axis_b, &mut self.delay, steps, rate),
        }
    }

    fn set_magnet(&mut self, on: bool) {
        // Magnet switching is best-effort: a failed pin write here leaves
        // nothing to recover, and the driver contract is infallible.
        if on {
            let _ = self.magnet.set_high();
        } else {
            let _ = self.magnet.set_low();
        }
    }

    fn limit_tripped(&mut self, axis: Axis) -> bool {
        match axis {
            Axis::A => self.limit_x.is_high().unwrap_or(false),
            Axis::B => self.limit_y.is_high().unwrap_or(false),
        }
    }
}
