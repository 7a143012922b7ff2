//! Homing against the limit switches.

use crate::board::TrolleyPosition;
use crate::config::MotionConfig;
use crate::driver::{Axis, GantryDriver};
use crate::error::{MotionError, Result};

/// Drive both axes to their limit switches and define the physical zero.
///
/// Each axis steps in the negative direction at the slow rate, one step at a
/// time, until its switch trips. The tripped point is step zero for that
/// axis.
///
/// # Errors
///
/// Returns `MotionError::CalibrationStall` if a switch does not trip within
/// `calibration_max_steps` (stall or obstruction - no automatic retry), and
/// `MotionError::MotionFault` if the driver faults while homing. The
/// caller's position must be left unchanged on error.
pub fn calibrate<D: GantryDriver>(driver: &mut D, config: &MotionConfig) -> Result<TrolleyPosition> {
    home_axis(driver, Axis::A, config)?;
    home_axis(driver, Axis::B, config)?;
    Ok(TrolleyPosition::zero())
}

fn home_axis<D: GantryDriver>(driver: &mut D, axis: Axis, config: &MotionConfig) -> Result<()> {
    for _ in 0..config.calibration_max_steps {
        if driver.limit_tripped(axis) {
            return Ok(());
        }
        driver
            .step_axis(axis, -1, config.speed_slow)
            .map_err(|_| MotionError::MotionFault { axis })?;
    }

    // The switch may trip exactly on the final step.
    if driver.limit_tripped(axis) {
        Ok(())
    } else {
        Err(MotionError::CalibrationStall {
            axis,
            max_steps: config.calibration_max_steps,
        }
        .into())
    }
}
