//! Motion timing configuration.

use serde::Deserialize;

use super::units::StepRate;

/// Step rates and calibration bounds.
///
/// Rates are step intervals in microseconds, so a larger value is slower.
/// Defaults match the original controller's `SPEED_SLOW`/`SPEED_FAST`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Slow rate: fine approach, carrying a piece, homing.
    pub speed_slow: StepRate,

    /// Fast rate: empty-head travel.
    pub speed_fast: StepRate,

    /// Maximum steps an axis may travel during homing before the missing
    /// limit trip is treated as a stall or obstruction.
    pub calibration_max_steps: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed_slow: StepRate(3000),
            speed_fast: StepRate(1000),
            calibration_max_steps: 6000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let motion = MotionConfig::default();
        assert_eq!(motion.speed_slow, StepRate(3000));
        assert_eq!(motion.speed_fast, StepRate(1000));
        assert!(motion.speed_fast <= motion.speed_slow);
    }
}
