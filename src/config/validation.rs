//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::board::MAX_CAPTURE_SLOTS;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Board geometry is physically meaningful (positive square size and pitch)
/// - Capture zone capacity is within the supported range
/// - Step rates are positive and fast is not slower than slow
/// - Debounce window and calibration bound are positive
/// - Every role is bound to a distinct channel
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.board.square_size <= 0 {
        return Err(Error::Config(ConfigError::InvalidSquareSize(
            config.board.square_size,
        )));
    }

    let capture = &config.board.capture;
    if capture.slots == 0 || capture.slots > MAX_CAPTURE_SLOTS {
        return Err(Error::Config(ConfigError::InvalidCaptureSlots(capture.slots)));
    }
    if capture.slot_pitch <= 0 {
        return Err(Error::Config(ConfigError::InvalidSlotPitch(
            capture.slot_pitch,
        )));
    }

    let slow = config.motion.speed_slow.0;
    let fast = config.motion.speed_fast.0;
    if slow == 0 || fast == 0 || fast > slow {
        return Err(Error::Config(ConfigError::InvalidStepRate { slow, fast }));
    }

    if config.input.debounce_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidDebounce(
            config.input.debounce_ms,
        )));
    }

    if config.motion.calibration_max_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidCalibrationBound(
            config.motion.calibration_max_steps,
        )));
    }

    // Every role must own its channel
    let channels = config.pins.channels();
    for (i, a) in channels.iter().enumerate() {
        for b in &channels[i + 1..] {
            if a == b {
                return Err(Error::Config(ConfigError::DuplicatePin(*a)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::StepRate;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SystemConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_square_size() {
        let mut config = SystemConfig::default();
        config.board.square_size = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSquareSize(0)))
        ));
    }

    #[test]
    fn test_fast_slower_than_slow() {
        let mut config = SystemConfig::default();
        config.motion.speed_fast = StepRate(5000);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidStepRate { .. }))
        ));
    }

    #[test]
    fn test_duplicate_pin() {
        let mut config = SystemConfig::default();
        config.pins.magnet = config.pins.step_a;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::DuplicatePin(_)))
        ));
    }

    #[test]
    fn test_capture_slots_bounds() {
        let mut config = SystemConfig::default();
        config.board.capture.slots = 0;
        assert!(validate_config(&config).is_err());

        config.board.capture.slots = MAX_CAPTURE_SLOTS + 1;
        assert!(validate_config(&config).is_err());

        config.board.capture.slots = MAX_CAPTURE_SLOTS;
        assert!(validate_config(&config).is_ok());
    }
}
