//! Error types for the chess-gantry library.
//!
//! Provides unified error handling across configuration, board geometry, and
//! motion execution.

use core::fmt;

use crate::driver::Axis;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all chess-gantry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Board coordinate or capture zone error
    Board(BoardError),
    /// Motion execution or calibration error
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid square size (must be > 0)
    InvalidSquareSize(i32),
    /// Invalid capture zone slot count (must be 1..=MAX_CAPTURE_SLOTS)
    InvalidCaptureSlots(u32),
    /// Invalid capture zone slot pitch (must be > 0)
    InvalidSlotPitch(i32),
    /// Invalid step rate pair (both must be > 0 and fast <= slow)
    InvalidStepRate {
        /// Slow step interval
        slow: u32,
        /// Fast step interval
        fast: u32,
    },
    /// Invalid debounce window (must be > 0)
    InvalidDebounce(u32),
    /// Invalid calibration step bound (must be > 0)
    InvalidCalibrationBound(u32),
    /// Two logical roles bound to the same physical channel
    DuplicatePin(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Board coordinate and capture zone errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 8x8 playing grid
    InvalidCoordinate {
        /// Requested column
        col: u8,
        /// Requested row
        row: u8,
    },
    /// Capture zone has no free slot
    CaptureZoneFull {
        /// Physical slot capacity
        capacity: u32,
    },
}

/// Motion execution errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// A limit switch never tripped within the bounded step count
    CalibrationStall {
        /// Axis that stalled
        axis: Axis,
        /// Step bound that was exhausted
        max_steps: u32,
    },
    /// Stepper driver reported a fault mid-move
    MotionFault {
        /// Axis that faulted
        axis: Axis,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Board(e) => write!(f, "Board error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSquareSize(v) => {
                write!(f, "Invalid square size: {}. Must be > 0", v)
            }
            ConfigError::InvalidCaptureSlots(v) => {
                write!(f, "Invalid capture slot count: {}", v)
            }
            ConfigError::InvalidSlotPitch(v) => {
                write!(f, "Invalid capture slot pitch: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepRate { slow, fast } => {
                write!(f, "Invalid step rates: slow {} / fast {}", slow, fast)
            }
            ConfigError::InvalidDebounce(v) => {
                write!(f, "Invalid debounce window: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidCalibrationBound(v) => {
                write!(f, "Invalid calibration step bound: {}. Must be > 0", v)
            }
            ConfigError::DuplicatePin(ch) => {
                write!(f, "Channel {} is bound to more than one role", ch)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate { col, row } => {
                write!(f, "Coordinate ({}, {}) is outside the 8x8 grid", col, row)
            }
            BoardError::CaptureZoneFull { capacity } => {
                write!(f, "Capture zone full ({} slots)", capacity)
            }
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::CalibrationStall { axis, max_steps } => {
                write!(
                    f,
                    "Limit switch on axis {} did not trip within {} steps",
                    axis, max_steps
                )
            }
            MotionError::MotionFault { axis } => {
                write!(f, "Stepper driver fault on axis {}", axis)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<BoardError> for Error {
    fn from(e: BoardError) -> Self {
        Error::Board(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
