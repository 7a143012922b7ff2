//! Configuration module for chess-gantry.
//!
//! Provides types for loading and validating pin bindings, board geometry,
//! and motion timing from TOML files (with `std` feature) or pre-parsed data.
//! Defaults reproduce the original controller's constants, so
//! [`SystemConfig::default`] is usable without any file.

mod board;
mod input;
#[cfg(feature = "std")]
mod loader;
mod motion;
mod pins;
mod system;
pub mod units;
mod validation;

pub use board::{BoardConfig, CaptureLayout, GRID_SIZE, MAX_CAPTURE_SLOTS};
pub use input::InputConfig;
pub use motion::MotionConfig;
pub use pins::PinMap;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millis, StepRate, Steps};
