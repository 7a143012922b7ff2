//! # chess-gantry
//!
//! Control logic for a two-axis chess-playing gantry with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Pin wiring, board geometry, and motion timing in TOML
//! - **embedded-hal 1.0**: Uses `OutputPin`/`InputPin` for the gantry, `DelayNs` for step timing
//! - **no_std compatible**: Core library works without standard library
//! - **Debounced input**: Raw button levels become clean logical events
//! - **Interruptible motion**: Plans execute one step unit at a time, so an
//!   End press aborts with bounded latency
//! - **Capture handling**: Captured pieces are parked off-board before the
//!   primary move runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chess_gantry::{ButtonLevels, GantryController, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = chess_gantry::load_config("gantry.toml")?;
//!
//! // Wrap the embedded-hal pins in the GPIO driver
//! use chess_gantry::{AxisPins, GpioGantry};
//! let driver = GpioGantry::new(
//!     AxisPins::new(step_a, dir_a),
//!     AxisPins::new(step_b, dir_b),
//!     magnet, limit_x, limit_y, delay,
//! );
//!
//! let mut gantry = GantryController::new(&config, driver);
//! gantry.calibrate()?;
//!
//! // Main loop: sample buttons, feed the controller one slice at a time
//! loop {
//!     let levels = read_button_levels();
//!     gantry.tick(&levels, now_millis())?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod board;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod game;
pub mod input;
pub mod motion;

// Re-exports for ergonomic API
pub use board::{BoardCoordinate, BoardGeometry, CaptureZone, TrolleyPosition};
pub use config::{validate_config, BoardConfig, InputConfig, MotionConfig, PinMap, SystemConfig};
pub use controller::{GantryController, MoveRequest, TickOutcome};
pub use driver::{Axis, AxisPins, DriveFault, GantryDriver, GpioGantry};
pub use error::{Error, Result};
pub use game::{Difficulty, GameIntent, GamePhase, GameSequencer};
pub use input::{ButtonEvent, ButtonId, ButtonLevels, InputReader};
pub use motion::{MotionExecutor, MoveKind, MovePlan};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Millis, StepRate, Steps};
