//! Board coordinate model.
//!
//! Maps logical board squares to physical trolley positions and tracks
//! capture zone occupancy.

mod capture;
mod coordinate;
mod geometry;
mod position;

pub use capture::CaptureZone;
pub use coordinate::BoardCoordinate;
pub use geometry::BoardGeometry;
pub use position::TrolleyPosition;
