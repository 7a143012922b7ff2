//! Motion planning and execution.

mod calibrate;
mod executor;
mod plan;

pub use calibrate::calibrate;
pub use executor::{MotionExecutor, StepStatus};
pub use plan::{plan_piece_move, plan_travel, MoveAction, MoveKind, MovePlan, PrimitiveMove};
