//! Move planning.
//!
//! Decomposes a travel delta into at most one diagonal and one straight
//! primitive, and assembles full piece-move plans with magnet actions and
//! capture relocation.

use heapless::Vec;

use crate::board::{BoardCoordinate, BoardGeometry, CaptureZone, TrolleyPosition};
use crate::config::units::StepRate;
use crate::config::MotionConfig;
use crate::error::Result;

/// One indivisible travel direction.
///
/// Closed-enum rework of the original firmware's move table
/// (top-bottom, bottom-top, left-right, right-left, and the four diagonals).
/// East is +A (columns), North is +B (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveKind {
    /// +B
    North,
    /// -B
    South,
    /// +A
    East,
    /// -A
    West,
    /// +A +B
    NorthEast,
    /// -A -B
    SouthWest,
    /// +A -B
    SouthEast,
    /// -A +B
    NorthWest,
}

impl MoveKind {
    /// Per-unit delta (da, db) of this direction.
    pub const fn unit_delta(self) -> (i32, i32) {
        match self {
            MoveKind::North => (0, 1),
            MoveKind::South => (0, -1),
            MoveKind::East => (1, 0),
            MoveKind::West => (-1, 0),
            MoveKind::NorthEast => (1, 1),
            MoveKind::SouthWest => (-1, -1),
            MoveKind::SouthEast => (1, -1),
            MoveKind::NorthWest => (-1, 1),
        }
    }

    const fn diagonal(da_positive: bool, db_positive: bool) -> Self {
        match (da_positive, db_positive) {
            (true, true) => MoveKind::NorthEast,
            (false, false) => MoveKind::SouthWest,
            (true, false) => MoveKind::SouthEast,
            (false, true) => MoveKind::NorthWest,
        }
    }
}

/// One indivisible straight or diagonal travel segment.
///
/// A unit is one motor step on each participating axis, so a diagonal unit
/// steps both axes once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrimitiveMove {
    /// Travel direction.
    pub kind: MoveKind,
    /// Number of step units.
    pub units: u32,
    /// Step rate for the whole segment.
    pub rate: StepRate,
}

/// One ordered element of a move plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveAction {
    /// Travel a primitive segment.
    Travel(PrimitiveMove),
    /// Engage (true) or release (false) the electromagnet. Point operation,
    /// never concurrent with axis motion.
    Magnet(bool),
}

/// An ordered, bounded move plan.
///
/// Capacity covers the worst case: a capture relocation plus the primary
/// move is 4 travels of up to 2 segments each and 4 magnet actions.
pub type MovePlan = Vec<MoveAction, 16>;

/// Decompose the travel from one position to another.
///
/// The delta splits into the largest pure-diagonal run (`min(|da|, |db|)`
/// units) plus a residual straight run along the larger axis, so total step
/// units equal `max(|da|, |db|)` - the shortest path the two axes can
/// produce. Returns zero, one, or two segments.
pub fn plan_travel(
    from: TrolleyPosition,
    to: TrolleyPosition,
    rate: StepRate,
) -> Vec<PrimitiveMove, 2> {
    let (da, db) = from.delta_to(to);
    let mut segments = Vec::new();

    let diag_units = da.abs().min(db.abs());
    if diag_units > 0 {
        let kind = MoveKind::diagonal(da.0 > 0, db.0 > 0);
        let _ = segments.push(PrimitiveMove {
            kind,
            units: diag_units,
            rate,
        });
    }

    let residual = da.abs().abs_diff(db.abs());
    if residual > 0 {
        let kind = if da.abs() > db.abs() {
            if da.0 > 0 {
                MoveKind::East
            } else {
                MoveKind::West
            }
        } else if db.0 > 0 {
            MoveKind::North
        } else {
            MoveKind::South
        };
        let _ = segments.push(PrimitiveMove {
            kind,
            units: residual,
            rate,
        });
    }

    segments
}

fn extend_travel(plan: &mut MovePlan, from: TrolleyPosition, to: TrolleyPosition, rate: StepRate) {
    for segment in plan_travel(from, to, rate) {
        let _ = plan.push(MoveAction::Travel(segment));
    }
}

fn extend_carry(plan: &mut MovePlan, from: TrolleyPosition, to: TrolleyPosition, rate: StepRate) {
    let _ = plan.push(MoveAction::Magnet(true));
    extend_travel(plan, from, to, rate);
    let _ = plan.push(MoveAction::Magnet(false));
}

/// Plan a full piece move.
///
/// Travel to the piece runs empty at the fast rate; any leg with a piece on
/// the magnet runs at the slow rate. When `capture` is set, the occupant of
/// the destination square is relocated to the next free capture zone slot
/// (the slot is reserved and the counter incremented here, before any
/// primary-move action is appended), and only then is the moving piece
/// fetched and carried to the destination.
///
/// # Errors
///
/// Returns `BoardError::CaptureZoneFull` when a capture is requested and no
/// slot is free.
pub fn plan_piece_move(
    geometry: &BoardGeometry,
    capture_zone: &mut CaptureZone,
    motion: &MotionConfig,
    current: TrolleyPosition,
    from: BoardCoordinate,
    to: BoardCoordinate,
    capture: bool,
) -> Result<MovePlan> {
    let source = geometry.to_physical(from);
    let dest = geometry.to_physical(to);

    let mut plan = MovePlan::new();
    let mut head = current;

    if capture {
        let slot = capture_zone.reserve_slot()?;
        let parking = geometry.capture_slot(slot)?;

        extend_travel(&mut plan, head, dest, motion.speed_fast);
        extend_carry(&mut plan, dest, parking, motion.speed_slow);
        head = parking;
    }

    extend_travel(&mut plan, head, source, motion.speed_fast);
    extend_carry(&mut plan, source, dest, motion.speed_slow);

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Steps;
    use crate::config::BoardConfig;
    use crate::error::{BoardError, Error};

    const FAST: StepRate = StepRate(1000);

    fn pos(a: i32, b: i32) -> TrolleyPosition {
        TrolleyPosition::new(Steps(a), Steps(b))
    }

    fn total_units(segments: &[PrimitiveMove]) -> u32 {
        segments.iter().map(|s| s.units).sum()
    }

    #[test]
    fn test_pure_straight() {
        let segments = plan_travel(pos(0, 0), pos(550, 0), FAST);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, MoveKind::East);
        assert_eq!(segments[0].units, 550);
    }

    #[test]
    fn test_pure_diagonal() {
        let segments = plan_travel(pos(100, 100), pos(0, 0), FAST);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, MoveKind::SouthWest);
        assert_eq!(segments[0].units, 100);
    }

    #[test]
    fn test_mixed_delta_decomposition() {
        // Square-unit deltas da=3, db=2: two diagonal units plus one straight.
        let segments = plan_travel(pos(0, 0), pos(3, 2), FAST);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, MoveKind::NorthEast);
        assert_eq!(segments[0].units, 2);
        assert_eq!(segments[1].kind, MoveKind::East);
        assert_eq!(segments[1].units, 1);
        assert_eq!(total_units(&segments), 3);
    }

    #[test]
    fn test_residual_along_larger_axis() {
        let segments = plan_travel(pos(0, 0), pos(-200, 700), FAST);
        assert_eq!(segments[0].kind, MoveKind::NorthWest);
        assert_eq!(segments[0].units, 200);
        assert_eq!(segments[1].kind, MoveKind::North);
        assert_eq!(segments[1].units, 500);
        // Optimal: total units equal max(|da|, |db|)
        assert_eq!(total_units(&segments), 700);
    }

    #[test]
    fn test_zero_delta_is_empty() {
        assert!(plan_travel(pos(42, 7), pos(42, 7), FAST).is_empty());
    }

    fn planning_fixture() -> (BoardGeometry, CaptureZone, MotionConfig) {
        let board = BoardConfig::default();
        let geometry = BoardGeometry::from_config(&board);
        let zone = CaptureZone::new(board.capture.slots);
        (geometry, zone, MotionConfig::default())
    }

    #[test]
    fn test_plain_move_plan_shape() {
        let (geometry, mut zone, motion) = planning_fixture();
        let from = BoardCoordinate::new(2, 5).unwrap();
        let to = BoardCoordinate::new(5, 7).unwrap();
        let start = geometry.to_physical(BoardCoordinate::new(0, 0).unwrap());

        let plan =
            plan_piece_move(&geometry, &mut zone, &motion, start, from, to, false).unwrap();

        // Approach (diagonal), engage, carry (diagonal + straight), release
        assert_eq!(plan[0], MoveAction::Travel(PrimitiveMove {
            kind: MoveKind::NorthEast,
            units: 2 * 275,
            rate: motion.speed_fast,
        }));
        assert_eq!(plan[1], MoveAction::Magnet(true));
        assert_eq!(plan[2], MoveAction::Travel(PrimitiveMove {
            kind: MoveKind::NorthEast,
            units: 2 * 275,
            rate: motion.speed_slow,
        }));
        assert_eq!(plan[3], MoveAction::Travel(PrimitiveMove {
            kind: MoveKind::East,
            units: 275,
            rate: motion.speed_slow,
        }));
        assert_eq!(plan[4], MoveAction::Magnet(false));
        assert_eq!(plan.len(), 5);
        assert_eq!(zone.count(), 0);
    }

    #[test]
    fn test_capture_submove_precedes_primary() {
        let (geometry, mut zone, motion) = planning_fixture();
        let from = BoardCoordinate::new(0, 0).unwrap();
        let to = BoardCoordinate::new(0, 3).unwrap();
        let start = geometry.to_physical(from);

        let plan =
            plan_piece_move(&geometry, &mut zone, &motion, start, from, to, true).unwrap();

        // Slot reserved during planning
        assert_eq!(zone.count(), 1);

        // The first magnet engagement carries the captured piece off-board;
        // the primary pickup at `from` can only come after its release.
        let engagements: heapless::Vec<usize, 4> = plan
            .iter()
            .enumerate()
            .filter_map(|(i, a)| (*a == MoveAction::Magnet(true)).then_some(i))
            .collect();
        assert_eq!(engagements.len(), 2);

        let release_after_capture = plan[engagements[0]..]
            .iter()
            .position(|a| *a == MoveAction::Magnet(false))
            .unwrap();
        assert!(engagements[0] + release_after_capture < engagements[1]);
    }

    #[test]
    fn test_carry_legs_run_slow() {
        let (geometry, mut zone, motion) = planning_fixture();
        let from = BoardCoordinate::new(1, 1).unwrap();
        let to = BoardCoordinate::new(4, 1).unwrap();
        let start = TrolleyPosition::zero();

        let plan =
            plan_piece_move(&geometry, &mut zone, &motion, start, from, to, true).unwrap();

        let mut magnet_on = false;
        for action in &plan {
            match action {
                MoveAction::Magnet(on) => magnet_on = *on,
                MoveAction::Travel(segment) => {
                    let expected = if magnet_on {
                        motion.speed_slow
                    } else {
                        motion.speed_fast
                    };
                    assert_eq!(segment.rate, expected);
                }
            }
        }
    }

    #[test]
    fn test_capture_zone_exhaustion_fails_plan() {
        let (geometry, _, motion) = planning_fixture();
        let mut zone = CaptureZone::new(1);
        zone.reserve_slot().unwrap();

        let from = BoardCoordinate::new(0, 0).unwrap();
        let to = BoardCoordinate::new(1, 1).unwrap();
        let result = plan_piece_move(
            &geometry,
            &mut zone,
            &motion,
            TrolleyPosition::zero(),
            from,
            to,
            true,
        );

        assert_eq!(
            result,
            Err(Error::Board(BoardError::CaptureZoneFull { capacity: 1 }))
        );
    }
}
