//! Cooperative control loop.
//!
//! One [`GantryController`] owns every piece of mutable machine state:
//! trolley position, capture zone, game phase, and the in-flight move. The
//! application calls [`tick`](GantryController::tick) from its main loop
//! with fresh button levels and the current clock; each tick advances motion
//! by at most one step unit, so an End press is honored with bounded
//! latency.

use crate::board::{BoardCoordinate, BoardGeometry, CaptureZone, TrolleyPosition};
use crate::config::units::Millis;
use crate::config::{MotionConfig, SystemConfig};
use crate::driver::GantryDriver;
use crate::error::Result;
use crate::game::{GameIntent, GamePhase, GameSequencer};
use crate::input::{ButtonLevels, InputReader};
use crate::motion::{self, MotionExecutor, StepStatus};

/// A requested piece move, fed in by the upstream move source.
///
/// Chess legality and destination occupancy are decided upstream; the
/// `capture` flag is opaque input here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRequest {
    /// Square the piece moves from.
    pub from: BoardCoordinate,
    /// Square the piece moves to.
    pub to: BoardCoordinate,
    /// Destination holds an enemy piece that must be parked first.
    pub capture: bool,
}

impl MoveRequest {
    /// Build a request from raw (column, row) pairs.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidCoordinate` if either square is outside
    /// the grid.
    pub fn new(
        from: (u8, u8),
        to: (u8, u8),
        capture: bool,
    ) -> core::result::Result<Self, crate::error::BoardError> {
        Ok(Self {
            from: BoardCoordinate::new(from.0, from.1)?,
            to: BoardCoordinate::new(to.0, to.1)?,
            capture,
        })
    }
}

/// What one control-loop slice accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Nothing to do this cycle.
    Quiet,
    /// A game transition fired; the host may need to react.
    Intent(GameIntent),
    /// An in-flight move advanced by one step unit.
    Moving,
    /// The committed move ran to completion.
    MoveComplete,
    /// An End press aborted the in-flight move.
    Aborted,
}

/// The single owner of all gantry state.
pub struct GantryController<D: GantryDriver> {
    driver: D,
    geometry: BoardGeometry,
    motion: MotionConfig,
    position: TrolleyPosition,
    calibrated: bool,
    capture_zone: CaptureZone,
    input: InputReader,
    sequencer: GameSequencer,
    executor: Option<MotionExecutor>,
    pending: Option<MoveRequest>,
}

impl<D: GantryDriver> GantryController<D> {
    /// Create a controller from configuration and a hardware driver.
    ///
    /// The controller starts uncalibrated; run
    /// [`calibrate`](Self::calibrate) before queueing moves.
    pub fn new(config: &SystemConfig, driver: D) -> Self {
        Self {
            driver,
            geometry: BoardGeometry::from_config(&config.board),
            motion: config.motion.clone(),
            position: TrolleyPosition::zero(),
            calibrated: false,
            capture_zone: CaptureZone::new(config.board.capture.slots),
            input: InputReader::new(&config.input),
            sequencer: GameSequencer::new(),
            executor: None,
            pending: None,
        }
    }

    /// Current trolley position.
    #[inline]
    pub fn position(&self) -> TrolleyPosition {
        self.position
    }

    /// Current game phase.
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.sequencer.phase()
    }

    /// Difficulty of the running game.
    #[inline]
    pub fn difficulty(&self) -> crate::game::Difficulty {
        self.sequencer.difficulty()
    }

    /// Whether the coordinate model is anchored to a homed zero.
    #[inline]
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Pieces parked in the capture zone this game.
    #[inline]
    pub fn captured_count(&self) -> u32 {
        self.capture_zone.count()
    }

    /// Borrow the underlying driver.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the underlying driver.
    ///
    /// Meant for application-level concerns outside the move cycle, like
    /// toggling driver enable lines; motion in flight assumes exclusive
    /// driver access through [`tick`](Self::tick).
    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Home both axes and zero the coordinate model.
    ///
    /// Also the only recovery after an aborted move has lost grid
    /// alignment. On error the previous position is left unchanged.
    pub fn calibrate(&mut self) -> Result<TrolleyPosition> {
        let zero = motion::calibrate(&mut self.driver, &self.motion)?;
        self.position = zero;
        self.calibrated = true;
        Ok(zero)
    }

    /// Queue the next piece move for execution.
    ///
    /// Replaces any not-yet-started request. Execution begins once the game
    /// reaches MoveConfirmed.
    pub fn queue_move(&mut self, request: MoveRequest) {
        self.pending = Some(request);
    }

    /// Queue a move from raw coordinate pairs.
    ///
    /// # Errors
    ///
    /// An out-of-grid coordinate is a state error: the game transitions to
    /// Ended and `BoardError::InvalidCoordinate` is returned.
    pub fn queue_move_coords(&mut self, from: (u8, u8), to: (u8, u8), capture: bool) -> Result<()> {
        match MoveRequest::new(from, to, capture) {
            Ok(request) => {
                self.queue_move(request);
                Ok(())
            }
            Err(e) => {
                self.sequencer.fault();
                Err(e.into())
            }
        }
    }

    /// Explicit reset back to Idle (external reset condition).
    pub fn reset(&mut self) {
        if let Some(mut executor) = self.executor.take() {
            executor.abort(&mut self.driver);
            self.calibrated = false;
        }
        self.pending = None;
        self.sequencer.reset();
    }

    /// Run one cooperative slice of the control loop.
    ///
    /// Scans debounced input, advances the game state machine, and then
    /// either starts the committed move or advances the in-flight one by a
    /// single step unit. An End press always wins within the cycle: the
    /// in-flight move is aborted before any further motion.
    pub fn tick(&mut self, levels: &ButtonLevels, now: Millis) -> Result<TickOutcome> {
        let event = self.input.scan(levels, now);
        let intent = event.and_then(|e| self.sequencer.handle_event(e));

        // End wins over everything else pending in this cycle.
        if self.sequencer.stop_requested() {
            if let Some(mut executor) = self.executor.take() {
                executor.abort(&mut self.driver);
                // Alignment is no longer trustworthy; only homing recovers it.
                self.calibrated = false;
                self.pending = None;
                return Ok(TickOutcome::Aborted);
            }
            if intent == Some(GameIntent::Halt) {
                self.driver.set_magnet(false);
                return Ok(TickOutcome::Intent(GameIntent::Halt));
            }
        }

        if let Some(intent) = intent {
            if let GameIntent::BeginGame(_) = intent {
                // Fresh game, fresh capture bookkeeping.
                self.capture_zone.reset();
            }
            return Ok(TickOutcome::Intent(intent));
        }

        if self.executor.is_none()
            && self.sequencer.phase() == GamePhase::MoveConfirmed
            && self.calibrated
        {
            if let Some(request) = self.pending.take() {
                match motion::plan_piece_move(
                    &self.geometry,
                    &mut self.capture_zone,
                    &self.motion,
                    self.position,
                    request.from,
                    request.to,
                    request.capture,
                ) {
                    Ok(plan) => self.executor = Some(MotionExecutor::new(plan)),
                    Err(e) => {
                        self.sequencer.fault();
                        return Err(e);
                    }
                }
            }
        }

        if let Some(executor) = self.executor.as_mut() {
            return match executor.step_once(&mut self.driver, &mut self.position) {
                Ok(StepStatus::InProgress) => Ok(TickOutcome::Moving),
                Ok(StepStatus::Done) => {
                    self.executor = None;
                    self.sequencer.move_complete();
                    Ok(TickOutcome::MoveComplete)
                }
                Err(e) => {
                    // Fatal to the current game: halt and require external
                    // reset. The executor already applied the magnet policy.
                    self.executor = None;
                    self.sequencer.fault();
                    self.calibrated = false;
                    Err(e)
                }
            };
        }

        Ok(TickOutcome::Quiet)
    }
}
