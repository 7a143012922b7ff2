//! Game sequencing.
//!
//! Replaces the original firmware's `sequence`/`game_active`/
//! `difficulty_selected`/`stop_execution` globals with one owned state
//! machine and exhaustive-match transitions.

use crate::input::ButtonEvent;

/// Overall game phase. Exactly one instance, owned by [`GameSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// Powered on, waiting for Start.
    #[default]
    Idle,
    /// Start accepted, waiting for a difficulty selection.
    DifficultySelected,
    /// Game running, waiting for the player to confirm a move.
    Active,
    /// Move committed; motion is (or is about to be) in flight.
    MoveConfirmed,
    /// Game over. Leaves only via an explicit reset.
    Ended,
}

/// Game difficulty, set once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    /// Not yet selected.
    #[default]
    Unset,
    /// Easy opponent.
    Easy,
    /// Hard opponent.
    Hard,
}

/// Intent emitted by a transition, consumed by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameIntent {
    /// Difficulty chosen, the game begins.
    BeginGame(Difficulty),
    /// Commit the pending move for execution.
    CommitMove,
    /// Halt motion and release the magnet.
    Halt,
}

/// The game sequence state machine.
#[derive(Debug, Clone, Default)]
pub struct GameSequencer {
    phase: GamePhase,
    difficulty: Difficulty,
    stop_requested: bool,
}

impl GameSequencer {
    /// Create a sequencer in the Idle phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current game phase.
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Difficulty for the current game.
    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether an End press has requested a motion abort.
    ///
    /// The flag stays set until [`reset`](Self::reset) so an in-flight move
    /// cannot outlive the game it belongs to.
    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Consume one debounced button event.
    ///
    /// Events that are not valid in the current phase are ignored without
    /// error. End wins from any non-Idle phase.
    pub fn handle_event(&mut self, event: ButtonEvent) -> Option<GameIntent> {
        // End always wins over whatever else the cycle produced.
        if event == ButtonEvent::End && self.phase != GamePhase::Idle {
            self.phase = GamePhase::Ended;
            self.stop_requested = true;
            return Some(GameIntent::Halt);
        }

        match (self.phase, event) {
            (GamePhase::Idle, ButtonEvent::Start) => {
                self.phase = GamePhase::DifficultySelected;
                None
            }
            (GamePhase::DifficultySelected, ButtonEvent::Easy) => {
                self.begin_game(Difficulty::Easy)
            }
            (GamePhase::DifficultySelected, ButtonEvent::Hard) => {
                self.begin_game(Difficulty::Hard)
            }
            (GamePhase::Active, ButtonEvent::MoveConfirm) => {
                self.phase = GamePhase::MoveConfirmed;
                Some(GameIntent::CommitMove)
            }
            // Everything else is out of phase and dropped.
            _ => None,
        }
    }

    fn begin_game(&mut self, difficulty: Difficulty) -> Option<GameIntent> {
        self.phase = GamePhase::Active;
        self.difficulty = difficulty;
        Some(GameIntent::BeginGame(difficulty))
    }

    /// Signal from the motion planner that the committed move finished.
    ///
    /// Only meaningful in MoveConfirmed; ignored elsewhere (an aborted move
    /// never completes).
    pub fn move_complete(&mut self) {
        if self.phase == GamePhase::MoveConfirmed {
            self.phase = GamePhase::Active;
        }
    }

    /// Force the game over after a surfaced state error.
    pub fn fault(&mut self) {
        if self.phase != GamePhase::Idle {
            self.phase = GamePhase::Ended;
            self.stop_requested = true;
        }
    }

    /// Explicit reset back to Idle (power cycle or dedicated reset).
    ///
    /// Clears the difficulty and stop flag for the next game.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.difficulty = Difficulty::Unset;
        self.stop_requested = false;
    }
}
