//! Game sequence state machine.
//!
//! Owns the overall game phase and difficulty, consuming debounced button
//! events and producing intents for the control loop.

mod sequencer;

pub use sequencer::{Difficulty, GameIntent, GamePhase, GameSequencer};
