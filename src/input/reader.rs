//! Debounced input reader.

use crate::config::units::Millis;
use crate::config::InputConfig;

/// The logical buttons, in priority order.
///
/// When several buttons qualify in the same poll cycle, the one declared
/// first wins and the others are re-evaluated on the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Start a game.
    Start,
    /// End the game. Doubles as the motion abort request.
    End,
    /// Confirm the player's move.
    MoveConfirm,
    /// Select easy difficulty.
    Easy,
    /// Select hard difficulty.
    Hard,
}

impl ButtonId {
    /// All buttons, highest priority first.
    pub const ALL: [ButtonId; 5] = [
        ButtonId::Start,
        ButtonId::End,
        ButtonId::MoveConfirm,
        ButtonId::Easy,
        ButtonId::Hard,
    ];

    const fn index(self) -> usize {
        match self {
            ButtonId::Start => 0,
            ButtonId::End => 1,
            ButtonId::MoveConfirm => 2,
            ButtonId::Easy => 3,
            ButtonId::Hard => 4,
        }
    }
}

/// A debounced button press event.
///
/// Transient: produced at most once per qualifying transition and not
/// retained past the cycle that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Start button accepted.
    Start,
    /// End button accepted.
    End,
    /// Move-confirm button accepted.
    MoveConfirm,
    /// Easy button accepted.
    Easy,
    /// Hard button accepted.
    Hard,
}

impl From<ButtonId> for ButtonEvent {
    fn from(id: ButtonId) -> Self {
        match id {
            ButtonId::Start => ButtonEvent::Start,
            ButtonId::End => ButtonEvent::End,
            ButtonId::MoveConfirm => ButtonEvent::MoveConfirm,
            ButtonId::Easy => ButtonEvent::Easy,
            ButtonId::Hard => ButtonEvent::Hard,
        }
    }
}

/// Raw levels of every button line for one poll cycle (true = pressed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonLevels {
    /// Start button line.
    pub start: bool,
    /// End button line.
    pub end: bool,
    /// Move-confirm button line.
    pub move_confirm: bool,
    /// Easy button line.
    pub easy: bool,
    /// Hard button line.
    pub hard: bool,
}

impl ButtonLevels {
    /// Level of one button line.
    pub fn level(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::Start => self.start,
            ButtonId::End => self.end,
            ButtonId::MoveConfirm => self.move_confirm,
            ButtonId::Easy => self.easy,
            ButtonId::Hard => self.hard,
        }
    }
}

/// Debounced input reader with an independent timer per button.
///
/// An event fires only when the raw level reads pressed and at least the
/// debounce window has elapsed since that button's last accepted press.
/// Bounces inside the window are silently dropped.
#[derive(Debug, Clone)]
pub struct InputReader {
    debounce_ms: u32,
    last_accepted: [Option<Millis>; 5],
}

impl InputReader {
    /// Create a reader from input configuration.
    pub fn new(config: &InputConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            last_accepted: [None; 5],
        }
    }

    /// Poll one button line.
    ///
    /// Returns an event iff the level reads pressed and the button's
    /// debounce window has elapsed (a never-pressed button qualifies
    /// immediately). The per-button timestamp is updated only when an event
    /// is returned, so deferred buttons are not double-counted.
    pub fn poll(&mut self, button: ButtonId, level: bool, now: Millis) -> Option<ButtonEvent> {
        if !level {
            return None;
        }

        let slot = &mut self.last_accepted[button.index()];
        match *slot {
            Some(last) if now.since(last) < self.debounce_ms => None,
            _ => {
                *slot = Some(now);
                Some(button.into())
            }
        }
    }

    /// Evaluate all button lines for one poll cycle.
    ///
    /// Returns the highest-priority qualifying event; the remaining lines
    /// keep their timers untouched and re-qualify on the next cycle while
    /// still held.
    pub fn scan(&mut self, levels: &ButtonLevels, now: Millis) -> Option<ButtonEvent> {
        for button in ButtonId::ALL {
            if let Some(event) = self.poll(button, levels.level(button), now) {
                return Some(event);
            }
        }
        None
    }
}
