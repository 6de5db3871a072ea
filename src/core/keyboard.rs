//! Keyboard hint aggregation
//!
//! Folds every evaluated guess into the best classification seen per letter.

use super::evaluation::Evaluation;
use super::letter::KeyState;

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known state of every letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    keys: [KeyState; 26],
}

impl KeyboardState {
    /// Aggregate a guess history
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{evaluate, KeyState, KeyboardState};
    ///
    /// let history = [evaluate("crane", "slate").unwrap()];
    /// let keyboard = KeyboardState::from_history(&history);
    ///
    /// assert_eq!(keyboard.get(b'a'), KeyState::Correct);
    /// assert_eq!(keyboard.get(b'c'), KeyState::Absent);
    /// assert_eq!(keyboard.get(b'z'), KeyState::Unused);
    /// ```
    #[must_use]
    pub fn from_history(history: &[Evaluation]) -> Self {
        let mut keyboard = Self::default();
        for evaluation in history {
            keyboard.record(evaluation);
        }
        keyboard
    }

    /// Fold one more evaluation in, upgrading letters but never downgrading them
    pub fn record(&mut self, evaluation: &Evaluation) {
        for tile in evaluation.tiles() {
            let Some(index) = tile.letter.and_then(letter_index) else {
                continue;
            };
            let slot = &mut self.keys[index];
            *slot = (*slot).max(KeyState::from(tile.state));
        }
    }

    /// State of a letter; anything outside `a..=z` (either case) is `Unused`
    #[must_use]
    pub fn get(&self, letter: u8) -> KeyState {
        letter_index(letter.to_ascii_lowercase()).map_or(KeyState::Unused, |i| self.keys[i])
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(usize::from(letter - b'a'))
    } else {
        None
    }
}
