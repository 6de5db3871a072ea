//! Per-letter classifications
//!
//! `LetterState` is what a board tile shows; `KeyState` is what a keyboard
//! key shows. Keys are ranked so the aggregator can take a maximum.

/// Classification of a single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// Nothing evaluated at this position yet
    #[default]
    Empty,
    /// Letter does not occur in the target (or every occurrence is taken)
    Absent,
    /// Letter occurs in the target at another, unclaimed position
    Present,
    /// Letter is in the right position
    Correct,
}

/// Best classification seen for a keyboard letter
///
/// Variant order is the rank: `Unused < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyState {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<LetterState> for KeyState {
    fn from(state: LetterState) -> Self {
        match state {
            LetterState::Empty => Self::Unused,
            LetterState::Absent => Self::Absent,
            LetterState::Present => Self::Present,
            LetterState::Correct => Self::Correct,
        }
    }
}

/// A board tile: one letter and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    /// Lowercase ASCII letter, or `None` for a blank tile
    pub letter: Option<u8>,
    pub state: LetterState,
}

impl Tile {
    /// A blank, unevaluated tile
    pub const BLANK: Self = Self {
        letter: None,
        state: LetterState::Empty,
    };

    #[must_use]
    pub const fn new(letter: u8, state: LetterState) -> Self {
        Self {
            letter: Some(letter),
            state,
        }
    }

    /// Uppercase display character, or a space for a blank tile
    #[must_use]
    pub fn display_char(self) -> char {
        self.letter
            .map_or(' ', |letter| char::from(letter.to_ascii_uppercase()))
    }
}
