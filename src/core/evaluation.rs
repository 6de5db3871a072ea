//! Guess evaluation
//!
//! An evaluation is the per-letter feedback for one guess against the target:
//! - Correct: letter in the right position
//! - Present: letter elsewhere in the target, at a position no other tile claimed
//! - Absent: letter not in the target, or all of its occurrences already claimed

use super::letter::{LetterState, Tile};
use super::word::{WORD_LENGTH, Word, WordError};

/// Feedback for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    guess: Word,
    states: [LetterState; WORD_LENGTH],
}

impl Evaluation {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and consume that target position
    /// 2. Second pass: for every other position, claim the leftmost unconsumed target
    ///    position holding the same letter (Present), or mark it Absent
    ///
    /// Running the exact matches first keeps duplicate letters from over-counting.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, LetterState, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &target);
    ///
    /// assert_eq!(evaluation.states()[2], LetterState::Correct);
    /// assert_eq!(evaluation.states()[1], LetterState::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] with target[i] and mark both arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                states[i] = LetterState::Correct;
                consumed[i] = true;
            }
        }

        // Allow: Index needed to skip Correct positions and record Present
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if states[i] == LetterState::Correct {
                continue;
            }

            let letter = guess.char_at(i);
            if let Some(j) =
                (0..WORD_LENGTH).find(|&j| !consumed[j] && target.char_at(j) == letter)
            {
                states[i] = LetterState::Present;
                consumed[j] = true;
            }
        }

        Self {
            guess: guess.clone(),
            states,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Classifications in guess order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.states
    }

    /// `(letter, classification)` tiles in guess order
    #[must_use]
    pub fn tiles(&self) -> [Tile; WORD_LENGTH] {
        std::array::from_fn(|i| Tile::new(self.guess.char_at(i), self.states[i]))
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Convert the feedback to an emoji row like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states
            .iter()
            .map(|state| match state {
                LetterState::Correct => '🟩',
                LetterState::Present => '🟨',
                LetterState::Absent | LetterState::Empty => '⬛',
            })
            .collect()
    }
}

/// Evaluate two raw strings
///
/// # Errors
/// Returns `WordError::InvalidLength` if either word is not exactly 5 letters,
/// or another `WordError` if either contains something other than ASCII letters.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, WordError};
///
/// let evaluation = evaluate("ABCDE", "abcde").unwrap();
/// assert!(evaluation.is_solved());
///
/// assert_eq!(evaluate("abc", "abcde"), Err(WordError::InvalidLength(3)));
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<Evaluation, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Evaluation::calculate(&guess, &target))
}
