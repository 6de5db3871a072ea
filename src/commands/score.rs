//! Guess scoring command
//!
//! Evaluates an arbitrary guess against a chosen target.

use crate::core::{Evaluation, Word, WordError};
use crate::wordlists::Dictionary;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub evaluation: Evaluation,
    /// Whether a game would have accepted the guess
    pub in_dictionary: bool,
}

/// Score `guess` against `target`
///
/// The dictionary is only consulted to report whether the guess would be
/// accepted in a game; any well-formed pair of words can be scored.
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess(
    guess: &str,
    target: &str,
    dictionary: &Dictionary,
) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let evaluation = Evaluation::calculate(&guess, &target);

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        in_dictionary: dictionary.contains_word(&guess),
        evaluation,
    })
}
