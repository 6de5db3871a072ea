//! Dictionary of targets and accepted guesses

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Immutable word set queried by a game session
///
/// `answers` are the words a target can be drawn from; `allowed` is every
/// word accepted as a guess and always includes the answers.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

/// Error type for unusable dictionaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    NoAnswers,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Build a dictionary from target words and extra accepted guesses
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty, since no
    /// target could ever be drawn.
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());

        debug!(
            answers = answers.len(),
            allowed = allowed.len(),
            "Dictionary built"
        );
        Ok(Self { answers, allowed })
    }

    /// Build a dictionary where every word is both a target and a guess
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, DictionaryError> {
        Self::new(words, std::iter::empty())
    }

    /// Membership test; input is case-insensitive and invalid words are never members
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(vec![Word::new("crane").unwrap()]).unwrap();
    /// assert!(dictionary.contains("CRANE"));
    /// assert!(!dictionary.contains("slate"));
    /// assert!(!dictionary.contains("cranes"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.allowed.contains(&word))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// Pick a target uniformly at random from the answers
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["irate", "crane"]),
        )
        .unwrap()
    }

    #[test]
    fn answers_are_always_allowed() {
        let dictionary = small();
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("slate"));
        assert!(dictionary.contains("irate"));
        assert_eq!(dictionary.allowed_count(), 3);
    }

    #[test]
    fn contains_rejects_unknown_and_malformed() {
        let dictionary = small();
        assert!(!dictionary.contains("grate"));
        assert!(!dictionary.contains("cran"));
        assert!(!dictionary.contains("cr4ne"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn empty_answers_rejected() {
        assert_eq!(
            Dictionary::new(Vec::new(), words_from_slice(&["crane"])).unwrap_err(),
            DictionaryError::NoAnswers
        );
        assert!(Dictionary::from_words(Vec::new()).is_err());
    }

    #[test]
    fn pick_random_only_draws_answers() {
        let dictionary = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dictionary.pick_random(&mut rng);
            assert!(dictionary.answers().contains(word));
        }
    }

    #[test]
    fn pick_random_is_deterministic_for_a_seed() {
        let dictionary = small();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| dictionary.pick_random(&mut rng).text().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn pick_random_reaches_every_answer() {
        let dictionary = small();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: FxHashSet<&str> = (0..100)
            .map(|_| dictionary.pick_random(&mut rng).text())
            .collect();
        assert_eq!(seen.len(), 2);
    }
}
