//! One round of play
//!
//! A session owns the target, the evaluated guesses and the letters typed so
//! far. Front ends drive it one input event at a time and render from its
//! accessors.

use crate::core::{Evaluation, KeyboardState, Tile, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Default number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Target-picking rng: reproducible with a seed, OS-seeded otherwise
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("won")]
    Won,
    #[display("lost")]
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Rejected submission. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Fewer than 5 letters typed
    #[display("Not enough letters")]
    IncompleteGuess,
    /// Well-formed word the dictionary does not know
    #[display("Not in word list: {}", word.to_uppercase())]
    NotInDictionary {
        #[error(not(source))]
        word: String,
    },
    /// The session already ended; start a new game first
    #[display("The game is over, start a new game")]
    GameOver,
}

/// Mutable state of one round
#[derive(Debug)]
pub struct GameSession<'a, R = StdRng> {
    dictionary: &'a Dictionary,
    rng: R,
    max_attempts: usize,
    target: Word,
    history: Vec<Evaluation>,
    buffer: String,
    status: GameStatus,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Start a session with a target drawn from `dictionary` using `rng`
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    pub fn new(dictionary: &'a Dictionary, max_attempts: usize, mut rng: R) -> Self {
        let target = dictionary.pick_random(&mut rng).clone();
        Self::with_target(dictionary, max_attempts, rng, target)
    }

    /// Start a session with a known target; later `new_game` calls still draw from `rng`
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    pub fn with_target(dictionary: &'a Dictionary, max_attempts: usize, rng: R, target: Word) -> Self {
        assert!(max_attempts > 0, "a game needs at least one attempt");
        debug!(max_attempts, "Session created");

        Self {
            dictionary,
            rng,
            max_attempts,
            target,
            history: Vec::with_capacity(max_attempts),
            buffer: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
        }
    }

    /// Draw a fresh target and clear everything else, whatever the current status
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.target = self.dictionary.pick_random(&mut self.rng).clone();
        self.history.clear();
        self.buffer.clear();
        self.status = GameStatus::InProgress;
        info!("New game started");
    }

    /// Type a letter; ignored when the row is full, the input is not a letter
    /// or the game is over
    pub fn append_letter(&mut self, letter: char) {
        if self.status.is_over() || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.buffer.len() < WORD_LENGTH {
            self.buffer.push(letter.to_ascii_lowercase());
        }
    }

    /// Remove the last typed letter, if any
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Submit the typed letters as a guess
    ///
    /// On success the guess is evaluated and recorded, the typed letters are
    /// cleared and the new status is returned: `Won` if the guess is the
    /// target, `Lost` if that used the last attempt, otherwise `InProgress`.
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the session already ended
    /// - `GuessError::IncompleteGuess` if fewer than 5 letters are typed
    /// - `GuessError::NotInDictionary` if the word is not accepted
    ///
    /// Errors keep the typed letters so the player can correct them.
    #[instrument(skip(self), fields(attempt = self.history.len() + 1))]
    pub fn submit_guess(&mut self) -> Result<GameStatus, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.buffer.len() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess);
        }

        // The buffer only ever holds ASCII letters, so length is the only way this fails
        let guess =
            Word::new(self.buffer.as_str()).map_err(|_| GuessError::IncompleteGuess)?;
        if !self.dictionary.contains_word(&guess) {
            debug!(guess = %guess, "Rejected unknown word");
            return Err(GuessError::NotInDictionary {
                word: guess.text().to_string(),
            });
        }

        let evaluation = Evaluation::calculate(&guess, &self.target);
        let solved = evaluation.is_solved();
        debug!(guess = %guess, feedback = %evaluation.to_emoji(), "Guess evaluated");

        self.history.push(evaluation);
        self.buffer.clear();
        self.status = if solved {
            GameStatus::Won
        } else if self.history.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if self.status.is_over() {
            info!(status = %self.status, attempts = self.history.len(), "Game finished");
        }
        Ok(self.status)
    }
}

impl<R> GameSession<'_, R> {
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word. Front ends should only show it once the game is over.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Evaluated guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    /// Letters typed for the current row
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of accepted guesses so far (the 0-based index of the current row)
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Keyboard hints derived from the history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_history(&self.history)
    }

    /// The full board: evaluated rows, the row being typed, then blank rows
    #[must_use]
    pub fn board_rows(&self) -> Vec<[Tile; WORD_LENGTH]> {
        let mut rows: Vec<[Tile; WORD_LENGTH]> =
            self.history.iter().map(Evaluation::tiles).collect();

        if rows.len() < self.max_attempts {
            let typed = self.buffer.as_bytes();
            rows.push(std::array::from_fn(|i| {
                typed.get(i).map_or(Tile::BLANK, |&letter| Tile {
                    letter: Some(letter),
                    ..Tile::BLANK
                })
            }));
        }

        rows.resize(self.max_attempts, [Tile::BLANK; WORD_LENGTH]);
        rows
    }

    /// Shareable summary like "Wordle 3/6" followed by one emoji row per guess
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = match self.status {
            GameStatus::Won => self.history.len().to_string(),
            GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
        };

        let mut text = format!("Wordle {score}/{}\n", self.max_attempts);
        for evaluation in &self.history {
            text.push('\n');
            text.push_str(&evaluation.to_emoji());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyState, LetterState};
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "slate", "irate"]),
            words_from_slice(&["audio", "pious", "lemon", "dumpy", "thick", "fjord"]),
        )
        .unwrap()
    }

    fn session<'a>(dictionary: &'a Dictionary, target: &str) -> GameSession<'a> {
        GameSession::with_target(
            dictionary,
            MAX_ATTEMPTS,
            StdRng::seed_from_u64(3),
            Word::new(target).unwrap(),
        )
    }

    fn type_word<R: Rng>(session: &mut GameSession<'_, R>, word: &str) {
        for letter in word.chars() {
            session.append_letter(letter);
        }
    }

    fn guess<R: Rng>(session: &mut GameSession<'_, R>, word: &str) -> Result<GameStatus, GuessError> {
        type_word(session, word);
        session.submit_guess()
    }

    #[test]
    fn new_session_draws_target_from_answers() {
        let dictionary = dictionary();
        let session = GameSession::new(&dictionary, MAX_ATTEMPTS, StdRng::seed_from_u64(9));

        assert!(dictionary.answers().contains(session.target()));
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt(), 0);
        assert!(session.history().is_empty());
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn same_seed_same_target() {
        let dictionary = dictionary();
        let a = GameSession::new(&dictionary, MAX_ATTEMPTS, StdRng::seed_from_u64(11));
        let b = GameSession::new(&dictionary, MAX_ATTEMPTS, StdRng::seed_from_u64(11));
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn append_letter_caps_at_word_length() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "SLATES");
        assert_eq!(session.buffer(), "slate");
    }

    #[test]
    fn append_letter_ignores_non_letters() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "a1 b!");
        assert_eq!(session.buffer(), "ab");
    }

    #[test]
    fn backspace_removes_last_letter_and_tolerates_empty() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        session.backspace();
        assert_eq!(session.buffer(), "");

        type_word(&mut session, "sla");
        session.backspace();
        assert_eq!(session.buffer(), "sl");
    }

    #[test]
    fn incomplete_guess_leaves_state_unchanged() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert_eq!(guess(&mut session, "sla"), Err(GuessError::IncompleteGuess));
        assert_eq!(session.buffer(), "sla");
        assert_eq!(session.attempt(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_word_leaves_state_unchanged() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert_eq!(
            guess(&mut session, "zzzzz"),
            Err(GuessError::NotInDictionary {
                word: "zzzzz".to_string()
            })
        );
        assert_eq!(session.buffer(), "zzzzz");
        assert_eq!(session.attempt(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn accepted_guess_is_recorded_and_buffer_cleared() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert_eq!(guess(&mut session, "slate"), Ok(GameStatus::InProgress));
        assert_eq!(session.attempt(), 1);
        assert_eq!(session.buffer(), "");
        assert_eq!(session.history()[0].guess().text(), "slate");
    }

    #[test]
    fn guessing_target_wins_immediately() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert_eq!(guess(&mut session, "slate"), Ok(GameStatus::InProgress));
        assert_eq!(guess(&mut session, "CRANE"), Ok(GameStatus::Won));
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.attempt(), 2);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        for _ in 0..MAX_ATTEMPTS - 1 {
            guess(&mut session, "audio").unwrap();
        }
        assert_eq!(guess(&mut session, "crane"), Ok(GameStatus::Won));
    }

    #[test]
    fn six_misses_lose_and_seventh_is_rejected() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        for word in ["slate", "irate", "audio", "pious", "lemon"] {
            assert_eq!(guess(&mut session, word), Ok(GameStatus::InProgress));
        }
        assert_eq!(guess(&mut session, "dumpy"), Ok(GameStatus::Lost));
        assert_eq!(session.attempt(), MAX_ATTEMPTS);

        // Letters are not even accepted once the game is over
        type_word(&mut session, "thick");
        assert_eq!(session.buffer(), "");
        assert_eq!(session.submit_guess(), Err(GuessError::GameOver));
        assert_eq!(session.attempt(), MAX_ATTEMPTS);
    }

    #[test]
    fn winning_guess_rejects_further_submissions() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        guess(&mut session, "crane").unwrap();
        assert_eq!(session.submit_guess(), Err(GuessError::GameOver));
        assert_eq!(session.attempt(), 1);
    }

    #[test]
    fn new_game_resets_from_any_state() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        guess(&mut session, "crane").unwrap();
        type_word(&mut session, "ab");
        session.new_game();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt(), 0);
        assert!(session.history().is_empty());
        assert!(session.buffer().is_empty());
        assert!(dictionary.answers().contains(session.target()));
    }

    #[test]
    fn custom_attempt_limit() {
        let dictionary = dictionary();
        let mut session = GameSession::with_target(
            &dictionary,
            2,
            StdRng::seed_from_u64(0),
            Word::new("crane").unwrap(),
        );

        guess(&mut session, "slate").unwrap();
        assert_eq!(guess(&mut session, "irate"), Ok(GameStatus::Lost));
    }

    #[test]
    #[should_panic(expected = "at least one attempt")]
    fn zero_attempts_panics() {
        let dictionary = dictionary();
        let _ = GameSession::new(&dictionary, 0, StdRng::seed_from_u64(0));
    }

    #[test]
    fn keyboard_reflects_history() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        guess(&mut session, "slate").unwrap();
        guess(&mut session, "irate").unwrap();
        let keyboard = session.keyboard();

        assert_eq!(keyboard.get(b'a'), KeyState::Correct);
        assert_eq!(keyboard.get(b'r'), KeyState::Correct);
        assert_eq!(keyboard.get(b's'), KeyState::Absent);
        assert_eq!(keyboard.get(b'q'), KeyState::Unused);
    }

    #[test]
    fn board_rows_show_history_typing_and_blanks() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        guess(&mut session, "slate").unwrap();
        type_word(&mut session, "cr");
        let rows = session.board_rows();

        assert_eq!(rows.len(), MAX_ATTEMPTS);
        assert_eq!(rows[0][2], Tile::new(b'a', LetterState::Correct));
        assert_eq!(rows[1][0], Tile {
            letter: Some(b'c'),
            state: LetterState::Empty
        });
        assert_eq!(rows[1][2], Tile::BLANK);
        assert!(rows[2..].iter().flatten().all(|&tile| tile == Tile::BLANK));
    }

    #[test]
    fn board_rows_after_loss_has_no_typing_row() {
        let dictionary = dictionary();
        let mut session = GameSession::with_target(
            &dictionary,
            1,
            StdRng::seed_from_u64(0),
            Word::new("crane").unwrap(),
        );

        guess(&mut session, "slate").unwrap();
        let rows = session.board_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], Tile::new(b's', LetterState::Absent));
    }

    #[test]
    fn share_text_scores_wins_and_losses() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        guess(&mut session, "slate").unwrap();
        guess(&mut session, "crane").unwrap();
        assert_eq!(session.share_text(), "Wordle 2/6\n\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩");

        let mut lost = GameSession::with_target(
            &dictionary,
            1,
            StdRng::seed_from_u64(0),
            Word::new("crane").unwrap(),
        );
        guess(&mut lost, "slate").unwrap();
        assert!(lost.share_text().starts_with("Wordle X/1"));
    }

    #[test]
    fn guess_error_messages() {
        assert_eq!(GuessError::IncompleteGuess.to_string(), "Not enough letters");
        assert_eq!(
            GuessError::NotInDictionary {
                word: "zzzzz".to_string()
            }
            .to_string(),
            "Not in word list: ZZZZZ"
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let dictionary = dictionary();
        let first = GameSession::new(&dictionary, MAX_ATTEMPTS, rng_from_seed(Some(42)));
        let second = GameSession::new(&dictionary, MAX_ATTEMPTS, rng_from_seed(Some(42)));
        assert_eq!(first.target(), second.target());
    }
}
