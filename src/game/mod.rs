//! Game orchestration
//!
//! Sessions validate and score guesses against a dictionary; statistics
//! summarize finished sessions.

mod session;
mod stats;

pub use session::{GameSession, GameStatus, GuessError, MAX_ATTEMPTS, rng_from_seed};
pub use stats::Statistics;
