//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and deterministic.

mod evaluation;
mod keyboard;
mod letter;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use letter::{KeyState, LetterState, Tile};
pub use word::{WORD_LENGTH, Word, WordError};
