//! Wordle
//!
//! A terminal Wordle game: duplicate-aware guess scoring, keyboard hints and
//! a game session state machine behind a TUI and a line-based mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterState, evaluate};
//!
//! // Score a guess against the hidden word
//! let evaluation = evaluate("speed", "erase").unwrap();
//!
//! assert_eq!(evaluation.states()[0], LetterState::Present);
//! assert_eq!(evaluation.states()[1], LetterState::Absent);
//! assert_eq!(evaluation.to_emoji(), "🟨⬛🟨🟨⬛");
//! ```

// Core domain types
pub mod core;

// Session state machine and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Configuration file and CLI overrides
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
