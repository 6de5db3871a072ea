//! Word lists and the dictionary built from them
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
