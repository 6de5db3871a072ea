//! Formatting utilities for terminal output

use crate::core::{KEYBOARD_ROWS, KeyState, KeyboardState, LetterState, Tile};
use colored::{ColoredString, Colorize};

/// Format one tile as a colored block like " A "
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.display_char());
    match tile.state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Empty => text.bold(),
    }
}

/// Format a row of tiles separated by single spaces
#[must_use]
pub fn colored_row(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|&tile| colored_tile(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the QWERTY keyboard, one line per row, letters colored by state
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| {
                    let key = char::from(letter.to_ascii_uppercase()).to_string();
                    match keyboard.get(letter) {
                        KeyState::Correct => key.black().on_green().to_string(),
                        KeyState::Present => key.black().on_yellow().to_string(),
                        KeyState::Absent => key.bright_black().to_string(),
                        KeyState::Unused => key.bold().to_string(),
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn colored_tile_contains_uppercase_letter() {
        colored::control::set_override(false);
        let tile = Tile::new(b'a', LetterState::Correct);
        assert_eq!(colored_tile(tile).to_string(), " A ");
        assert_eq!(colored_tile(Tile::BLANK).to_string(), "   ");
    }

    #[test]
    fn colored_row_keeps_guess_order() {
        colored::control::set_override(false);
        let tiles = evaluate("crane", "slate").unwrap().tiles();
        assert_eq!(colored_row(&tiles), " C   R   A   N   E ");
    }

    #[test]
    fn keyboard_lines_follow_qwerty_rows() {
        colored::control::set_override(false);
        let lines = keyboard_lines(&KeyboardState::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Q W E R T Y U I O P");
        assert_eq!(lines[1], " A S D F G H J K L");
        assert_eq!(lines[2], "  Z X C V B N M");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
