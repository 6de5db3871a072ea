//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, GameStatus, GuessError, Statistics};
use crate::output::formatters::{colored_row, keyboard_lines};
use crate::output::{celebration_message, statistics_lines};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// What a line of input asked for
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(line: &str) -> Command {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        other => Command::Guess(other.to_string()),
    }
}

/// Run the simple interactive CLI mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, O>(
    session: &mut GameSession<'_, R>,
    stats: &mut Statistics,
    mut input: I,
    output: &mut O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════╗")?;
    writeln!(output, "║            Wordle - Simple Mode          ║")?;
    writeln!(output, "╚══════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the {WORD_LENGTH}-letter word in {} tries.",
        session.max_attempts()
    )?;
    writeln!(output, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    loop {
        let prompt = format!("Guess {}/{}", session.attempt() + 1, session.max_attempts());
        let Some(line) = read_line(&mut input, output, &prompt)? else {
            return Ok(());
        };

        let word = match parse_command(&line) {
            Command::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::NewGame => {
                session.new_game();
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            Command::Guess(word) => word,
        };

        if word.chars().count() > WORD_LENGTH {
            writeln!(output, "{}", "❌ Too many letters".red())?;
            continue;
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            writeln!(output, "{}", "❌ Letters A-Z only".red())?;
            continue;
        }

        while !session.buffer().is_empty() {
            session.backspace();
        }
        for letter in word.chars() {
            session.append_letter(letter);
        }

        match session.submit_guess() {
            Ok(status) => {
                write_board(session, output)?;
                if status.is_over() {
                    stats.record(status, session.attempt());
                    write_outcome(session, stats, output)?;
                    if !play_again(&mut input, output)? {
                        writeln!(output, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                    session.new_game();
                    writeln!(output, "\n🔄 New game started!\n")?;
                }
            }
            Err(e @ (GuessError::IncompleteGuess | GuessError::NotInDictionary { .. })) => {
                debug!(error = %e, "Guess rejected");
                writeln!(output, "{}", format!("❌ {e}").red())?;
            }
            Err(GuessError::GameOver) => {
                session.new_game();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
        }
    }
}

fn write_board<R, O: Write>(session: &GameSession<'_, R>, output: &mut O) -> Result<()> {
    writeln!(output)?;
    for evaluation in session.history() {
        writeln!(output, "  {}", colored_row(&evaluation.tiles()))?;
    }
    writeln!(output)?;
    for line in keyboard_lines(&session.keyboard()) {
        writeln!(output, "  {line}")?;
    }
    writeln!(output)?;
    Ok(())
}

fn write_outcome<R, O: Write>(
    session: &GameSession<'_, R>,
    stats: &Statistics,
    output: &mut O,
) -> Result<()> {
    writeln!(output, "{}", "═".repeat(50).bright_cyan())?;
    match session.status() {
        GameStatus::Won => {
            writeln!(
                output,
                "  {}",
                celebration_message(session.attempt()).bright_green().bold()
            )?;
            writeln!(
                output,
                "  Solved in {} {}",
                session.attempt().to_string().bright_cyan().bold(),
                if session.attempt() == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameStatus::Lost | GameStatus::InProgress => {
            writeln!(
                output,
                "  {} The word was {}",
                "Game over.".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            )?;
        }
    }
    writeln!(output, "{}", "═".repeat(50).bright_cyan())?;

    writeln!(output, "\n{}\n", session.share_text())?;
    for line in statistics_lines(stats) {
        writeln!(output, "  {line}")?;
    }
    writeln!(output)?;
    Ok(())
}

fn play_again<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> Result<bool> {
    let answer = read_line(input, output, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["slate", "irate", "audio"]),
        )
        .unwrap()
    }

    fn play(dictionary: &Dictionary, max_attempts: usize, script: &str) -> (String, Statistics) {
        colored::control::set_override(false);
        let mut session = GameSession::with_target(
            dictionary,
            max_attempts,
            StdRng::seed_from_u64(5),
            Word::new("crane").unwrap(),
        );
        let mut stats = Statistics::new(max_attempts);
        let mut output = Vec::new();

        run_simple(&mut session, &mut stats, script.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn winning_game_reports_and_records() {
        let dictionary = dictionary();
        let (output, stats) = play(&dictionary, 6, "slate\ncrane\nno\n");

        assert!(output.contains("Solved in 2 guesses"));
        assert!(output.contains("Wordle 2/6"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn losing_game_reveals_target() {
        let dictionary = dictionary();
        let (output, stats) = play(&dictionary, 2, "slate\nirate\nn\n");

        assert!(output.contains("The word was CRANE"));
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn rejected_guesses_are_reported_without_using_attempts() {
        let dictionary = dictionary();
        let (output, stats) = play(&dictionary, 6, "sla\nzzzzz\ncranes\ncrane\nno\n");

        assert!(output.contains("Not enough letters"));
        assert!(output.contains("Not in word list: ZZZZZ"));
        assert!(output.contains("Too many letters"));
        assert!(output.contains("Solved in 1 guess"));
        assert_eq!(stats.guess_distribution[0], 1);
    }

    #[test]
    fn non_letters_are_rejected_before_typing() {
        let dictionary = dictionary();
        let (output, stats) = play(&dictionary, 6, "sl4te\ncran!\ncrane\nno\n");

        assert_eq!(output.matches("Letters A-Z only").count(), 2);
        assert!(!output.contains("Not enough letters"));
        assert!(output.contains("Solved in 1 guess"));
        assert_eq!(stats.guess_distribution[0], 1);
    }

    #[test]
    fn play_again_starts_a_new_game() {
        let dictionary = dictionary();
        // Only one answer, so the next game has the same target
        let (output, stats) = play(&dictionary, 6, "crane\ny\ncrane\nno\n");

        assert!(output.contains("New game started"));
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn quit_and_end_of_input_stop_cleanly() {
        let dictionary = dictionary();
        let (output, stats) = play(&dictionary, 6, "slate\nquit\n");
        assert!(output.contains("Thanks for playing"));
        assert_eq!(stats.total_games, 0);

        let (_, stats) = play(&dictionary, 6, "slate\n");
        assert_eq!(stats.total_games, 0);
    }
}
