//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::ScoreResult;
use crate::game::Statistics;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} {} {}",
        result.guess.to_uppercase().bright_white().bold(),
        "vs".bright_black(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.evaluation.tiles()));
    println!("  {}\n", result.evaluation.to_emoji());

    println!(
        "  Correct: {}  Present: {}",
        result.evaluation.count_correct().to_string().green().bold(),
        result.evaluation.count_present().to_string().yellow().bold()
    );

    if !result.in_dictionary {
        println!(
            "  {}",
            format!("Note: {} is not in the word list", result.guess.to_uppercase()).red()
        );
    }
}

/// Headline shown after a win, by number of guesses used
#[must_use]
pub const fn celebration_message(guess_count: usize) -> &'static str {
    match guess_count {
        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "🎉 NICE WORK! Five guesses! 🎉",
        6 => "😅 PHEW! Got it in six! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}

/// Statistics summary, one entry per line
#[must_use]
pub fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Played: {} | Win %: {:.0} | Streak: {} | Max streak: {}",
            stats.total_games,
            stats.win_rate(),
            stats.current_streak,
            stats.max_streak
        ),
        "Guess distribution:".to_string(),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        lines.push(format!("  {}: {bar} {count}", i + 1));
    }

    lines
}
