//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, letters_or_dash};
use crate::commands::{CheckResult, EvaluateResult, WordSetSummary};
use colored::Colorize;

/// Print the result of evaluating a guess
pub fn print_evaluation(outcome: &EvaluateResult) {
    let result = &outcome.result;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        result.guess().bright_white().bold(),
        outcome.answer.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}   {}", colored_tiles(result), result.to_emoji());
    println!("\n  Correct:    {}", result.correct_pattern().green().bold());
    println!(
        "  Misplaced:  {}",
        letters_or_dash(&result.misplaced_letters()).yellow()
    );
    println!(
        "  Absent:     {}",
        letters_or_dash(&result.absent_letters()).bright_black()
    );

    if !outcome.guess_known {
        println!("\n  {} guess is not in the word list", "note:".yellow());
    }
    if !outcome.answer_known {
        println!("  {} answer is not in the word list", "note:".yellow());
    }

    println!();
    if result.is_win() {
        println!("{}", "✅ Solved!".green().bold());
    } else {
        println!("{}", "❌ Not yet".red().bold());
    }
}

/// Print the result of checking a word
pub fn print_check(result: &CheckResult) {
    match &result.validity {
        Ok(()) if result.known => println!(
            "{} {} is a valid {}-letter word in the list",
            "✓".green().bold(),
            result.word.bright_white().bold(),
            result.length
        ),
        Ok(()) => println!(
            "{} {} is a valid {}-letter word but not in the list",
            "~".yellow().bold(),
            result.word.bright_white().bold(),
            result.length
        ),
        Err(err) => println!(
            "{} {}: {err}",
            "✗".red().bold(),
            result.word.bright_white().bold()
        ),
    }
}

/// Print randomly picked answers
pub fn print_picks(picks: &[String]) {
    for word in picks {
        println!("{}", word.bright_yellow().bold());
    }
}

/// Print a word set summary
pub fn print_summary(summary: &WordSetSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Contents:".bright_cyan().bold());
    println!("   Word length:  {}", summary.length);
    println!(
        "   Words:        {}",
        summary.total_words.to_string().bright_yellow().bold()
    );

    if summary.letter_frequency.is_empty() {
        return;
    }

    println!("\n📈 {}", "Words containing each letter:".bright_cyan().bold());
    let total = summary.total_words as f64;
    for &(letter, count) in summary.letter_frequency.iter().take(10) {
        let pct = (count as f64 / total) * 100.0;
        let bar = create_progress_bar(count as f64, total, 40);
        println!("   {letter}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
