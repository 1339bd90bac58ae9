//! Display functions for command results

use super::formatters::outcome_tiles;
use crate::commands::{SolveResult, SuggestResult};
use crate::core::{Outcome, WORD_LENGTH, Word};
use crate::solver::Scored;
use colored::Colorize;

/// Render a numbered suggestion list
#[must_use]
pub fn format_suggestions(suggestions: &[Scored<'_>]) -> String {
    if suggestions.is_empty() {
        return "\n   (no suggestions)\n\n".to_string();
    }

    let mut text = String::from("\n📊 Suggestions:\n");
    for (i, entry) in suggestions.iter().enumerate() {
        text.push_str(&format!(
            "   {:>2}. {}  {}\n",
            i + 1,
            entry.word.text().to_uppercase().bright_white().bold(),
            format!("score {}", entry.score).bright_black()
        ));
    }
    text.push('\n');
    text
}

/// Print a numbered suggestion list
pub fn print_suggestions(suggestions: &[Scored<'_>]) {
    print!("{}", format_suggestions(suggestions));
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        match &step.outcome {
            Some(outcome) => println!(
                "\nRound {turn}: {} {}",
                outcome_tiles(&step.word, outcome),
                outcome.to_emoji()
            ),
            None => println!(
                "\nRound {turn}: {} (only candidate left)",
                step.word.text().to_uppercase().bright_green().bold()
            ),
        }

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print replayed rounds, their constraints and the next suggestions
pub fn print_suggest_result(result: &SuggestResult<'_>, verbose: bool) {
    for (i, (guess, outcome, constraints)) in result.rounds.iter().enumerate() {
        println!("Round {}: {}", i + 1, outcome_tiles(guess, outcome));
        if verbose {
            for predicate in constraints.predicates() {
                println!("    {}", predicate.to_string().bright_black());
            }
        }
    }

    println!(
        "\n{} candidates remaining",
        result.candidates.len().to_string().bright_cyan().bold()
    );
    if result.candidates.len() <= 10 {
        for candidate in &result.candidates {
            println!("  • {}", candidate.text().to_uppercase());
        }
    }

    if verbose && !result.candidates.is_empty() {
        println!("\nMost common letters among candidates:");
        for position in 0..WORD_LENGTH {
            if let Some((letter, count)) = result.candidate_letters.most_common_at(position) {
                let total = result.candidate_letters.position_total(position);
                println!(
                    "  {}: {} {}",
                    position + 1,
                    letter.to_ascii_uppercase().to_string().bright_white().bold(),
                    format!("({count}/{total})").bright_black()
                );
            }
        }
    }

    print_suggestions(&result.suggestions);
}

/// Print a single evaluation
pub fn print_evaluation(guess: &Word, solution: &Word, outcome: &Outcome) {
    println!(
        "{} vs {}: {}  {}  {}  ({} green, {} yellow)",
        guess.text().to_uppercase().bright_white().bold(),
        solution.text().to_uppercase().bright_white().bold(),
        outcome_tiles(guess, outcome),
        outcome.to_emoji(),
        outcome.to_string().bright_yellow(),
        outcome.count_greens(),
        outcome.count_yellows()
    );
}
