//! Test all solutions - strategy comparison
//!
//! Plays every solution word (or a subset) with each strategy and compares how many
//! rounds they need.

use crate::core::Word;
use crate::output::formatters::{create_progress_bar, percentage};
use crate::solver::{GameResult, Solver, Strategy, play_known};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which solutions to play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Only the first `n` solutions
    pub limit: Option<usize>,
    /// A random sample of `n` solutions (applied after `limit`)
    pub sample: Option<usize>,
}

/// Statistics for one strategy
#[derive(Debug)]
pub struct StrategyStatistics {
    pub strategy: String,
    pub total_words: usize,
    pub won: usize,
    /// Mean rounds over every game, won or lost
    pub average_rounds: f64,
    /// Mean rounds over won games only
    pub average_winning_rounds: f64,
    /// Won games by round count
    pub distribution: FxHashMap<usize, usize>,
    /// Lost solutions, in solution order
    pub lost_words: Vec<String>,
    pub duration: Duration,
}

impl StrategyStatistics {
    /// Summarise one strategy's games
    #[must_use]
    pub fn from_results(strategy: &str, results: &[(&Word, GameResult)], duration: Duration) -> Self {
        let total_words = results.len();
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut lost_words = Vec::new();
        let mut total_rounds = 0;
        let mut winning_rounds = 0;

        for (solution, result) in results {
            total_rounds += result.rounds;
            if result.won {
                winning_rounds += result.rounds;
                *distribution.entry(result.rounds).or_insert(0) += 1;
            } else {
                lost_words.push(solution.text().to_string());
            }
        }

        let won = total_words - lost_words.len();
        let mean = |sum: usize, count: usize| {
            if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            }
        };

        Self {
            strategy: strategy.to_string(),
            total_words,
            won,
            average_rounds: mean(total_rounds, total_words),
            average_winning_rounds: mean(winning_rounds, won),
            distribution,
            lost_words,
            duration,
        }
    }

    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.won, self.total_words)
    }
}

/// Pick the solutions to play
#[must_use]
pub fn select_solutions<'a>(solutions: &'a [Word], selection: Selection) -> Vec<&'a Word> {
    let limited = &solutions[..selection.limit.unwrap_or(solutions.len()).min(solutions.len())];

    match selection.sample {
        Some(n) if n < limited.len() => {
            let mut indices = rand::seq::index::sample(&mut rand::rng(), limited.len(), n).into_vec();
            // Keep solution order so runs read the same way
            indices.sort_unstable();
            indices.into_iter().map(|i| &limited[i]).collect()
        }
        _ => limited.iter().collect(),
    }
}

/// Run every strategy against the selected solutions
///
/// Games are independent, so each strategy's games run in parallel.
pub fn run_test_all(
    solver: &Solver<'_>,
    strategies: &[Strategy],
    solutions: &[&Word],
) -> Vec<StrategyStatistics> {
    strategies
        .iter()
        .map(|strategy| {
            println!(
                "\n🎯 Strategy {}: testing {} words...",
                strategy.name().bright_yellow().bold(),
                solutions.len()
            );

            let pb = ProgressBar::new(solutions.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓▒░"),
            );
            pb.set_message(strategy.name().to_string());

            let start = Instant::now();
            let results: Vec<(&Word, GameResult)> = solutions
                .par_iter()
                .map(|&solution| {
                    let result = play_known(solver, strategy, solution);
                    pb.inc(1);
                    (solution, result)
                })
                .collect();
            pb.finish_with_message("Complete!");

            StrategyStatistics::from_results(strategy.name(), &results, start.elapsed())
        })
        .collect()
}

/// Print per-strategy statistics and a comparison table
pub fn print_test_all_statistics(stats: &[StrategyStatistics]) {
    for strategy in stats {
        print_strategy_statistics(strategy);
    }

    if stats.len() > 1 {
        println!("\n{}", "═".repeat(70));
        println!(" {} ", "Strategy Comparison".bright_cyan().bold());
        println!("{}", "═".repeat(70));
        for strategy in stats {
            println!(
                "  {:<12} {} rounds  {}",
                strategy.strategy,
                format!("{:.2}", strategy.average_rounds).bright_yellow().bold(),
                format!("({:.1}% won)", strategy.win_rate()).green()
            );
        }
    }
}

fn print_strategy_statistics(stats: &StrategyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Results: {} ", stats.strategy.bright_yellow().bold());
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Won:                 {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if !stats.lost_words.is_empty() {
        let lost = stats.lost_words.len();
        println!(
            "  Lost:                {} {}",
            lost,
            format!("({:.1}%)", percentage(lost, stats.total_words)).red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!("  Average when won:    {:.3}", stats.average_winning_rounds);
    println!("  Total time:          {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_rounds = stats.distribution.keys().copied().max().unwrap_or(0);
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for rounds in 1..=max_rounds {
        let count = stats.distribution.get(&rounds).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {rounds} rounds: {} {count:4} ({:5.1}%)",
            bar.green(),
            percentage(count, stats.won)
        );
    }

    if !stats.lost_words.is_empty() {
        println!("\n😰 {}", "Lost Words".yellow().bold());
        for word in stats.lost_words.iter().take(10) {
            println!("  {}", word.to_uppercase().yellow());
        }
        if stats.lost_words.len() > 10 {
            println!("  ... and {} more", stats.lost_words.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn select_with_limit() {
        let list = words(&["crane", "slate", "stood", "spoon"]);
        let selected = select_solutions(
            &list,
            Selection {
                limit: Some(2),
                sample: None,
            },
        );
        assert_eq!(selected, vec![&list[0], &list[1]]);

        let all = select_solutions(
            &list,
            Selection {
                limit: Some(99),
                sample: None,
            },
        );
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn sample_is_subset_in_order() {
        let list = words(&["crane", "slate", "stood", "spoon", "sooty", "shout"]);
        let selected = select_solutions(
            &list,
            Selection {
                limit: None,
                sample: Some(3),
            },
        );

        assert_eq!(selected.len(), 3);
        let positions: Vec<usize> = selected
            .iter()
            .map(|w| list.iter().position(|other| other == *w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn statistics_from_results() {
        let list = words(&["crane", "slate", "stood"]);
        let results = vec![
            (
                &list[0],
                GameResult {
                    rounds: 2,
                    guesses: Vec::new(),
                    won: true,
                },
            ),
            (
                &list[1],
                GameResult {
                    rounds: 4,
                    guesses: Vec::new(),
                    won: true,
                },
            ),
            (
                &list[2],
                GameResult {
                    rounds: 7,
                    guesses: Vec::new(),
                    won: false,
                },
            ),
        ];

        let stats = StrategyStatistics::from_results("top", &results, Duration::ZERO);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.lost_words, vec!["stood".to_string()]);
        assert!((stats.average_rounds - 13.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_winning_rounds - 3.0).abs() < 1e-9);
        assert_eq!(stats.distribution.get(&2), Some(&1));
        assert_eq!(stats.distribution.get(&4), Some(&1));
    }

    #[test]
    fn run_test_all_covers_every_strategy() {
        let list = words(&["crane", "slate", "stood", "spoon", "sooty"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let strategies = vec![Strategy::from_name("top"), Strategy::from_name("no-doubles")];
        let solutions: Vec<&Word> = list.iter().collect();

        let stats = run_test_all(&solver, &strategies, &solutions);
        assert_eq!(stats.len(), 2);
        for strategy in &stats {
            assert_eq!(strategy.total_words, 5);
            assert_eq!(strategy.won, 5);
        }
    }
}
