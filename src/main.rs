//! Wordle Assistant - CLI
//!
//! Frequency-ranked suggestions with exact feedback filtering, in TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_assist::{
    commands::{
        Selection, evaluate_words, print_test_all_statistics, run_simple, run_test_all,
        select_solutions, solve_word, suggest_next,
    },
    core::Word,
    output::{print_evaluation, print_solve_result, print_suggest_result},
    solver::{DEFAULT_MAX_ROUNDS, DEFAULT_SUGGESTIONS, Solver, SolverConfig, Strategy},
    wordlists::{
        DICTIONARY, GuessPool, SOLUTIONS, Vocabulary,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: letter-frequency suggestions and exact feedback filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words that may be guessed: 'all' (default) or 'solutions' only (cheat mode)
    #[arg(short, long, global = true, value_enum, default_value_t = GuessPool::All)]
    pool: GuessPool,

    /// Solution list file (comma-separated words) instead of the embedded one
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Dictionary list file (comma-separated words) instead of the embedded one
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Number of suggestions shown each round
    #[arg(short, long, global = true, default_value_t = DEFAULT_SUGGESTIONS)]
    top: usize,

    /// Rounds allowed before a game is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive assistant without TUI)
    Simple,

    /// Play a known solution automatically
    Solve {
        /// The solution word
        word: String,

        /// Strategy: top (default) or no-doubles
        #[arg(short, long, default_value = "top")]
        strategy: String,

        /// Show candidate counts for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest the next guess after the given rounds
    Suggest {
        /// Rounds played so far, as guess=outcome (e.g. spoon=g-gy-)
        rounds: Vec<String>,

        /// Show the constraints each round produced
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the feedback a guess gets against a solution
    Evaluate {
        guess: String,
        solution: String,
    },

    /// Play every solution with each strategy and compare
    TestAll {
        /// Strategies to compare (default: all named strategies)
        #[arg(short, long, num_args = 1..)]
        strategy: Vec<String>,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test a random sample of this many words
        #[arg(long)]
        sample: Option<usize>,
    },
}

/// Load the word lists selected on the command line
fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    if cli.solutions.is_none() && cli.dictionary.is_none() {
        return Vocabulary::embedded_with(cli.pool).context("Failed to build vocabulary");
    }

    let solutions = match &cli.solutions {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load solutions from {}", path.display()))?,
        None => words_from_slice(SOLUTIONS),
    };
    let dictionary = match &cli.dictionary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {}", path.display()))?,
        None => words_from_slice(DICTIONARY),
    };

    Vocabulary::new(solutions, dictionary, cli.pool).context("Failed to build vocabulary")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli)?;
    let config = SolverConfig {
        max_suggestions: cli.top.max(1),
        max_rounds: cli.rounds.max(1),
    };
    let solver = Solver::new(vocabulary.solutions(), vocabulary.guessable(), config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&solver, vocabulary.solutions()),
        Commands::Simple => run_simple(&solver),
        Commands::Solve {
            word,
            strategy,
            verbose,
        } => {
            let strategy = Strategy::from_name(&strategy);
            let result = solve_word(&solver, &strategy, &word)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Suggest { rounds, verbose } => {
            let result = suggest_next(&solver, &rounds)?;
            print_suggest_result(&result, verbose);
            Ok(())
        }
        Commands::Evaluate { guess, solution } => {
            let (guess, solution, outcome) = evaluate_words(&guess, &solution)?;
            print_evaluation(&guess, &solution, &outcome);
            Ok(())
        }
        Commands::TestAll {
            strategy,
            limit,
            sample,
        } => {
            run_test_all_command(&solver, vocabulary.solutions(), &strategy, limit, sample);
            Ok(())
        }
    }
}

fn run_test_all_command(
    solver: &Solver<'_>,
    solutions: &[Word],
    strategy_names: &[String],
    limit: Option<usize>,
    sample: Option<usize>,
) {
    let strategies: Vec<Strategy> = if strategy_names.is_empty() {
        Strategy::NAMES.iter().map(|name| Strategy::from_name(name)).collect()
    } else {
        strategy_names
            .iter()
            .map(|name| Strategy::from_name(name))
            .collect()
    };
    let selected = select_solutions(solutions, Selection { limit, sample });

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Assistant Strategy Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} solutions", selected.len());
    println!(
        "Strategies: {}",
        strategies
            .iter()
            .map(Strategy::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let stats = run_test_all(solver, &strategies, &selected);
    print_test_all_statistics(&stats);
}

fn run_play_command(solver: &Solver<'_>, solutions: &[Word]) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(solver, solutions);
    run_tui(app)
}
