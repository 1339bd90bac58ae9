//! Simple interactive CLI mode
//!
//! Text-based assistant without TUI: suggests guesses, reads the played word and its
//! feedback, and narrows the candidates.

use super::input::resolve_guess;
use crate::core::{Outcome, Word};
use crate::output::formatters::outcome_tiles;
use crate::output::format_suggestions;
use crate::solver::{Game, GameStatus, Scored, Solver};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Session commands accepted at any prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Quit,
    NewGame,
    Undo,
}

impl SessionCommand {
    /// Recognise a command word
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::NewGame),
            "undo" | "u" => Some(Self::Undo),
            _ => None,
        }
    }
}

/// What the session loop should do next
enum Step {
    Continue,
    Quit,
}

/// Line-based input and output for a session
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Show a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;

        Ok((read > 0).then(|| line.trim().to_string()))
    }
}

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(solver: &Solver<'_>) -> Result<()> {
    run_session(solver, io::stdin().lock(), io::stdout().lock())
}

/// Run the interactive session over any line reader and writer
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(solver: &Solver<'_>, input: R, output: W) -> Result<()> {
    let mut console = Console { input, output };
    let out = &mut console.output;

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle Assistant - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Each round I'll rank the remaining candidates by letter frequency.")?;
    writeln!(out, "Enter the word you played (or its number), then the feedback:\n")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for none (no more of this letter)")?;
    writeln!(out, "  - Or type 'win' if you got it right!\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n")?;

    let mut game = Game::new(solver);

    loop {
        // A round only starts on a game still in progress; a win from `play` goes
        // straight to the summary.
        let step = match game.status() {
            GameStatus::InProgress => {
                let suggestions = game.start_round(&[]);
                if game.status() == GameStatus::InProgress {
                    play_round(&mut console, &mut game, solver, &suggestions)?
                } else {
                    finish_game(&mut console, &mut game)?
                }
            }
            GameStatus::Won | GameStatus::Lost => finish_game(&mut console, &mut game)?,
        };

        if matches!(step, Step::Quit) {
            writeln!(console.output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

/// Show suggestions, then read one guess and its feedback
fn play_round<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game<'a>,
    solver: &Solver<'a>,
    suggestions: &[Scored<'a>],
) -> Result<Step> {
    let out = &mut console.output;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Round {}/{}: {} candidates remaining",
        game.round(),
        solver.config().max_rounds,
        game.pool().len()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    write!(out, "{}", format_suggestions(suggestions))?;

    let guess: Word = loop {
        let Some(input) = console.prompt("Word played (number or word)")? else {
            return Ok(Step::Quit);
        };
        if let Some(command) = SessionCommand::parse(&input) {
            return apply_command(&mut console.output, game, command);
        }
        match resolve_guess(&input, suggestions, solver) {
            Ok(word) => break word.clone(),
            Err(e) => writeln!(console.output, "❌ {e}\n")?,
        }
    };

    let outcome = loop {
        let Some(input) = console.prompt("Feedback (G/Y/-, 'win', or command)")? else {
            return Ok(Step::Quit);
        };
        if let Some(command) = SessionCommand::parse(&input) {
            return apply_command(&mut console.output, game, command);
        }
        if matches!(input.to_lowercase().as_str(), "win" | "correct" | "solved") {
            break Outcome::PERFECT;
        }
        match input.parse::<Outcome>() {
            Ok(outcome) => break outcome,
            Err(e) => writeln!(
                console.output,
                "❌ {e}. Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n"
            )?,
        }
    };

    writeln!(console.output, "   {}\n", outcome_tiles(&guess, &outcome))?;
    game.play(guess, outcome);
    Ok(Step::Continue)
}

/// Undo or restart in response to a command
///
/// The current round has already started, so after this the next `start_round` repeats
/// the right round.
fn apply_command<W: Write>(out: &mut W, game: &mut Game<'_>, command: SessionCommand) -> Result<Step> {
    match command {
        SessionCommand::Quit => return Ok(Step::Quit),
        SessionCommand::NewGame => {
            game.reset();
            writeln!(out, "\n🔄 New game started!\n")?;
        }
        SessionCommand::Undo => {
            if game.undo() {
                writeln!(out, "✓ Undone! Back to round {}\n", game.round() + 1)?;
            } else {
                // Nothing played yet: just restart round 1
                game.reset();
                writeln!(out, "Nothing to undo!\n")?;
            }
        }
    }
    Ok(Step::Continue)
}

/// Report a finished game and ask what to do next
fn finish_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game<'_>,
) -> Result<Step> {
    let result = game.result();
    let out = &mut console.output;

    if result.won {
        writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
        writeln!(
            out,
            "{}",
            "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        )?;
        writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

        if let Some(last) = result.guesses.last() {
            writeln!(
                out,
                "\n  Solution: {} in {} {}",
                last.text().to_uppercase().bright_white().bold(),
                result.rounds.to_string().bright_cyan().bold(),
                if result.rounds == 1 { "round" } else { "rounds" }
            )?;
        }
    } else if game.pool().is_empty() {
        writeln!(out, "\n❌ No candidates remain! Some feedback may be incorrect.")?;
    } else {
        writeln!(
            out,
            "\n❌ Out of rounds with {} candidates left.",
            game.pool().len()
        )?;
    }

    if !game.history().is_empty() {
        writeln!(out, "\n  Rounds:")?;
        for (i, (word, outcome)) in game.history().iter().enumerate() {
            writeln!(
                out,
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                word.text().to_uppercase().bright_white().bold(),
                outcome.to_emoji()
            )?;
        }
    }
    writeln!(out)?;

    loop {
        let Some(input) = console.prompt("'new' to play again, 'undo', or 'quit'")? else {
            return Ok(Step::Quit);
        };
        match SessionCommand::parse(&input) {
            Some(SessionCommand::Quit) => return Ok(Step::Quit),
            Some(SessionCommand::NewGame) => {
                game.reset();
                writeln!(console.output, "\n🔄 New game started!\n")?;
                return Ok(Step::Continue);
            }
            Some(SessionCommand::Undo) => {
                if game.undo() {
                    writeln!(console.output, "✓ Undone! Back to round {}\n", game.round() + 1)?;
                    return Ok(Step::Continue);
                }
                writeln!(console.output, "Nothing to undo!\n")?;
            }
            None => {}
        }
    }
}
