//! TUI application state and logic

use crate::commands::resolve_guess;
use crate::core::{Outcome, Word};
use crate::solver::{Game, GameStatus, Scored, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: &'a Solver<'a>,
    pub solutions: &'a [Word],
    pub game: Game<'a>,
    pub suggestions: Vec<Scored<'a>>,
    /// Word chosen for the current round, awaiting feedback
    pub selected: Option<&'a Word>,
    pub history: Vec<HistoryEntry>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Set when the finished game has been counted in `stats`
    counted: Option<GameOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Word,
    pub outcome: Outcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameOutcome {
    won: bool,
    rounds: usize,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games by round count
    pub round_distribution: [usize; 8],
}

impl Statistics {
    fn record(&mut self, outcome: GameOutcome, delta: isize) {
        let apply = |value: &mut usize| *value = value.saturating_add_signed(delta);
        apply(&mut self.total_games);
        if outcome.won {
            apply(&mut self.games_won);
            if let Some(slot) = self.round_distribution.get_mut(outcome.rounds) {
                apply(slot);
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        crate::output::formatters::percentage(self.games_won, self.total_games)
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: &'a Solver<'a>, solutions: &'a [Word]) -> Self {
        let mut app = Self {
            solver,
            solutions,
            game: Game::new(solver),
            suggestions: Vec::new(),
            selected: None,
            history: Vec::new(),
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Suggestions are ranked by positional letter frequency."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            counted: None,
        };
        app.begin_round();
        app
    }

    /// Candidates still consistent with the feedback
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        self.game.pool()
    }

    /// Whether `word` is in the solution list
    #[must_use]
    pub fn is_solution(&self, word: &Word) -> bool {
        self.solutions.contains(word)
    }

    /// Start the next round and react to the game ending
    fn begin_round(&mut self) {
        self.suggestions = self.game.start_round(&[]);
        self.selected = None;
        self.input_buffer.clear();

        match self.game.status() {
            GameStatus::InProgress => {
                self.input_mode = InputMode::Guess;
                self.add_message(
                    &format!(
                        "Round {}: type a number or a word, TAB takes the top suggestion",
                        self.game.round()
                    ),
                    MessageStyle::Info,
                );
            }
            GameStatus::Won => {
                let word = self
                    .game
                    .played()
                    .last()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Only {word} remains - solved!"),
                    MessageStyle::Success,
                );
                self.end_game();
            }
            GameStatus::Lost => {
                if self.game.pool().is_empty() {
                    self.add_message(
                        "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message("Out of rounds!", MessageStyle::Error);
                }
                self.end_game();
            }
        }
    }

    fn end_game(&mut self) {
        let result = self.game.result();
        let outcome = GameOutcome {
            won: result.won,
            rounds: result.rounds,
        };
        self.stats.record(outcome, 1);
        self.counted = Some(outcome);
        self.input_mode = InputMode::GameOver;

        if result.won {
            let celebration = match result.rounds {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two rounds! 🔥",
                3 => "✨ SPLENDID! Three rounds! ✨",
                4 => "👏 GREAT JOB! Four rounds! 👏",
                5 => "🎉 NICE WORK! Five rounds! 🎉",
                _ => "😅 PHEW! Got there! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        }
        self.add_message("Press 'n' for new game, 'u' to undo or 'q' to quit.", MessageStyle::Info);
    }

    /// Take the typed number or word as this round's guess
    pub fn submit_guess(&mut self) {
        match resolve_guess(&self.input_buffer, &self.suggestions, self.solver) {
            Ok(word) => self.select(word),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.input_buffer.clear();
    }

    fn select(&mut self, word: &'a Word) {
        self.selected = Some(word);
        self.input_mode = InputMode::Feedback;
        self.add_message(
            &format!("Playing {}: enter the feedback", word.text().to_uppercase()),
            MessageStyle::Info,
        );
    }

    /// Take the top-ranked suggestion
    pub fn take_top_suggestion(&mut self) {
        if let Some(entry) = self.suggestions.first() {
            let word = entry.word;
            self.select(word);
        }
    }

    /// Apply the typed feedback to the selected guess
    pub fn submit_feedback(&mut self) {
        let Some(guess) = self.selected else {
            return;
        };

        let outcome: Outcome = match self.input_buffer.parse() {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(
                    &format!("Invalid feedback ({e}). Use G/Y/- or 🟩🟨⬜"),
                    MessageStyle::Error,
                );
                return;
            }
        };

        let candidates_before = self.game.pool().len();
        let status = self.game.play(guess.clone(), outcome);
        self.history.push(HistoryEntry {
            guess: guess.clone(),
            outcome,
            candidates_before,
            candidates_after: self.game.pool().len(),
        });
        self.input_buffer.clear();

        if status == GameStatus::Won {
            self.selected = None;
            self.end_game();
        } else {
            self.add_message(
                &format!("{} candidates remaining", self.game.pool().len()),
                MessageStyle::Info,
            );
            self.begin_round();
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.history.clear();
        self.messages.clear();
        self.counted = None;
        self.add_message("New game started!", MessageStyle::Info);
        self.begin_round();
    }

    /// Undo the last round, or the word selection if feedback is pending
    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::Feedback {
            self.selected = None;
            self.input_buffer.clear();
            self.input_mode = InputMode::Guess;
            self.add_message("Selection cleared", MessageStyle::Info);
            return;
        }

        if self.game.undo() {
            if let Some(outcome) = self.counted.take() {
                self.stats.record(outcome, -1);
            }
            self.history.pop();
            self.add_message("Undone!", MessageStyle::Info);
            self.begin_round();
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (_, KeyCode::Char('u')) if ctrl => self.undo_last(),

            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('u')) => self.undo_last(),

            (InputMode::Guess, KeyCode::Esc) => self.should_quit = true,
            (InputMode::Guess, KeyCode::Tab) => self.take_top_suggestion(),
            (InputMode::Guess, KeyCode::Char(c)) if c.is_ascii_alphanumeric() => {
                if self.input_buffer.len() < 5 {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            (InputMode::Guess, KeyCode::Enter) => self.submit_guess(),

            (InputMode::Feedback, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::Feedback, KeyCode::Char('n')) => self.new_game(),
            (InputMode::Feedback, KeyCode::Char('u') | KeyCode::Esc) => self.undo_last(),
            (InputMode::Feedback, KeyCode::Char(c)) => self.input_buffer.push(c),
            (InputMode::Feedback, KeyCode::Enter) => self.submit_feedback(),

            (InputMode::Guess | InputMode::Feedback, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn guess_then_feedback_narrows() {
        let list = words(&["stood", "sooty", "shout", "scold", "spoon"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let mut app = App::new(&solver, &list);
        assert_eq!(app.input_mode, InputMode::Guess);

        type_text(&mut app, "spoon");
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.selected.map(Word::text), Some("spoon"));

        type_text(&mut app, "g-g--");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].candidates_before, 5);
        assert_eq!(app.candidates().len(), 3);
        assert_eq!(app.input_mode, InputMode::Guess);
    }

    #[test]
    fn invalid_input_is_reported() {
        let list = words(&["stood", "sooty"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let mut app = App::new(&solver, &list);

        type_text(&mut app, "9");
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "gg");
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn perfect_feedback_wins_and_counts() {
        let list = words(&["stood", "sooty", "shout"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let mut app = App::new(&solver, &list);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ggggg");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.round_distribution[1], 1);

        // Undo takes the win back out of the statistics
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.stats.total_games, 0);
        assert!(app.history.is_empty());
    }

    #[test]
    fn undo_in_feedback_clears_selection() {
        let list = words(&["stood", "sooty"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let mut app = App::new(&solver, &list);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.selected.is_none());
        assert_eq!(app.game.round(), 1);
    }

    #[test]
    fn new_game_resets() {
        let list = words(&["stood", "sooty", "shout", "scold", "spoon"]);
        let solver = Solver::new(&list, &list, SolverConfig::default());
        let mut app = App::new(&solver, &list);

        type_text(&mut app, "spoon");
        type_text(&mut app, "g-g--");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.history.is_empty());
        assert_eq!(app.candidates().len(), 5);
        assert_eq!(app.game.round(), 1);
    }
}
