//! Suggestion command
//!
//! Replays rounds given as `guess=outcome` and ranks the next guesses.

use crate::core::{Outcome, Word};
use crate::solver::{
    ConstraintSet, FrequencyTable, Scored, Solver, WordFilter, derive_constraints,
};
use anyhow::{Context, Result, bail};

/// Suggestions after a replayed history
pub struct SuggestResult<'a> {
    /// Rounds replayed, with the constraints each one produced
    pub rounds: Vec<(Word, Outcome, ConstraintSet)>,
    /// Candidates consistent with every round
    pub candidates: Vec<&'a Word>,
    /// Letter frequencies over the remaining candidates
    pub candidate_letters: FrequencyTable,
    pub suggestions: Vec<Scored<'a>>,
}

/// Parse one `guess=outcome` round, e.g. `spoon=g-gy-`
///
/// # Errors
///
/// Returns an error if the `=` is missing or either side is malformed.
///
/// # Examples
/// ```
/// use wordle_assist::commands::parse_round;
///
/// let (guess, outcome) = parse_round("spoon=G-GY-").unwrap();
/// assert_eq!(guess.text(), "spoon");
/// assert_eq!(outcome.to_string(), "g-gy-");
/// ```
pub fn parse_round(text: &str) -> Result<(Word, Outcome)> {
    let Some((guess, outcome)) = text.split_once('=') else {
        bail!("Expected guess=outcome, got '{text}'");
    };

    let guess = Word::new(guess.trim()).with_context(|| format!("Invalid guess in '{text}'"))?;
    let outcome: Outcome = outcome
        .parse()
        .with_context(|| format!("Invalid outcome in '{text}'"))?;
    Ok((guess, outcome))
}

/// Replay `rounds` and rank the next guesses
///
/// # Errors
///
/// Returns an error if any round fails to parse.
pub fn suggest_next<'a, S: AsRef<str>>(
    solver: &Solver<'a>,
    rounds: &[S],
) -> Result<SuggestResult<'a>> {
    let history: Vec<(Word, Outcome)> = rounds
        .iter()
        .map(|round| parse_round(round.as_ref()))
        .collect::<Result<_>>()?;

    let candidates = solver.candidates(&history);
    let suggestions = solver.suggest::<WordFilter>(&candidates, &[]);
    let candidate_letters = FrequencyTable::build(candidates.iter().copied());
    let rounds = history
        .into_iter()
        .map(|(guess, outcome)| {
            let constraints = derive_constraints(&guess, &outcome);
            (guess, outcome, constraints)
        })
        .collect();

    Ok(SuggestResult {
        rounds,
        candidates,
        candidate_letters,
        suggestions,
    })
}
