//! Outcome evaluation command

use crate::core::{Outcome, Word};
use anyhow::{Context, Result};

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
///
/// # Examples
/// ```
/// use wordle_assist::commands::evaluate_words;
///
/// let (_, _, outcome) = evaluate_words("crane", "slate").unwrap();
/// assert_eq!(outcome.to_string(), "--g-g");
/// ```
pub fn evaluate_words(guess: &str, solution: &str) -> Result<(Word, Word, Outcome)> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let solution =
        Word::new(solution).with_context(|| format!("Invalid solution '{solution}'"))?;
    let outcome = Outcome::evaluate(&guess, &solution);
    Ok((guess, solution, outcome))
}
