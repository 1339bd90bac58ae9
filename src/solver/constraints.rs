//! Constraint derivation from feedback
//!
//! Turns one round's (guess, outcome) pair into five per-position predicates that every
//! word still consistent with the feedback must satisfy. Only the guess and the outcome are
//! consulted, so the same rules work in live play where the solution is unknown.

use crate::core::{Mark, Outcome, WORD_LENGTH, Word};
use std::fmt;

/// What a predicate requires of its letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    /// Letter sits at this position (green)
    Exact,
    /// Letter occurs in the word but not at this position (yellow)
    Misplaced,
    /// Letter occurs nowhere in the word
    Absent,
    /// Letter is not at this position; says nothing about elsewhere
    NotHere,
}

/// A single-position test over a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub position: usize,
    pub letter: u8,
    pub kind: PredicateKind,
}

impl Predicate {
    /// Check whether `word` satisfies this predicate
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let here = word.char_at(self.position) == self.letter;
        match self.kind {
            PredicateKind::Exact => here,
            PredicateKind::Misplaced => !here && word.has_letter(self.letter),
            PredicateKind::Absent => !word.has_letter(self.letter),
            PredicateKind::NotHere => !here,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(self.letter);
        let position = self.position + 1;
        match self.kind {
            PredicateKind::Exact => write!(f, "'{letter}' at {position}"),
            PredicateKind::Misplaced => write!(f, "'{letter}' present, not at {position}"),
            PredicateKind::Absent => write!(f, "no '{letter}'"),
            PredicateKind::NotHere => write!(f, "'{letter}' not at {position}"),
        }
    }
}

/// The five predicates derived from one round, applied conjunctively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintSet([Predicate; WORD_LENGTH]);

impl ConstraintSet {
    /// Predicates in position order
    #[must_use]
    pub const fn predicates(&self) -> &[Predicate; WORD_LENGTH] {
        &self.0
    }

    /// Check whether `word` satisfies every predicate
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0.iter().all(|predicate| predicate.matches(word))
    }

    /// Keep the words of `pool` that satisfy every predicate, preserving order
    #[must_use]
    pub fn filter<'a>(&self, pool: &[&'a Word]) -> Vec<&'a Word> {
        pool.iter()
            .copied()
            .filter(|word| self.matches(word))
            .collect()
    }
}

/// Derive the constraints a candidate must satisfy after `guess` received `outcome`
///
/// Per position `i`, with `c = guess[i]`:
/// - green: `c` at `i`
/// - yellow: `c` somewhere, but not at `i`
/// - none, and `c` appears once in the guess: no `c` anywhere
/// - none, and `c` repeats in the guess: if every copy of `c` got no mark, no `c`
///   anywhere; otherwise the letter is confirmed elsewhere and only `i` is ruled out
///
/// # Examples
/// ```
/// use wordle_assist::core::{Outcome, Word};
/// use wordle_assist::solver::derive_constraints;
///
/// let guess = Word::new("spoon").unwrap();
/// let outcome: Outcome = "g-gy-".parse().unwrap();
/// let constraints = derive_constraints(&guess, &outcome);
///
/// assert!(constraints.matches(&Word::new("sooty").unwrap()));
/// assert!(!constraints.matches(&Word::new("stood").unwrap()));
/// ```
#[must_use]
pub fn derive_constraints(guess: &Word, outcome: &Outcome) -> ConstraintSet {
    ConstraintSet(std::array::from_fn(|position| {
        let letter = guess.char_at(position);
        let kind = match outcome.mark_at(position) {
            Mark::Green => PredicateKind::Exact,
            Mark::Yellow => PredicateKind::Misplaced,
            Mark::None => {
                let credited_elsewhere = guess
                    .positions_of(letter)
                    .any(|i| outcome.mark_at(i) != Mark::None);
                if credited_elsewhere {
                    PredicateKind::NotHere
                } else {
                    PredicateKind::Absent
                }
            }
        };

        Predicate {
            position,
            letter,
            kind,
        }
    }))
}
