//! Candidate scoring and ranking
//!
//! Filters a pool by any number of criteria, scores the survivors against a
//! `FrequencyTable` and keeps the best few.

use super::constraints::{ConstraintSet, Predicate};
use super::frequency::FrequencyTable;
use crate::core::Word;
use std::cmp::Reverse;

/// Default number of suggestions returned by `rank`
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// Anything that can accept or reject a candidate word
pub trait Criterion {
    /// True if `word` passes
    fn admits(&self, word: &Word) -> bool;
}

impl Criterion for Predicate {
    fn admits(&self, word: &Word) -> bool {
        self.matches(word)
    }
}

impl Criterion for ConstraintSet {
    fn admits(&self, word: &Word) -> bool {
        self.matches(word)
    }
}

impl<C: Criterion + ?Sized> Criterion for &C {
    fn admits(&self, word: &Word) -> bool {
        (**self).admits(word)
    }
}

/// A word with its frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored<'a> {
    pub word: &'a Word,
    pub score: u32,
}

/// Score a word: the sum of its letters' counts at their positions
#[inline]
#[must_use]
pub fn score(word: &Word, table: &FrequencyTable) -> u32 {
    table.score(word)
}

/// Rank the words of `pool` that pass every criterion
///
/// Survivors are sorted by descending score; equal scores keep their pool order. At most
/// `limit` entries are returned. No criteria means no filtering. An empty result is a
/// normal answer (nothing is consistent), not an error.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{FrequencyTable, Predicate, rank};
///
/// let words = vec![
///     Word::new("crane").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("slate").unwrap(),
/// ];
/// let table = FrequencyTable::build(&words);
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let ranked = rank(&pool, &table, &[] as &[Predicate], 2);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].word.text(), "crate");
/// ```
#[must_use]
pub fn rank<'a, C: Criterion>(
    pool: &[&'a Word],
    table: &FrequencyTable,
    criteria: &[C],
    limit: usize,
) -> Vec<Scored<'a>> {
    let mut scored: Vec<Scored<'a>> = pool
        .iter()
        .copied()
        .filter(|word| criteria.iter().all(|criterion| criterion.admits(word)))
        .map(|word| Scored {
            word,
            score: table.score(word),
        })
        .collect();

    // Stable: ties stay in pool order
    scored.sort_by_key(|entry| Reverse(entry.score));
    scored.truncate(limit);
    scored
}
