//! Positional letter frequencies
//!
//! Counts how often each letter appears at each position across a reference word list.
//! The table is the whole scoring model: a word scores the sum of its per-position counts.

use crate::core::{WORD_LENGTH, Word};

const ALPHABET_SIZE: usize = 26;

/// (letter, position) -> occurrence count
///
/// Built once from a word list and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [[u32; WORD_LENGTH]; ALPHABET_SIZE],
    words: usize,
}

impl FrequencyTable {
    /// Count letters per position over `words`
    ///
    /// Only the multiset of letters at each position matters, so the result does not
    /// depend on the order of the input. An empty list gives an all-zero table.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::FrequencyTable;
    ///
    /// let words = [Word::new("spoon").unwrap(), Word::new("stood").unwrap()];
    /// let table = FrequencyTable::build(&words);
    ///
    /// assert_eq!(table.count(b's', 0), 2);
    /// assert_eq!(table.count(b'o', 3), 2);
    /// assert_eq!(table.count(b'n', 4), 1);
    /// ```
    #[must_use]
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut counts = [[0u32; WORD_LENGTH]; ALPHABET_SIZE];
        let mut total = 0;

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[letter_index(letter)][position] += 1;
            }
            total += 1;
        }

        Self {
            counts,
            words: total,
        }
    }

    /// Occurrences of `letter` at `position`
    ///
    /// # Panics
    /// Panics if `letter` is not a lowercase ASCII letter or `position >= 5`.
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8, position: usize) -> u32 {
        self.counts[letter_index(letter)][position]
    }

    /// Sum of the counts of a word's letters at their positions
    ///
    /// Repeated letters are counted at every position they occupy.
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.count(letter, position))
            .sum()
    }

    /// Number of words the table was built from
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// Total of all letter counts at one position (equals `word_count`)
    #[must_use]
    pub fn position_total(&self, position: usize) -> u32 {
        self.counts.iter().map(|per_letter| per_letter[position]).sum()
    }

    /// Most frequent letter at a position, with its count
    ///
    /// Ties go to the alphabetically first letter. Returns `None` for an empty table.
    #[must_use]
    pub fn most_common_at(&self, position: usize) -> Option<(char, u32)> {
        (b'a'..=b'z')
            .map(|letter| (letter, self.count(letter, position)))
            .filter(|&(_, count)| count > 0)
            .fold(None, |best: Option<(u8, u32)>, (letter, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((letter, count)),
            })
            .map(|(letter, count)| (char::from(letter), count))
    }
}

#[inline]
const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn build_counts_each_position() {
        let table = FrequencyTable::build(&words(&["crane", "crate", "slate"]));

        assert_eq!(table.count(b'c', 0), 2);
        assert_eq!(table.count(b's', 0), 1);
        assert_eq!(table.count(b'a', 2), 3);
        assert_eq!(table.count(b'e', 4), 3);
        assert_eq!(table.count(b'e', 0), 0);
        assert_eq!(table.word_count(), 3);
    }

    #[test]
    fn position_totals_match_word_count() {
        let list = words(&["spoon", "stood", "sassy", "silly", "geese"]);
        let table = FrequencyTable::build(&list);

        for position in 0..WORD_LENGTH {
            assert_eq!(table.position_total(position), 5);
        }
    }

    #[test]
    fn build_is_order_independent() {
        let forward = words(&["spoon", "stood", "crane", "geese"]);
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(
            FrequencyTable::build(&forward),
            FrequencyTable::build(&backward)
        );
    }

    #[test]
    fn empty_table_scores_zero() {
        let table = FrequencyTable::build(&Vec::<Word>::new());

        assert_eq!(table.word_count(), 0);
        assert_eq!(table.score(&Word::new("crane").unwrap()), 0);
        assert_eq!(table.most_common_at(0), None);
    }

    #[test]
    fn score_sums_positional_counts() {
        let table = FrequencyTable::build(&words(&["crane", "crate", "slate"]));

        // c=2, r=2, a=3, t=2, e=3
        assert_eq!(table.score(&Word::new("crate").unwrap()), 12);
        // s=1, l=1, a=3, t=2, e=3
        assert_eq!(table.score(&Word::new("slate").unwrap()), 10);
        // none of these letters appear in the reference list
        assert_eq!(table.score(&Word::new("bulky").unwrap()), 0);
    }

    #[test]
    fn most_common_letter_per_position() {
        let table = FrequencyTable::build(&words(&["crane", "crate", "slate"]));

        assert_eq!(table.most_common_at(0), Some(('c', 2)));
        assert_eq!(table.most_common_at(2), Some(('a', 3)));
        assert_eq!(table.most_common_at(1), Some(('r', 2)));
    }
}
