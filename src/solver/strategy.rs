//! Play strategies
//!
//! A strategy decides which ranked suggestion gets played in automatic mode and which
//! extra filters narrow the suggestions in particular rounds. Those filters never touch
//! the candidate pool itself.

use super::ranker::Criterion;
use crate::core::Word;
use std::fmt;

/// Extra per-round restrictions on suggested words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordFilter {
    /// Five distinct letters
    NoDoubles,
    /// Shares no letter with the given word
    NothingInCommonWith(Word),
}

impl Criterion for WordFilter {
    fn admits(&self, word: &Word) -> bool {
        match self {
            Self::NoDoubles => word.has_distinct_letters(),
            Self::NothingInCommonWith(other) => !word.shares_letter_with(other),
        }
    }
}

impl fmt::Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDoubles => write!(f, "no repeated letters"),
            Self::NothingInCommonWith(other) => write!(f, "no letters from {other}"),
        }
    }
}

/// How suggestions are turned into plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    name: String,
    /// 1-based rank of the suggestion to play
    pub pick: usize,
    round_filters: Vec<(usize, WordFilter)>,
}

impl Strategy {
    /// Names accepted by `from_name`
    pub const NAMES: [&'static str; 2] = ["top", "no-doubles"];

    /// Create a strategy that plays the suggestion at rank `pick` (1-based)
    #[must_use]
    pub fn new(name: impl Into<String>, pick: usize) -> Self {
        Self {
            name: name.into(),
            pick: pick.max(1),
            round_filters: Vec::new(),
        }
    }

    /// Add a filter applied to the suggestions of `round` (1-based)
    #[must_use]
    pub fn with_filter(mut self, round: usize, filter: WordFilter) -> Self {
        self.round_filters.push((round, filter));
        self
    }

    /// Create strategy from name string
    ///
    /// Supported names: "top", "no-doubles".
    /// Defaults to top if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "no-doubles" => Self::new("no-doubles", 1).with_filter(1, WordFilter::NoDoubles),
            _ => Self::new("top", 1),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filters active in `round`
    #[must_use]
    pub fn filters_for(&self, round: usize) -> Vec<&WordFilter> {
        self.round_filters
            .iter()
            .filter(|(r, _)| *r == round)
            .map(|(_, filter)| filter)
            .collect()
    }

    /// Choose the word to play from the ranked suggestions
    ///
    /// Falls back to the last suggestion when fewer than `pick` are available.
    #[must_use]
    pub fn choose<'a>(&self, suggestions: &[&'a Word]) -> Option<&'a Word> {
        suggestions
            .get(self.pick.saturating_sub(1))
            .or_else(|| suggestions.last())
            .copied()
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::from_name("top")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn no_doubles_filter() {
        assert!(WordFilter::NoDoubles.admits(&word("crane")));
        assert!(!WordFilter::NoDoubles.admits(&word("spoon")));
    }

    #[test]
    fn nothing_in_common_filter() {
        let filter = WordFilter::NothingInCommonWith(word("crane"));
        assert!(filter.admits(&word("stood")));
        assert!(!filter.admits(&word("spoon")));
    }

    #[test]
    fn from_name_presets() {
        let top = Strategy::from_name("top");
        assert_eq!(top.name(), "top");
        assert!(top.filters_for(1).is_empty());

        let no_doubles = Strategy::from_name("no-doubles");
        assert_eq!(no_doubles.filters_for(1), vec![&WordFilter::NoDoubles]);
        assert!(no_doubles.filters_for(2).is_empty());

        assert_eq!(Strategy::from_name("unknown"), Strategy::default());
    }

    #[test]
    fn choose_uses_pick_rank() {
        let list = [word("crane"), word("slate"), word("stood")];
        let refs: Vec<&Word> = list.iter().collect();

        assert_eq!(Strategy::new("first", 1).choose(&refs), Some(&list[0]));
        assert_eq!(Strategy::new("second", 2).choose(&refs), Some(&list[1]));
        assert_eq!(Strategy::new("deep", 9).choose(&refs), Some(&list[2]));
        assert_eq!(Strategy::new("first", 1).choose(&[]), None);
    }

    #[test]
    fn pick_is_at_least_one() {
        assert_eq!(Strategy::new("zero", 0).pick, 1);
    }

    #[test]
    fn with_filter_targets_one_round() {
        let strategy =
            Strategy::new("custom", 1).with_filter(2, WordFilter::NothingInCommonWith(word("crane")));
        assert!(strategy.filters_for(1).is_empty());
        assert_eq!(strategy.filters_for(2).len(), 1);
    }
}
