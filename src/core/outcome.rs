//! Wordle feedback outcome calculation and representation
//!
//! An outcome is the row of coloured tiles returned for a guess. Its text form is
//! written over `{g, y, -}`:
//! - `g` = Green (right letter, right position)
//! - `y` = Yellow (letter in the word, wrong position)
//! - `-` = None (no further credit for this letter)

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    None,
}

impl Mark {
    /// Parse one feedback symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' | '⬛' => Some(Self::None),
            _ => None,
        }
    }

    /// Canonical text symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::None => '-',
        }
    }

    /// Emoji tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::None => '⬜',
        }
    }
}

/// Error type for invalid outcome strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Outcome must be exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid outcome symbol '{ch}' (use g = green, y = yellow, - = none)")
            }
        }
    }
}

impl std::error::Error for OutcomeError {}

/// Feedback for a whole guess, position-aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome([Mark; WORD_LENGTH]);

impl Outcome {
    /// All greens (guess equals solution)
    pub const PERFECT: Self = Self([Mark::Green; WORD_LENGTH]);

    /// Build an outcome from its marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the outcome when `guess` is played against a known `solution`
    ///
    /// # Algorithm
    /// 1. Green pass: mark exact matches. The solution letters at every other
    ///    position form the pool of uncoloured letters.
    /// 2. Left to right over the remaining positions: a letter still in the pool
    ///    is yellow and consumes one copy; anything else gets no mark.
    ///
    /// Green plus yellow marks for a letter never exceed its count in the solution.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Outcome, Word};
    ///
    /// let guess = Word::new("spoon").unwrap();
    /// let solution = Word::new("sooty").unwrap();
    /// assert_eq!(Outcome::evaluate(&guess, &solution).to_string(), "g-gy-");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut marks = [Mark::None; WORD_LENGTH];
        let mut uncoloured: FxHashMap<u8, usize> = FxHashMap::default();

        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Green;
            } else {
                *uncoloured.entry(s).or_insert(0) += 1;
            }
        }

        for (mark, &letter) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Green {
                continue;
            }
            if let Some(count) = uncoloured.get_mut(&letter)
                && *count > 0
            {
                *mark = Mark::Yellow;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every tile is green
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green tiles
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Green).count()
    }

    /// Count the number of yellow tiles
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Convert to an emoji string like "🟩⬜🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Outcome {
    type Err = OutcomeError;

    /// Parse an outcome like "g-gy-" (case-insensitive; `_` and emoji tiles accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(OutcomeError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::None; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(symbols) {
            *mark = Mark::from_symbol(ch).ok_or(OutcomeError::InvalidSymbol(ch))?;
        }

        Ok(Self(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(guess: &str, solution: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let solution = Word::new(solution).unwrap();
        Outcome::evaluate(&guess, &solution).to_string()
    }

    #[test]
    fn outcome_all_none() {
        assert_eq!(outcome("abcde", "fghij"), "-----");
    }

    #[test]
    fn outcome_all_green() {
        let word = Word::new("crane").unwrap();
        let result = Outcome::evaluate(&word, &word);
        assert_eq!(result, Outcome::PERFECT);
        assert!(result.is_perfect());
        assert_eq!(result.count_greens(), 5);
    }

    #[test]
    fn outcome_spoon_against_stood() {
        // Both 'o's line up with STOOD's 'o's
        assert_eq!(outcome("spoon", "stood"), "g-gg-");
    }

    #[test]
    fn outcome_spoon_against_sooty() {
        // Second 'o' takes the remaining 'o' credit from position 1
        assert_eq!(outcome("spoon", "sooty"), "g-gy-");
    }

    #[test]
    fn outcome_green_consumes_credit_before_yellow() {
        // Only one 's' in SILLY, taken by the green at position 0
        assert_eq!(outcome("sassy", "silly"), "g---g");
    }

    #[test]
    fn outcome_yellow_credit_goes_left_to_right() {
        // One 'e' available for yellows: the first unmatched 'e' gets it
        assert_eq!(outcome("geese", "after"), "-y---");
        assert_eq!(outcome("speed", "abide"), "--y-y");
    }

    #[test]
    fn outcome_duplicate_in_solution() {
        assert_eq!(outcome("robot", "floor"), "yy-g-");
        assert_eq!(outcome("speed", "erase"), "y-yy-");
    }

    #[test]
    fn outcome_real_wordle_example() {
        assert_eq!(outcome("crane", "slate"), "--g-g");
    }

    #[test]
    fn outcome_parse_valid() {
        let p1: Outcome = "G-GY-".parse().unwrap();
        let p2: Outcome = "g_gy_".parse().unwrap();
        let p3: Outcome = "🟩⬜🟩🟨⬜".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count_greens(), 2);
        assert_eq!(p1.count_yellows(), 1);
        assert_eq!(p1.mark_at(3), Mark::Yellow);
    }

    #[test]
    fn outcome_parse_invalid() {
        assert_eq!(
            "g-gy".parse::<Outcome>(),
            Err(OutcomeError::InvalidLength(4))
        );
        assert_eq!(
            "g-gy--".parse::<Outcome>(),
            Err(OutcomeError::InvalidLength(6))
        );
        assert_eq!(
            "g-gx-".parse::<Outcome>(),
            Err(OutcomeError::InvalidSymbol('x'))
        );
        assert_eq!("".parse::<Outcome>(), Err(OutcomeError::InvalidLength(0)));
    }

    #[test]
    fn outcome_display_round_trip() {
        let text = "yg-y-";
        let parsed: Outcome = text.parse().unwrap();
        assert_eq!(parsed.to_string(), text);
        assert_eq!(parsed.to_emoji(), "🟨🟩⬜🟨⬜");
    }

    #[test]
    fn outcome_never_over_credits_a_letter() {
        let words = [
            "spoon", "stood", "sooty", "sassy", "silly", "geese", "elder", "eerie", "error",
        ];
        for guess in words {
            for solution in words {
                let g = Word::new(guess).unwrap();
                let s = Word::new(solution).unwrap();
                let result = Outcome::evaluate(&g, &s);

                for &letter in g.chars() {
                    let credited = g
                        .positions_of(letter)
                        .filter(|&i| result.mark_at(i) != Mark::None)
                        .count();
                    assert!(
                        credited <= s.count_of(letter),
                        "{guess} vs {solution}: '{}' credited {credited} times",
                        letter as char
                    );
                }
            }
        }
    }
}
