//! Word lists for the assistant
//!
//! The solution and dictionary lists are embedded at build time; either can be replaced
//! by a file at run time. `Vocabulary` ties them together into the words that may be
//! guessed.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use loader::LoadError;

use crate::core::Word;
use clap::ValueEnum;
use loader::words_from_slice;
use rustc_hash::FxHashSet;

/// Which words may be guessed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GuessPool {
    /// Only plausible answers (cheat mode)
    Solutions,
    /// Solutions followed by every other dictionary word
    #[default]
    All,
}

/// Solution list plus the guessable list derived from it
#[derive(Debug, Clone)]
pub struct Vocabulary {
    solutions: Vec<Word>,
    guessable: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from loaded lists
    ///
    /// The guessable list is the solutions followed by the dictionary, keeping only the
    /// first occurrence of each word. With `GuessPool::Solutions` the dictionary is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if there are no solutions: frequencies cannot be
    /// counted over nothing.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::wordlists::{GuessPool, Vocabulary};
    ///
    /// let solutions = vec![Word::new("crane").unwrap(), Word::new("stood").unwrap()];
    /// let dictionary = vec![Word::new("salet").unwrap(), Word::new("crane").unwrap()];
    ///
    /// let vocabulary = Vocabulary::new(solutions, dictionary, GuessPool::All).unwrap();
    /// assert_eq!(vocabulary.guessable().len(), 3);
    /// ```
    pub fn new(
        solutions: Vec<Word>,
        dictionary: Vec<Word>,
        pool: GuessPool,
    ) -> Result<Self, LoadError> {
        if solutions.is_empty() {
            return Err(LoadError::Empty);
        }

        let extra = match pool {
            GuessPool::Solutions => Vec::new(),
            GuessPool::All => dictionary,
        };

        let mut seen = FxHashSet::default();
        let guessable = solutions
            .iter()
            .cloned()
            .chain(extra)
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Ok(Self {
            solutions,
            guessable,
        })
    }

    /// The embedded lists with every word guessable
    ///
    /// # Errors
    ///
    /// Only if the embedded solution list is empty.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::embedded_with(GuessPool::All)
    }

    /// The embedded lists with the given guess pool
    ///
    /// # Errors
    ///
    /// Only if the embedded solution list is empty.
    pub fn embedded_with(pool: GuessPool) -> Result<Self, LoadError> {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(DICTIONARY), pool)
    }

    /// Plausible answers, used for letter frequencies and batch runs
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Every word that may be played, solutions first
    #[must_use]
    pub fn guessable(&self) -> &[Word] {
        &self.guessable
    }
}
