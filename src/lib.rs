//! Wordle Assistant
//!
//! Suggests guesses ranked by positional letter frequency and narrows the candidates
//! exactly from green/yellow/none feedback, including repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Outcome, Word};
//! use wordle_assist::solver::derive_constraints;
//!
//! let guess = Word::new("spoon").unwrap();
//! let solution = Word::new("stood").unwrap();
//!
//! let outcome = Outcome::evaluate(&guess, &solution);
//! assert_eq!(outcome.to_string(), "g-gg-");
//!
//! // The feedback always admits the word that produced it
//! assert!(derive_constraints(&guess, &outcome).matches(&solution));
//! ```

// Core domain types
pub mod core;

// Frequency model, constraints, ranking and the round loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
