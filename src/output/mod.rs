//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    format_suggestions, print_evaluation, print_solve_result, print_suggest_result, print_suggestions,
};
