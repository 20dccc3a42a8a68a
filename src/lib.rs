//! Twentyfour - A solver library for the 24 card game
//!
//! Given four cards valued 1 to 13, this library enumerates every way to
//! combine them with the four basic arithmetic operators and parentheses,
//! and collects the distinct expressions that evaluate to 24.

pub mod card;
pub mod enumerator;
pub mod expression;
pub mod solver;

// Re-export the main public API
pub use card::{Card, CardError, Hand, card_symbol, parse_card_symbol};
pub use enumerator::{Candidate, CandidateIterator};
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::HandSolver;

use std::collections::BTreeSet;

/// Enumerate every candidate expression over the given hand
///
/// The sequence is lazy, finite, and a pure function of the hand: it covers
/// each operand permutation, each ordered operator triple, and each
/// parenthesization shape exactly once.
///
/// # Examples
///
/// ```
/// use twentyfour::enumerate_candidates;
///
/// let count = enumerate_candidates([1, 2, 3, 4]).count();
/// assert_eq!(count, 24 * 64 * 5);
/// ```
pub fn enumerate_candidates(hand: Hand) -> CandidateIterator {
    CandidateIterator::new(hand)
}

/// Find all distinct expressions over the given hand that evaluate to 24
///
/// This is a convenience function that creates a default solver and runs the
/// full candidate search. Solutions are returned as canonical strings (ASCII
/// operators, no whitespace); an empty set means the hand has no solution.
///
/// # Examples
///
/// ```
/// use twentyfour::find_solutions;
///
/// let solutions = find_solutions([6, 6, 6, 6]);
/// assert!(solutions.contains("6+6+6+6"));
///
/// let unsolvable = find_solutions([1, 1, 1, 1]);
/// assert!(unsolvable.is_empty());
/// ```
pub fn find_solutions(hand: Hand) -> BTreeSet<String> {
    let solver = HandSolver::new();
    solver.find_solutions(hand)
}
