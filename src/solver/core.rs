use std::collections::BTreeSet;

use log::{debug, info};

use crate::card::Hand;
use crate::enumerator::CandidateIterator;
use crate::solver::constants::{EPSILON, TARGET};

/// Main solver: searches the candidate space of a hand and collects
/// de-duplicated solutions.
pub struct HandSolver {}

impl HandSolver {
    /// Create a new hand solver
    pub fn new() -> Self {
        Self {}
    }

    /// Find every distinct expression over `hand` that evaluates to 24.
    ///
    /// Candidates that fail to evaluate (division by zero) are dropped and
    /// never abort the search. The returned set holds canonical forms, so
    /// candidates that render identically once normalized appear once. An
    /// empty set is the ordinary "no solution" outcome, not an error.
    pub fn find_solutions(&self, hand: Hand) -> BTreeSet<String> {
        let mut solutions = BTreeSet::new();

        for candidate in CandidateIterator::new(hand) {
            let value = match candidate.expression().evaluate() {
                Ok(value) => value,
                Err(_) => continue,
            };
            if (value - TARGET).abs() < EPSILON {
                let form = canonical_form(&candidate.to_string());
                if solutions.insert(form) {
                    debug!("Accepted solution: {}", candidate);
                }
            }
        }

        info!("Found {} solutions for hand {:?}", solutions.len(), hand);
        solutions
    }
}

impl Default for HandSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical text form of a candidate, used as the dedup key: whitespace is
/// stripped and operator glyph variants collapse to one ASCII symbol set.
pub fn canonical_form(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            _ => c,
        })
        .collect()
}
