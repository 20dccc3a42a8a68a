use std::fmt;

use log::debug;

use crate::card::Hand;
use crate::enumerator::shapes::{SHAPES, Shape};
use crate::expression::{Expression, OPERATORS, Operator};

/// One concrete candidate expression: a permutation of the hand, a triple of
/// operators, and a parenthesization shape materialized as a tree.
#[derive(Debug, Clone)]
pub struct Candidate {
    expr: Expression,
}

impl Candidate {
    pub fn expression(&self) -> &Expression {
        &self.expr
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

/// Lazy iterator over every candidate expression for a four-card hand.
///
/// Yields |permutations| x |operator triples| x |shapes| candidates in a
/// fixed order. The iterator is a pure function of the hand: two iterators
/// over the same hand produce identical sequences, and exhausting one has no
/// effect on the other. The hand is taken as-is; repeated card values yield
/// repeated permutations, which collapse downstream when solutions are
/// de-duplicated.
pub struct CandidateIterator {
    permutations: Vec<[f64; 4]>,
    perm_idx: usize,
    op_idx: usize,
    shape_idx: usize,
}

impl CandidateIterator {
    pub fn new(hand: Hand) -> Self {
        let permutations = permutations_of(hand.map(f64::from));
        debug!(
            "Enumerating {} candidates for hand {:?}",
            permutations.len() * OPERATOR_TRIPLES * SHAPES.len(),
            hand
        );
        Self {
            permutations,
            perm_idx: 0,
            op_idx: 0,
            shape_idx: 0,
        }
    }
}

const OPERATOR_TRIPLES: usize = OPERATORS.len() * OPERATORS.len() * OPERATORS.len();

impl Iterator for CandidateIterator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let values = *self.permutations.get(self.perm_idx)?;
        let ops = operator_triple(self.op_idx);
        let shape = SHAPES[self.shape_idx];

        // Odometer advance: shape fastest, then operators, then permutation.
        self.shape_idx += 1;
        if self.shape_idx == SHAPES.len() {
            self.shape_idx = 0;
            self.op_idx += 1;
            if self.op_idx == OPERATOR_TRIPLES {
                self.op_idx = 0;
                self.perm_idx += 1;
            }
        }

        Some(Candidate {
            expr: shape.build(values, ops),
        })
    }
}

/// Decompose a flat index in base |OPERATORS| into a positional triple.
fn operator_triple(index: usize) -> [Operator; 3] {
    let base = OPERATORS.len();
    [
        OPERATORS[index / (base * base)],
        OPERATORS[index / base % base],
        OPERATORS[index % base],
    ]
}

/// All orderings of the four values, duplicates included when the hand
/// repeats a value.
fn permutations_of(values: [f64; 4]) -> Vec<[f64; 4]> {
    let mut result = Vec::with_capacity(24);
    let mut used = [false; 4];
    let mut current = [0.0; 4];
    permute(&values, &mut used, &mut current, 0, &mut result);
    result
}

fn permute(
    values: &[f64; 4],
    used: &mut [bool; 4],
    current: &mut [f64; 4],
    depth: usize,
    out: &mut Vec<[f64; 4]>,
) {
    if depth == values.len() {
        out.push(*current);
        return;
    }
    for i in 0..values.len() {
        if !used[i] {
            used[i] = true;
            current[depth] = values[i];
            permute(values, used, current, depth + 1, out);
            used[i] = false;
        }
    }
}
