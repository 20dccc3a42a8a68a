use crate::enumerator::CandidateIterator;
use crate::enumerator::shapes::{SHAPES, Shape};
use crate::expression::{Expression, Operator};

fn leaves(expr: &Expression, out: &mut Vec<f64>) {
    match expr {
        Expression::Number(n) => out.push(*n),
        Expression::Add(l, r)
        | Expression::Sub(l, r)
        | Expression::Mul(l, r)
        | Expression::Div(l, r) => {
            leaves(l, out);
            leaves(r, out);
        }
    }
}

#[test]
fn test_candidate_count_covers_full_space() {
    let count = CandidateIterator::new([1, 2, 3, 4]).count();
    assert_eq!(count, 24 * 64 * 5);
}

#[test]
fn test_every_candidate_uses_each_card_once() {
    let mut expected = vec![2.0, 5.0, 7.0, 13.0];
    expected.sort_by(f64::total_cmp);

    for candidate in CandidateIterator::new([2, 5, 7, 13]) {
        let mut found = Vec::with_capacity(4);
        leaves(candidate.expression(), &mut found);
        found.sort_by(f64::total_cmp);
        assert_eq!(found, expected, "bad leaves in {}", candidate);
    }
}

#[test]
fn test_enumeration_is_restartable() {
    let first: Vec<String> = CandidateIterator::new([3, 3, 8, 8])
        .map(|c| c.to_string())
        .collect();
    let second: Vec<String> = CandidateIterator::new([3, 3, 8, 8])
        .map(|c| c.to_string())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_enumerates_known_solution_form() {
    // 6 / (1 - 3 / 4) must appear among the candidates for [6, 1, 3, 4].
    let found = CandidateIterator::new([6, 1, 3, 4]).any(|c| c.to_string() == "6 / (1 - 3 / 4)");
    assert!(found);
}

#[test]
fn test_out_of_range_values_are_plain_operands() {
    // The enumerator is agnostic to card semantics.
    let count = CandidateIterator::new([0, 25, 99, 1]).count();
    assert_eq!(count, 24 * 64 * 5);
}

#[test]
fn test_shape_build_positional_operators() {
    let values = [8.0, 3.0, 8.0, 3.0];
    let ops = [Operator::Div, Operator::Sub, Operator::Div];

    // a / ((b - c) / d) vs a / (b - c / d) differ only in grouping.
    let inner = Shape::RightInner.build(values, ops);
    assert_eq!(inner.to_string(), "8 / ((3 - 8) / 3)");

    let nested = Shape::RightNested.build(values, ops);
    assert_eq!(nested.to_string(), "8 / (3 - 8 / 3)");
}

#[test]
fn test_shapes_are_distinct_trees() {
    // With non-associative operators every shape must read differently.
    let values = [1.0, 2.0, 3.0, 4.0];
    let ops = [Operator::Sub, Operator::Sub, Operator::Sub];
    let mut rendered: Vec<String> = SHAPES
        .iter()
        .map(|shape| shape.build(values, ops).to_string())
        .collect();
    rendered.sort();
    rendered.dedup();
    assert_eq!(rendered.len(), SHAPES.len());
}
