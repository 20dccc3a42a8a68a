use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Expression {
    /// Evaluate the tree with real division under standard precedence.
    ///
    /// # Errors
    ///
    /// Returns an error when a division by zero occurs anywhere in the tree.
    /// This is the only fault the closed grammar can produce; callers treat
    /// it as "not a solution" rather than a failure of the search.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => Ok(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let denominator = r.evaluate()?;
                if is_zero(denominator) {
                    debug!("Division by zero in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(l.evaluate()? / denominator)
                }
            }
        }
    }
}
