pub mod error;
pub mod rpn;

use error::Result;
use rayon::prelude::*;
use rpn::{PostfixEvaluator, ShuntingYard};

/// Evaluates an infix arithmetic expression such as `"(3 + 4) * 2"`.
///
/// Errors from either the conversion or the evaluation stage are returned
/// unchanged.
pub fn evaluate_expression(expression: &str) -> Result<f64> {
    let postfix = ShuntingYard::to_postfix(expression)?;
    PostfixEvaluator::evaluate(&postfix)
}

/// Evaluates independent expressions in parallel, keeping input order.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate_expression(expression.as_ref()))
        .collect()
}
