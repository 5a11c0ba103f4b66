use crate::error::{EvaluationError, Result};
use crate::rpn::Token;
use log::debug;

pub struct PostfixEvaluator;

impl PostfixEvaluator {
    /// Reduces a postfix token sequence to a single value.
    pub fn evaluate(tokens: &[Token]) -> Result<f64> {
        let mut stack: Vec<f64> = Vec::new();

        for token in tokens {
            match token {
                Token::Number(text) => {
                    let value: f64 = text
                        .parse()
                        .ok()
                        .filter(|value: &f64| value.is_finite())
                        .ok_or_else(|| EvaluationError::InvalidNumber(text.clone()))?;
                    stack.push(value);
                }
                Token::Operator(op) => {
                    let (right, left) = match (stack.pop(), stack.pop()) {
                        (Some(right), Some(left)) => (right, left),
                        _ => return Err(EvaluationError::InsufficientOperands),
                    };
                    let result = op.apply(left, right)?;
                    debug!("{} {} {} = {}", left, op, right, result);
                    stack.push(result);
                }
                Token::LeftParen | Token::RightParen => {
                    return Err(EvaluationError::UnknownToken(token.to_string()))
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            values => Err(EvaluationError::InvalidResultShape(values.len())),
        }
    }

    /// Evaluates whitespace separated RPN text such as `"3 4 2 * +"`.
    pub fn evaluate_str(rpn: &str) -> Result<f64> {
        let tokens = rpn
            .split_whitespace()
            .map(Token::classify)
            .collect::<Result<Vec<Token>>>()?;
        Self::evaluate(&tokens)
    }
}
