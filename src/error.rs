use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Every way a conversion or evaluation can fail.
///
/// Errors are terminal for the call that produced them; the message is meant
/// to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A `)` without a matching `(`, or a `(` left open at the end of input.
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// A character that is not a digit, `.`, whitespace, an operator or a
    /// parenthesis.
    #[error("Invalid character in expression: '{0}'")]
    InvalidCharacter(char),

    /// The right operand of `/` is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Returned by `Operator::try_from` for text that is not one of `+ - * /`.
    /// Conversion and evaluation report such input as `InvalidCharacter` or
    /// `UnknownToken` instead.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// An operator was reached with fewer than two values on the stack.
    #[error("Invalid expression: insufficient operands")]
    InsufficientOperands,

    /// A postfix token that is neither a number nor an operator.
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Evaluation finished with this many values left instead of exactly one.
    #[error("Invalid postfix expression")]
    InvalidResultShape(usize),

    /// Numeral text that does not parse as a finite float, e.g. `.`, `1.2.3`
    /// or a value too large for `f64`.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}
