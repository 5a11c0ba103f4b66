use crate::error::{EvaluationError, Result};
use std::fmt;

mod converter;
mod evaluator;

pub use converter::ShuntingYard;
pub use evaluator::PostfixEvaluator;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvaluationError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvaluationError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            _ => Err(EvaluationError::UnknownOperator(value.to_string())),
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvaluationError;

    fn try_from(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            _ => Err(EvaluationError::UnknownOperator(value.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeral text exactly as scanned; parsed only when evaluated.
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classifies a single word of textual RPN.
    ///
    /// A word is numeric when it starts with a digit, or when it is longer
    /// than one character and starts with `-`, so `-3` is a number while a
    /// lone `-` is the subtraction operator.
    pub fn classify(text: &str) -> Result<Token> {
        let first = text.chars().next();
        let numeric = match first {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => text.len() > 1,
            _ => false,
        };

        if numeric {
            return Ok(Token::Number(text.to_string()));
        }

        match text {
            "(" => Ok(Token::LeftParen),
            ")" => Ok(Token::RightParen),
            _ => Operator::try_from(text)
                .map(Token::Operator)
                .map_err(|_| EvaluationError::UnknownToken(text.to_string())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// A token sequence in evaluation order, free of grouping tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn evaluate(&self) -> Result<f64> {
        PostfixEvaluator::evaluate(&self.0)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
