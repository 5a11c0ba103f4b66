use crate::error::{EvaluationError, Result};
use crate::rpn::{Operator, Postfix, Token};
use log::debug;

/// Infix to postfix conversion using the shunting yard algorithm.
pub struct ShuntingYard;

impl ShuntingYard {
    /// Converts an infix expression into its postfix form.
    pub fn convert(expression: &str) -> Result<Postfix> {
        Self::to_postfix(expression).map(Postfix)
    }

    /// Scans `expression` once, emitting tokens in postfix order.
    ///
    /// Only character classes are checked here; a numeral such as `1.2.3` is
    /// passed through and rejected when it is evaluated.
    pub fn to_postfix(expression: &str) -> Result<Vec<Token>> {
        debug!("Converting expression: {}", expression);
        let mut output = Vec::new();
        let mut operators: Vec<Token> = Vec::new();
        let mut numeral = String::new();

        for c in expression.chars() {
            if c.is_whitespace() {
                continue;
            }

            if c.is_ascii_digit() || c == '.' {
                numeral.push(c);
                continue;
            }

            Self::flush_numeral(&mut numeral, &mut output);

            match c {
                '(' => operators.push(Token::LeftParen),
                ')' => loop {
                    match operators.pop() {
                        Some(Token::LeftParen) => break,
                        Some(token) => output.push(token),
                        None => return Err(EvaluationError::MismatchedParentheses),
                    }
                },
                _ => {
                    let operator =
                        Operator::try_from(c).map_err(|_| EvaluationError::InvalidCharacter(c))?;
                    while let Some(Token::Operator(top)) = operators.last() {
                        if top.precedence() < operator.precedence() {
                            break;
                        }
                        output.push(Token::Operator(*top));
                        operators.pop();
                    }
                    operators.push(Token::Operator(operator));
                }
            }
        }

        Self::flush_numeral(&mut numeral, &mut output);

        while let Some(token) = operators.pop() {
            match token {
                Token::LeftParen | Token::RightParen => {
                    return Err(EvaluationError::MismatchedParentheses)
                }
                token => output.push(token),
            }
        }

        debug!("Postfix tokens: {:?}", output);
        Ok(output)
    }

    fn flush_numeral(numeral: &mut String, output: &mut Vec<Token>) {
        if !numeral.is_empty() {
            output.push(Token::Number(std::mem::take(numeral)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpn(expression: &str) -> String {
        ShuntingYard::convert(expression)
            .expect("Conversion failed")
            .to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("3 + 4 * 2"), "3 4 2 * +");
        assert_eq!(rpn("3 * 4 + 2"), "3 4 * 2 +");
        assert_eq!(rpn("1 + 2 * 3 - 4 / 5"), "1 2 3 * + 4 5 / -");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(rpn("8 - 3 - 2"), "8 3 - 2 -");
        assert_eq!(rpn("8 / 4 / 2"), "8 4 / 2 /");
        assert_eq!(rpn("2 * 3 / 4"), "2 3 * 4 /");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(rpn("(3 + 4) * 2"), "3 4 + 2 *");
        assert_eq!(rpn("2 * ((1 + 2) - (3 - 4))"), "2 1 2 + 3 4 - - *");
        assert_eq!(rpn("(((7)))"), "7");
    }

    #[test]
    fn test_decimals_and_whitespace() {
        assert_eq!(rpn("  1.5+2.25  "), "1.5 2.25 +");
        assert_eq!(rpn("\t10\n/ 4"), "10 4 /");
    }

    #[test]
    fn test_whitespace_does_not_split_numerals() {
        assert_eq!(rpn("1 2 + 3"), "12 3 +");
    }

    #[test]
    fn test_malformed_numerals_pass_through() {
        assert_eq!(
            ShuntingYard::to_postfix("1.2.3 + .").unwrap(),
            vec![
                Token::Number("1.2.3".to_string()),
                Token::Number(".".to_string()),
                Token::Operator(Operator::Add),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(ShuntingYard::to_postfix("").unwrap().is_empty());
        assert!(ShuntingYard::to_postfix("   ").unwrap().is_empty());
        assert!(ShuntingYard::convert("()").unwrap().is_empty());
        assert!(!ShuntingYard::convert("(1)").unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_parentheses() {
        for expression in ["(1 + 2", "2 + )", "1 + 2)", "((1)", ")(", "("] {
            assert_eq!(
                ShuntingYard::to_postfix(expression),
                Err(EvaluationError::MismatchedParentheses),
                "expression: {expression}"
            );
        }
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            ShuntingYard::to_postfix("3 & 4"),
            Err(EvaluationError::InvalidCharacter('&'))
        );
        assert_eq!(
            ShuntingYard::to_postfix("2 ^ 3"),
            Err(EvaluationError::InvalidCharacter('^'))
        );
        assert_eq!(
            ShuntingYard::to_postfix("x + 1"),
            Err(EvaluationError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_operators_only_reach_output() {
        let tokens = ShuntingYard::to_postfix("(1 + (2 * 3)) / (4 - 5)").unwrap();
        assert!(tokens
            .iter()
            .all(|t| !matches!(t, Token::LeftParen | Token::RightParen)));
    }
}
