use std::fmt;

use log::trace;
use pest::Parser;

use crate::errors::*;
use crate::ops::Operator;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// A single item of an expression
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Number as it was typed, e.g. `12.5` or `.5`
    Num(String),
    Op(Operator),
    OpenB,
    CloseB,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Num(s) => write!(f, "{}", s),
            Token::Op(op) => write!(f, "{}", op),
            Token::OpenB => write!(f, "("),
            Token::CloseB => write!(f, ")"),
        }
    }
}

impl Token {
    /// Parses a number token to a float
    pub fn value(&self) -> Result<f64, CalcError> {
        match self {
            Token::Num(s) => s.parse::<f64>().map_err(|_| CalcError::StrToFloat(s.to_string())),
            _ => Err(CalcError::Unreachable),
        }
    }
}

/// Returns true if the character can be a part of a number
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Returns true if the calculator accepts the character as input
pub fn is_input_char(c: char) -> bool {
    is_numeric_char(c) || c == '(' || c == ')' || Operator::from_char(c).is_some()
}

// extends a number token by one character. The second decimal point
// in the same number is dropped
pub(crate) fn push_digit(num: &mut String, c: char) {
    if c == '.' && num.contains('.') {
        return;
    }
    num.push(c);
}

/// Splits the input into numbers, operators, and brackets. The function
/// does not check if the expression is well-formed
pub fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let pairs = match CalcParser::parse(Rule::expr, expr) {
        Ok(p) => p,
        Err(..) => return Err(CalcError::ParseFailed("invalid character".to_string())),
    };

    let mut tokens = Vec::new();
    for pair in pairs {
        let rule = pair.as_rule();
        let val = pair.as_span().as_str();
        match rule {
            Rule::number => {
                let mut num = String::with_capacity(val.len());
                for c in val.chars() {
                    push_digit(&mut num, c);
                }
                tokens.push(Token::Num(num));
            }
            Rule::operator => {
                // the grammar accepts only single char operators
                let op = val.chars().next().and_then(Operator::from_char).ok_or(CalcError::Unreachable)?;
                tokens.push(Token::Op(op));
            }
            Rule::open_b => tokens.push(Token::OpenB),
            Rule::close_b => tokens.push(Token::CloseB),
            Rule::EOI => {}
            _ => return Err(CalcError::Unreachable),
        }
    }

    trace!("tokens: {}", join(&tokens));
    Ok(tokens)
}

// space separated list of tokens for logging
pub(crate) fn join(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect::<Vec<String>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Token {
        Token::Num(s.to_string())
    }

    #[test]
    fn test_tokenize() {
        let v = tokenize("2+3*4").unwrap();
        assert_eq!(
            v,
            vec![num("2"), Token::Op(Operator::Add), num("3"), Token::Op(Operator::Mul), num("4")]
        );
        let v = tokenize("(12-0.5)^2").unwrap();
        assert_eq!(
            v,
            vec![
                Token::OpenB,
                num("12"),
                Token::Op(Operator::Sub),
                num("0.5"),
                Token::CloseB,
                Token::Op(Operator::Pow),
                num("2"),
            ]
        );
        let v = tokenize(" 1 +\t2 ").unwrap();
        assert_eq!(v, vec![num("1"), Token::Op(Operator::Add), num("2")]);
        let v = tokenize("1 2").unwrap();
        assert_eq!(v, vec![num("1"), num("2")]);
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_decimal_points() {
        let v = tokenize("12.3.4+5").unwrap();
        assert_eq!(v, vec![num("12.34"), Token::Op(Operator::Add), num("5")]);
        let v = tokenize("1..5").unwrap();
        assert_eq!(v, vec![num("1.5")]);
        let v = tokenize(".5/.").unwrap();
        assert_eq!(v, vec![num(".5"), Token::Op(Operator::Div), num(".")]);
    }

    #[test]
    fn test_malformed_passes() {
        // structural checks happen later
        let v = tokenize(")+(").unwrap();
        assert_eq!(v, vec![Token::CloseB, Token::Op(Operator::Add), Token::OpenB]);
    }

    #[test]
    fn test_invalid_chars() {
        assert!(tokenize("2+x").is_err());
        assert!(tokenize("1e5").is_err());
        assert!(tokenize("2%3").is_err());
    }

    #[test]
    fn test_value() {
        assert_eq!(num("12.5").value(), Ok(12.5));
        assert_eq!(num(".5").value(), Ok(0.5));
        assert_eq!(num("7.").value(), Ok(7.0));
        assert_eq!(num(".").value(), Err(CalcError::StrToFloat(".".to_string())));
        assert_eq!(Token::OpenB.value(), Err(CalcError::Unreachable));
    }

    #[test]
    fn test_input_chars() {
        for c in "0123456789.+-*/^()".chars() {
            assert!(is_input_char(c));
        }
        assert!(!is_input_char('='));
        assert!(!is_input_char('a'));
        assert!(is_numeric_char('.'));
        assert!(!is_numeric_char('+'));
    }
}
