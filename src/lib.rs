//! # Keypad calculator
//!
//! The core of a keypad calculator: it takes the characters typed on a keypad
//! or a keyboard and evaluates the expression they form.
//!
//! Evaluation goes through three steps:
//! * tokenizing: consecutive digits and decimal points are merged into numbers.
//!   A second decimal point inside one number is dropped: `12.3.4` is `12.34`
//! * converting infix expression to postfix one with shunting-yard algorithm
//! * calculating the postfix expression
//!
//! The result is rounded to the nearest multiple of `0.001` (see `Config`).
//!
//! Operators (starting from highest priority):
//! * `^` - power, right-associative: `2^3^2` is `2^(3^2)`
//! * `*`, `/` - multiplication and division
//! * `+`, `-` - addition and subtraction
//!
//! Brackets `(` and `)` group subexpressions. Unary minus, functions, and
//! variables are not supported.
//!
//! Division by zero is not an error: `5/0` is `Infinity`. Any structural
//! problem (unbalanced brackets, missing operands, extra numbers) is
//! reported as `CalcError` which the screen shows as `wrong expr.`

#[macro_use]
extern crate pest_derive;

pub mod errors;
pub mod keypad;
pub mod ops;
pub mod parse;
pub mod stack;
pub mod value;

use log::debug;

pub use errors::{CalcError, WRONG_EXPRESSION};
pub use keypad::{Key, Keypad};
pub use ops::Operator;
pub use parse::{tokenize, Token};
pub use stack::{calculate, to_postfix};
pub use value::{format_value, round_to_precision, CalcResult, Config, DEFAULT_PRECISION};

/// Evaluates a given expression with default settings and returns either result or error
pub fn eval(expr: &str) -> CalcResult {
    eval_with(expr, &Config::default())
}

/// Evaluates a given expression and returns either result or error
pub fn eval_with(expr: &str, config: &Config) -> CalcResult {
    let tokens = tokenize(expr)?;
    let postfix = to_postfix(&tokens)?;
    let res = calculate(&postfix).map(|v| round_to_precision(v, config.precision));
    match &res {
        Ok(v) => debug!("evaluated '{}' to {}", expr, v),
        Err(e) => debug!("failed to evaluate '{}': {}", expr, e),
    }
    res
}
