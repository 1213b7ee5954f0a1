use log::trace;

use crate::errors::*;
use crate::ops::Operator;
use crate::parse::{join, Token};
use crate::value::*;

pub(crate) struct Stack {
    pub(crate) queue: Vec<Token>,
    pub(crate) output: Vec<Token>,
}

impl Stack {
    // move operators from the queue to output while the top operator in the
    // queue has greater priority, or equal one for left-associative operators
    fn pop_while_priority(&mut self, op: Operator) {
        let priority = op.priority();
        let right = op.is_right_assoc();
        while let Some(e) = self.queue.pop() {
            match &e {
                Token::Op(top) => {
                    let p = top.priority();
                    if p > priority || (p == priority && !right) {
                        self.output.push(e);
                    } else {
                        self.queue.push(e);
                        return;
                    }
                }
                _ => {
                    self.queue.push(e);
                    return;
                }
            }
        }
    }

    // move operators from the queue to output until the first bracket.
    // The bracket is dropped
    fn pop_until_bracket(&mut self) -> CalcErrorResult {
        loop {
            let e = match self.queue.pop() {
                Some(e) => e,
                None => return Err(CalcError::ClosingBracketMismatch),
            };
            match e {
                Token::OpenB => return Ok(()),
                _ => self.output.push(e),
            }
        }
    }

    // move all operators from queue to output
    // Must be called only after the expression ends
    fn pop_all(&mut self) -> CalcErrorResult {
        while let Some(v) = self.queue.pop() {
            match &v {
                Token::OpenB => return Err(CalcError::OpenBracketMismatch),
                Token::Op(..) => self.output.push(v),
                _ => return Err(CalcError::Unreachable),
            }
        }
        Ok(())
    }

    // ------------ PUBLIC -----------------

    pub(crate) fn new() -> Self {
        Stack {
            queue: Vec::new(),
            output: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, token: &Token) -> CalcErrorResult {
        match token {
            Token::Num(..) => self.output.push(token.clone()),
            Token::OpenB => self.queue.push(Token::OpenB),
            Token::CloseB => self.pop_until_bracket()?,
            Token::Op(op) => {
                self.pop_while_priority(*op);
                self.queue.push(token.clone());
            }
        }
        Ok(())
    }

    pub(crate) fn postfix(mut self) -> Result<Vec<Token>, CalcError> {
        self.pop_all()?;
        Ok(self.output)
    }
}

/// Converts an infix token sequence to postfix one
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut stk = Stack::new();
    for token in tokens {
        stk.push(token)?;
    }
    let output = stk.postfix()?;
    trace!("postfix: {}", join(&output));
    Ok(output)
}

// pops two values and pushes back the result of the operator
fn two_arg_op(values: &mut Vec<f64>, op: Operator) -> CalcErrorResult {
    let (b, a) = match (values.pop(), values.pop()) {
        (Some(b), Some(a)) => (b, a),
        _ => return Err(CalcError::TooManyOps),
    };
    values.push(op.apply(a, b));
    Ok(())
}

/// Evaluates a postfix token sequence. The result is not rounded
pub fn calculate(postfix: &[Token]) -> CalcResult {
    if postfix.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let mut values: Vec<f64> = Vec::new();
    for token in postfix {
        match token {
            Token::Num(..) => values.push(token.value()?),
            Token::Op(op) => two_arg_op(&mut values, *op)?,
            _ => return Err(CalcError::Unreachable),
        }
    }

    if values.len() != 1 {
        return Err(CalcError::InsufficientOps);
    }
    // exactly one value left
    values.pop().ok_or(CalcError::Unreachable)
}
