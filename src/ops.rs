use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Binary operators understood by the calculator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Priority and associativity of an operator
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpInfo {
    pub(crate) op: Operator,
    pub(crate) priority: i32,
    pub(crate) right_assoc: bool,
}

lazy_static! {
    // a new operator needs only a new line here and an arm in `apply`
    static ref OPERATORS: HashMap<char, OpInfo> = [
        ('+', OpInfo { op: Operator::Add, priority: 1, right_assoc: false }),
        ('-', OpInfo { op: Operator::Sub, priority: 1, right_assoc: false }),
        ('*', OpInfo { op: Operator::Mul, priority: 2, right_assoc: false }),
        ('/', OpInfo { op: Operator::Div, priority: 2, right_assoc: false }),
        ('^', OpInfo { op: Operator::Pow, priority: 3, right_assoc: true }),
    ]
    .iter()
    .cloned()
    .collect();
}

impl Operator {
    /// Returns the operator for a given character or None if the character
    /// is not an operator
    pub fn from_char(c: char) -> Option<Operator> {
        OPERATORS.get(&c).map(|info| info.op)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    fn info(self) -> OpInfo {
        // every variant has its row in the table
        OPERATORS[&self.symbol()]
    }

    pub fn priority(self) -> i32 {
        self.info().priority
    }

    pub fn is_right_assoc(self) -> bool {
        self.info().right_assoc
    }

    /// Applies the operator to the left operand `a` and the right one `b`.
    /// Division by zero and similar cases follow IEEE-754 rules
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
            Operator::Pow => a.powf(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
