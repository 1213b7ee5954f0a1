use thiserror::Error;

/// Text shown on the calculator screen for any failed evaluation
pub const WRONG_EXPRESSION: &str = "wrong expr.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Failed to convert '{0}' to float")]
    StrToFloat(String),

    #[error("Too many operators")]
    TooManyOps,
    #[error("Mismatched opening bracket")]
    OpenBracketMismatch,
    #[error("Mismatched closing bracket")]
    ClosingBracketMismatch,
    #[error("Nothing to calculate")]
    EmptyExpression,
    #[error("Too many numbers")]
    InsufficientOps,

    #[error("Failed to parse expression: {0}")]
    ParseFailed(String),

    #[error("unreachable")]
    Unreachable,
}

impl CalcError {
    /// Returns true if the expression has unbalanced parentheses
    pub fn is_bracket_error(&self) -> bool {
        matches!(self, CalcError::OpenBracketMismatch | CalcError::ClosingBracketMismatch)
    }

    /// The single failure text callers display. Finer error kinds are
    /// available through `Display` and the variant itself
    pub fn screen_text(&self) -> &'static str {
        WRONG_EXPRESSION
    }
}
