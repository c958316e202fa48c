//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while compiling or evaluating a points formula
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// An argument separator appeared outside any parenthesized group
    #[error("a separator (,) was misplaced or parentheses were mismatched")]
    MisplacedSeparator,

    /// Unbalanced parentheses
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// A token that is neither a number, an operator, nor a recognized variable
    #[error("unknown variable \"{0}\"")]
    UnknownVariable(String),

    /// An operator was reached with fewer operands on the stack than its arity
    #[error("insufficient operands for operator '{symbol}'")]
    InsufficientOperands { symbol: char },

    /// The value stack did not hold exactly one result after evaluation
    #[error("malformed program: {remaining} values left on the stack")]
    MalformedProgram { remaining: usize },
}
