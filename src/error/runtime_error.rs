use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents the errors a single statement can raise while executing.
pub enum RuntimeError {
    /// A numeric literal does not fit a finite `f64`.
    #[error("Error on line {line}: Number '{literal}' is too large.")]
    NumberOutOfRange {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric literal could not be read as a number.
    #[error("Error on line {line}: '{literal}' is not a valid number.")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A string literal is missing one of its quotes.
    #[error("Error on line {line}: String {literal} is not properly quoted.")]
    MalformedString {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The operand token cannot be evaluated.
    #[error("Error on line {line}: Cannot evaluate {kind} '{lexeme}'.")]
    UnsupportedOperand {
        /// Kind of the token.
        kind:   String,
        /// The token's lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}
