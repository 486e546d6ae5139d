use thiserror::Error;

use crate::interpreter::token::Token;

/// The fatal parse-time error.
///
/// Only two statement forms can raise it: a display without a valid operand
/// and an assignment missing its `=` or its right-hand side. Once raised, no
/// statement after this point can be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The display keyword was not followed by a number, string or
    /// identifier.
    #[error("Error on line {line}: '{keyword}' at token {index} expects a number, string or identifier, found {found}.")]
    MissingDisplayOperand {
        /// The display keyword as written.
        keyword: String,
        /// What followed the keyword.
        found:   Found,
        /// Index of the keyword token.
        index:   usize,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An assignment target was expected but something else was found.
    #[error("Error on line {line}: Expected identifier at token {index}, found {found}.")]
    ExpectedIdentifier {
        /// What was found instead.
        found: Found,
        /// Index of the offending token.
        index: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An identifier at statement start was not followed by `=`.
    #[error("Error on line {line}: Expected '=' after '{name}' at token {index}, found {found}.")]
    ExpectedAssignment {
        /// The assignment target.
        name:  String,
        /// What followed the target.
        found: Found,
        /// Index of the target token.
        index: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `=` was not followed by a number, string or identifier.
    #[error("Error on line {line}: Assignment to '{name}' at token {index} is missing a value, found {found}.")]
    MissingAssignmentValue {
        /// The assignment target.
        name:  String,
        /// What followed the `=`.
        found: Found,
        /// Index of the target token.
        index: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl SyntaxError {
    /// Index of the token the failed statement started at.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::MissingDisplayOperand { index, .. }
            | Self::ExpectedIdentifier { index, .. }
            | Self::ExpectedAssignment { index, .. }
            | Self::MissingAssignmentValue { index, .. } => *index,
        }
    }
}

/// What the parser found where it expected something else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A token, described as `KIND 'lexeme'`.
    Token(String),
    /// The token sequence ran out.
    EndOfInput,
}

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(token) => f.write_str(token),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

impl From<Option<&Token>> for Found {
    fn from(token: Option<&Token>) -> Self {
        token.map_or(Self::EndOfInput,
                     |token| Self::Token(format!("{} '{}'", token.kind, token.lexeme)))
    }
}
