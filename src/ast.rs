use std::fmt;

use crate::interpreter::token::Token;

/// A statement recognised by the parser.
///
/// Operands are single tokens: a number, a string or an identifier. The
/// grammar has no operator expressions, so an operand is never more than one
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `Display <operand>`: appends the operand's value to the output.
    Display {
        /// The operand token.
        operand: Token,
    },
    /// `<name> = <operand>`: stores the operand's value under `name`.
    Assignment {
        /// The variable being assigned.
        name:    String,
        /// The operand token.
        operand: Token,
        /// Line number in the source code.
        line:    usize,
    },
    /// `Broke`: a marker in the output. It does not change control flow.
    Break {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Line number the statement starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Display { operand } => operand.line,
            Self::Assignment { line, .. } | Self::Break { line } => *line,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display { operand } => write!(f, "DisplayStatement({operand})"),
            Self::Assignment { name, operand, .. } => {
                write!(f, "AssignmentStatement({name}, {operand})")
            },
            Self::Break { .. } => f.write_str("BreakStatement"),
        }
    }
}
