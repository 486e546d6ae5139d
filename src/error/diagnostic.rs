use std::fmt;

/// The pipeline stage that raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Raised by the scanner.
    Lexical,
    /// Raised by the syntax validator.
    Structural,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => f.write_str("Lexical error"),
            Self::Structural => f.write_str("Syntax error"),
        }
    }
}

/// Where in the program a diagnostic points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A byte offset into the source text.
    Offset {
        /// Byte offset of the offending character.
        offset: usize,
        /// 1-based source line.
        line:   usize,
    },
    /// An index into the token sequence.
    Token {
        /// Index of the offending token.
        index: usize,
        /// 1-based source line of that token.
        line:  usize,
    },
    /// The program as a whole, such as a missing closing keyword in an
    /// empty program.
    Program,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset { offset, line } => write!(f, "line {line}, offset {offset}"),
            Self::Token { index, line } => write!(f, "line {line}, token {index}"),
            Self::Program => f.write_str("program"),
        }
    }
}

/// A human-readable, non-fatal anomaly report.
///
/// Diagnostics are append-only: once created they are never changed, merged
/// or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The stage that raised it.
    pub stage:    Stage,
    /// What went wrong.
    pub message:  String,
    /// Where it went wrong.
    pub location: Location,
}

impl Diagnostic {
    /// Creates a scanner diagnostic anchored at a byte offset.
    #[must_use]
    pub fn lexical(message: impl Into<String>, offset: usize, line: usize) -> Self {
        Self { stage:    Stage::Lexical,
               message:  message.into(),
               location: Location::Offset { offset, line }, }
    }

    /// Creates a validator diagnostic anchored at a token index.
    #[must_use]
    pub fn structural(message: impl Into<String>, index: usize, line: usize) -> Self {
        Self { stage:    Stage::Structural,
               message:  message.into(),
               location: Location::Token { index, line }, }
    }

    /// Creates a validator diagnostic about the program as a whole.
    #[must_use]
    pub fn program(message: impl Into<String>) -> Self {
        Self { stage:    Stage::Structural,
               message:  message.into(),
               location: Location::Program, }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.stage, self.location, self.message)
    }
}
