use std::{fmt, ops::Range};

/// The category a scanned unit belongs to.
///
/// Later stages switch on these variants, so the set is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A word found in the configured keyword set, such as `Display`.
    Keyword,
    /// A word accepted by the identifier policy, such as `brick_count`.
    Identifier,
    /// A run of digits without a decimal point, such as `42`.
    IntegerLiteral,
    /// A run of digits with one decimal point, such as `4.2`.
    FloatLiteral,
    /// A double-quoted string including its quotes, such as `"hi"`.
    StringLiteral,
    /// A single operator character.
    Operator,
    /// One of `( ) { } ;`.
    Punctuator,
    /// A literal space, only produced when space tokens are enabled.
    Space,
    /// Anything the scanner could not classify. Always paired with a
    /// diagnostic.
    Unknown,
}

impl TokenKind {
    /// Returns the name this kind is shown under in the Lego-C analyzer.
    ///
    /// Literals carry brick-themed names; every other kind uses its stable
    /// identifier.
    ///
    /// # Example
    /// ```
    /// use legoc::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::IntegerLiteral.lego_name(), "Linklit");
    /// assert_eq!(TokenKind::Keyword.lego_name(), "KEYWORD");
    /// ```
    #[must_use]
    pub const fn lego_name(self) -> &'static str {
        match self {
            Self::IntegerLiteral => "Linklit",
            Self::FloatLiteral => "Bubblelit",
            Self::StringLiteral => "Piecelit",
            other => other.as_str(),
        }
    }

    /// The stable upper-case identifier of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::IntegerLiteral => "INTEGER_LITERAL",
            Self::FloatLiteral => "FLOAT_LITERAL",
            Self::StringLiteral => "STRING_LITERAL",
            Self::Operator => "OPERATOR",
            Self::Punctuator => "PUNCTUATOR",
            Self::Space => "SPACE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scanned token.
///
/// Tokens are produced once by the scanner and only read afterwards. They
/// never refer to each other; their order in the token sequence is the only
/// relationship between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's category.
    pub kind:   TokenKind,
    /// The exact source text the token was built from.
    pub lexeme: String,
    /// Byte range of the lexeme in the source.
    pub span:   Range<usize>,
    /// 1-based line the token starts on.
    pub line:   usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Range<usize>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               span,
               line }
    }

    /// Identifiers and numeric literals: the only valid neighbours of an
    /// operator.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self.kind,
                 TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::FloatLiteral)
    }

    /// Tokens that can stand as the operand of a display or the right-hand
    /// side of an assignment: a number, a string or an identifier.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.kind,
                 TokenKind::IntegerLiteral
                 | TokenKind::FloatLiteral
                 | TokenKind::StringLiteral
                 | TokenKind::Identifier)
    }

    /// Presentation-only tokens that every later stage ignores.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Space)
    }

    /// Returns `true` if this is an operator token spelled `op`.
    #[must_use]
    pub fn is_operator(&self, op: char) -> bool {
        self.kind == TokenKind::Operator && self.lexeme.chars().eq([op])
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}
