use log::{debug, trace};
use logos::Logos;

use crate::{
    config::{Config, IdentifierPolicy},
    error::Diagnostic,
    interpreter::token::{Token, TokenKind},
};

/// Longest identifier the strict policy accepts.
pub const MAX_IDENTIFIER_LEN: usize = 20;

/// The raw shape of a lexeme, before any configuration is applied.
///
/// The shapes are fixed by the grammar; whether a word is a keyword or an
/// identifier, or whether a symbol is an operator, depends on the active
/// [`Config`] and is decided by the [`Scanner`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum Shape {
    /// A letter followed by letters, digits or underscores.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Word,
    /// Digits with at most one embedded `.`. A second `.` ends the run.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// `"..."`, possibly spanning lines.
    #[regex(r#""[^"]*""#, count_newlines, allow_greedy = true)]
    Str,
    /// A `"` with no closing quote before the end of input.
    #[regex(r#""[^"]*"#, count_newlines, allow_greedy = true)]
    UnterminatedStr,
    /// `## comments` run to the end of the line.
    #[regex(r"##[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", count_newlines)]
    Whitespace,
    /// Every character that may be an operator or a punctuator under some
    /// configuration.
    #[regex(r"[+\-*/~=(){};]")]
    Symbol,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics. Incremented whenever a
/// whitespace run or a string literal crosses a newline.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

fn count_newlines(lex: &mut logos::Lexer<Shape>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// The characters that are punctuators, independent of configuration.
const PUNCTUATORS: &[char] = &['(', ')', '{', '}', ';'];

/// The output of one scan: every token in source order plus the lexical
/// diagnostics raised along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens:      Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts source text into tokens.
///
/// Scanning is total: input that cannot be classified becomes an
/// [`TokenKind::Unknown`] token plus a diagnostic, and scanning carries on.
/// The scanner holds nothing beyond the configuration, so scanning the same
/// text twice gives identical results.
///
/// # Example
/// ```
/// use legoc::{
///     config::Config,
///     interpreter::{lexer::Scanner, token::TokenKind},
/// };
///
/// let config = Config::default();
/// let scan = Scanner::new(&config).scan("Display \"hi\"");
///
/// let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Keyword, TokenKind::StringLiteral]);
/// assert!(scan.diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'c> {
    config: &'c Config,
}

impl<'c> Scanner<'c> {
    #[must_use]
    pub const fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Scans `source` left to right, without backtracking.
    #[must_use]
    pub fn scan(&self, source: &str) -> Scan {
        let mut scan = Scan::default();
        let mut lexer = Shape::lexer(source);

        loop {
            let line = lexer.extras.line;
            let Some(shape) = lexer.next() else {
                break;
            };
            let span = lexer.span();
            let slice = lexer.slice();

            match shape {
                Ok(Shape::Word) => self.push_word(&mut scan, slice, span, line),
                Ok(Shape::Number) => {
                    let kind = if slice.contains('.') {
                        TokenKind::FloatLiteral
                    } else {
                        TokenKind::IntegerLiteral
                    };
                    scan.tokens.push(Token::new(kind, slice, span, line));
                },
                Ok(Shape::Str) => {
                    scan.tokens.push(Token::new(TokenKind::StringLiteral, slice, span, line));
                },
                Ok(Shape::UnterminatedStr) => {
                    scan.diagnostics
                        .push(Diagnostic::lexical(format!("Missing closing quote in string: {slice}"),
                                                  span.start,
                                                  line));
                    scan.tokens.push(Token::new(TokenKind::Unknown, slice, span, line));
                },
                Ok(Shape::Whitespace) => {
                    if self.config.emit_space_tokens {
                        push_spaces(&mut scan, slice, span.start, line);
                    }
                },
                Ok(Shape::Symbol) => self.push_symbol(&mut scan, slice, span.start, line),
                Ok(Shape::Comment) => {},
                Err(()) => push_unknown(&mut scan, slice, span.start, line),
            }
        }

        for token in &scan.tokens {
            trace!("scanned {token} at {:?}", token.span);
        }
        debug!("scanned {} tokens with {} lexical diagnostics",
               scan.tokens.len(),
               scan.diagnostics.len());

        scan
    }

    /// Classifies a word as a keyword, an identifier or, when the identifier
    /// policy rejects it, an unknown token with a diagnostic.
    fn push_word(&self, scan: &mut Scan, word: &str, span: std::ops::Range<usize>, line: usize) {
        let kind = if self.config.keywords.contains(word) {
            TokenKind::Keyword
        } else {
            match self.identifier_violation(word) {
                None => TokenKind::Identifier,
                Some(reason) => {
                    scan.diagnostics
                        .push(Diagnostic::lexical(format!("Identifier '{word}' {reason}."),
                                                  span.start,
                                                  line));
                    TokenKind::Unknown
                },
            }
        };

        scan.tokens.push(Token::new(kind, word, span, line));
    }

    /// Returns why `word` is not a valid identifier, or `None` if it is.
    fn identifier_violation(&self, word: &str) -> Option<&'static str> {
        if self.config.identifier_policy == IdentifierPolicy::Permissive {
            return None;
        }

        if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            Some("starts with an uppercase letter")
        } else if word.len() > MAX_IDENTIFIER_LEN {
            Some("is longer than 20 characters")
        } else if word.ends_with('_') {
            Some("ends with an underscore")
        } else {
            None
        }
    }

    fn push_symbol(&self, scan: &mut Scan, symbol: &str, offset: usize, line: usize) {
        let Some(c) = symbol.chars().next() else {
            return;
        };
        let span = offset..offset + c.len_utf8();

        if self.config.operators.contains(c) {
            scan.tokens.push(Token::new(TokenKind::Operator, symbol, span, line));
        } else if PUNCTUATORS.contains(&c) {
            scan.tokens.push(Token::new(TokenKind::Punctuator, symbol, span, line));
        } else {
            push_unknown(scan, symbol, offset, line);
        }
    }
}

/// Emits one `SPACE` token per literal space in a whitespace run.
fn push_spaces(scan: &mut Scan, run: &str, offset: usize, mut line: usize) {
    for (i, c) in run.char_indices() {
        match c {
            ' ' => {
                let start = offset + i;
                scan.tokens.push(Token::new(TokenKind::Space, " ", start..start + 1, line));
            },
            '\n' => line += 1,
            _ => {},
        }
    }
}

/// Emits one `UNKNOWN` token and one diagnostic per character of `fragment`.
fn push_unknown(scan: &mut Scan, fragment: &str, offset: usize, line: usize) {
    for (i, c) in fragment.char_indices() {
        let start = offset + i;
        scan.diagnostics
            .push(Diagnostic::lexical(format!("Unrecognized character '{c}' at position {start}."),
                                      start,
                                      line));
        scan.tokens.push(Token::new(TokenKind::Unknown, c, start..start + c.len_utf8(), line));
    }
}

/// Scans `source` with `config`.
///
/// Shorthand for `Scanner::new(config).scan(source)`.
#[must_use]
pub fn scan(source: &str, config: &Config) -> Scan {
    Scanner::new(config).scan(source)
}
