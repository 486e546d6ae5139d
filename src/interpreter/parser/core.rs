use std::iter::Peekable;

use log::{debug, trace, warn};

use crate::{
    ast::Statement,
    config::Config,
    error::SyntaxError,
    interpreter::{parser::statement::parse_statement, token::Token},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// The result of parsing a whole token sequence.
///
/// A syntax error does not throw away the statements recognised before it:
/// the caller still gets them alongside the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every token was consumed.
    Complete(Vec<Statement>),
    /// Parsing stopped at a syntax error.
    Aborted {
        /// Statements parsed before the error.
        statements: Vec<Statement>,
        /// The error that stopped parsing.
        error:      SyntaxError,
    },
}

impl ParseOutcome {
    /// The statements parsed, whether or not parsing completed.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        match self {
            Self::Complete(statements) | Self::Aborted { statements, .. } => statements,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&SyntaxError> {
        match self {
            Self::Complete(_) => None,
            Self::Aborted { error, .. } => Some(error),
        }
    }

    /// Splits the outcome into its statements and its error, if any.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Statement>, Option<SyntaxError>) {
        match self {
            Self::Complete(statements) => (statements, None),
            Self::Aborted { statements, error } => (statements, Some(error)),
        }
    }
}

/// Parses a token sequence into a flat statement list.
///
/// At each position the display, assignment and break forms are tried in
/// that order. When none matches, the cursor moves past one token without a
/// diagnostic. Every step therefore consumes at least one token, so parsing
/// finishes in at most as many steps as there are tokens. `SPACE` tokens are
/// ignored.
///
/// # Parameters
/// - `tokens`: The scanned token sequence.
/// - `config`: Supplies the display and break keywords.
///
/// # Returns
/// [`ParseOutcome::Complete`] when every token was consumed, or
/// [`ParseOutcome::Aborted`] with the statements parsed so far when a display
/// or assignment is malformed.
///
/// # Example
/// ```
/// use legoc::{
///     config::Config,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let config = Config::default();
/// let tokens = scan("x = 5 Display x", &config).tokens;
/// let outcome = parse(&tokens, &config);
///
/// assert_eq!(outcome.statements().len(), 2);
/// assert!(outcome.error().is_none());
/// ```
#[must_use]
pub fn parse(tokens: &[Token], config: &Config) -> ParseOutcome {
    let mut iter = tokens.iter().enumerate().filter(|(_, token)| !token.is_trivia()).peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        match parse_statement(&mut iter, config) {
            Ok(Some(statement)) => {
                trace!("parsed {statement}");
                statements.push(statement);
            },
            Ok(None) => skip(&mut iter),
            Err(error) => {
                warn!("parsing aborted after {} statements: {error}", statements.len());
                return ParseOutcome::Aborted { statements, error };
            },
        }
    }

    debug!("parsed {} statements", statements.len());
    ParseOutcome::Complete(statements)
}

/// Moves past one token that starts no statement.
fn skip<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = (usize, &'a Token)>
{
    if let Some((index, token)) = tokens.next() {
        trace!("skipped {token} at token {index}");
    }
}
