use log::debug;

use crate::{
    config::Config,
    error::Diagnostic,
    interpreter::token::{Token, TokenKind},
};

/// One independent structural check over a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Operators must sit between operands.
    OperatorPlacement,
    /// The return keyword must be followed by an identifier or an integer.
    ReturnValue,
    /// Unknown tokens holding a stray `"`.
    UnterminatedString,
    /// The program must open and close with the configured keywords.
    ProgramBrackets,
}

impl Check {
    /// Every available check, in reporting order.
    pub const ALL: [Self; 4] = [Self::OperatorPlacement,
                                Self::ReturnValue,
                                Self::UnterminatedString,
                                Self::ProgramBrackets];
}

/// Runs a set of [`Check`]s over a token sequence.
///
/// Checks are advisory. They never modify tokens, never stop each other and
/// never stop the parser or the interpreter from running on the same tokens.
/// `SPACE` tokens are invisible to every check, but reported indices always
/// refer to the full token sequence.
///
/// # Example
/// ```
/// use legoc::{
///     config::Config,
///     interpreter::{lexer::scan, validator::Validator},
/// };
///
/// let config = Config::default();
/// let tokens = scan("5 + + 3", &config).tokens;
/// let diagnostics = Validator::new(&config).validate(&tokens);
///
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Validator<'c> {
    config: &'c Config,
    checks: Vec<Check>,
}

impl<'c> Validator<'c> {
    /// Selects the checks the analysis pipeline runs.
    ///
    /// Unterminated strings are already reported by the scanner, so that
    /// check is left out. Program brackets are checked only when the
    /// configuration asks for it.
    #[must_use]
    pub fn new(config: &'c Config) -> Self {
        let mut checks = vec![Check::OperatorPlacement, Check::ReturnValue];
        if config.enforce_program_brackets {
            checks.push(Check::ProgramBrackets);
        }

        Self { config, checks }
    }

    /// Runs exactly `checks`, in the given order.
    #[must_use]
    pub fn with_checks(config: &'c Config, checks: impl IntoIterator<Item = Check>) -> Self {
        Self { config,
               checks: checks.into_iter().collect() }
    }

    /// Runs every selected check and merges their diagnostics in check order.
    #[must_use]
    pub fn validate(&self, tokens: &[Token]) -> Vec<Diagnostic> {
        let significant: Vec<(usize, &Token)> =
            tokens.iter().enumerate().filter(|(_, token)| !token.is_trivia()).collect();

        let diagnostics: Vec<Diagnostic> =
            self.checks
                .iter()
                .flat_map(|check| match check {
                    Check::OperatorPlacement => operator_placement(&significant),
                    Check::ReturnValue => return_value(&significant, &self.config.return_keyword),
                    Check::UnterminatedString => unterminated_strings(&significant),
                    Check::ProgramBrackets => program_brackets(&significant,
                                                               &self.config.program_start,
                                                               &self.config.program_end),
                })
                .collect();

        debug!("validator ran {} checks and raised {} diagnostics",
               self.checks.len(),
               diagnostics.len());

        diagnostics
    }
}

/// Flags operators with no operand on their left, or with neither an operand
/// nor another operator on their right.
///
/// In a run of operators only the first one accepts its right neighbour, so
/// `5 + + 3` is reported once, on the second `+`.
fn operator_placement(tokens: &[(usize, &Token)]) -> Vec<Diagnostic> {
    tokens.iter()
          .enumerate()
          .filter(|(_, (_, token))| token.kind == TokenKind::Operator)
          .filter(|&(i, _)| {
              let left = i.checked_sub(1).map(|l| tokens[l].1);
              let right = tokens.get(i + 1).map(|(_, token)| *token);

              match (left, right) {
                  (Some(left), Some(right)) => {
                      !left.is_operand()
                      || !(right.is_operand() || right.kind == TokenKind::Operator)
                  },
                  _ => true,
              }
          })
          .map(|(_, (index, token))| {
              Diagnostic::structural(format!("Invalid operator placement near '{}' at position {index}.",
                                             token.lexeme),
                                     *index,
                                     token.line)
          })
          .collect()
}

/// Flags return keywords not immediately followed by an identifier or an
/// integer literal.
fn return_value(tokens: &[(usize, &Token)], keyword: &str) -> Vec<Diagnostic> {
    tokens.iter()
          .enumerate()
          .filter(|(_, (_, token))| token.kind == TokenKind::Keyword && token.lexeme == keyword)
          .filter(|&(i, _)| {
              !tokens.get(i + 1).is_some_and(|(_, next)| {
                                    matches!(next.kind,
                                             TokenKind::Identifier | TokenKind::IntegerLiteral)
                                })
          })
          .map(|(_, (index, token))| {
              Diagnostic::structural(format!("Invalid return value after '{keyword}' at position {index}."),
                                     *index,
                                     token.line)
          })
          .collect()
}

fn unterminated_strings(tokens: &[(usize, &Token)]) -> Vec<Diagnostic> {
    tokens.iter()
          .filter(|(_, token)| token.kind == TokenKind::Unknown && token.lexeme.contains('"'))
          .map(|(index, token)| {
              Diagnostic::structural(format!("Missing closing quote in string: {}", token.lexeme),
                                     *index,
                                     token.line)
          })
          .collect()
}

/// Requires the first token to be `start` and the last to be `end`.
fn program_brackets(tokens: &[(usize, &Token)], start: &str, end: &str) -> Vec<Diagnostic> {
    let (Some((first_index, first)), Some((last_index, last))) = (tokens.first(), tokens.last())
    else {
        return vec![Diagnostic::program(format!("Program must start with '{start}'.")),
                    Diagnostic::program(format!("Program must end with '{end}'."))];
    };

    let mut diagnostics = Vec::new();
    if first.lexeme != start {
        diagnostics.push(Diagnostic::structural(format!("Program must start with '{start}', found '{}'.",
                                                        first.lexeme),
                                                *first_index,
                                                first.line));
    }
    if last.lexeme != end {
        diagnostics.push(Diagnostic::structural(format!("Program must end with '{end}', found '{}'.",
                                                        last.lexeme),
                                                *last_index,
                                                last.line));
    }

    diagnostics
}

/// Runs every available check.
#[must_use]
pub fn validate_all(tokens: &[Token], config: &Config) -> Vec<Diagnostic> {
    Validator::with_checks(config, Check::ALL).validate(tokens)
}
