use std::iter::Peekable;

use crate::{
    ast::Statement,
    config::{ASSIGNMENT_OPERATOR, Config},
    error::{SyntaxError, syntax_error::Found},
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Parses a single statement at the cursor.
///
/// A statement may be one of:
/// - a display (`Display <operand>`),
/// - an assignment (`<identifier> = <operand>`),
/// - a break (`Broke`).
///
/// The forms are tried in that order. A display or an assignment that starts
/// but does not finish is a syntax error. When no form starts at the cursor,
/// nothing is consumed and `Ok(None)` is returned; the caller decides how to
/// move on.
///
/// # Parameters
/// - `tokens`: Iterator of `(index, token)` pairs, trivia already removed.
/// - `config`: Supplies the display and break keywords.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              config: &Config)
                              -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if let Some(statement) = parse_display(tokens, &config.display_keyword)? {
        return Ok(Some(statement));
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(Some(statement));
    }

    Ok(parse_break(tokens, &config.break_keyword))
}

/// Parses `Display <operand>`.
///
/// # Errors
/// `MissingDisplayOperand` if the keyword is not followed by a number,
/// string or identifier.
fn parse_display<'a, I>(tokens: &mut Peekable<I>, keyword: &str) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some((index, display)) = tokens.next_if(|(_, token)| token.lexeme == keyword) else {
        return Ok(None);
    };

    match tokens.next_if(|(_, token)| token.is_value()) {
        Some((_, operand)) => Ok(Some(Statement::Display { operand: operand.clone() })),
        None => {
            Err(SyntaxError::MissingDisplayOperand { keyword: display.lexeme.clone(),
                                                     found: peek_found(tokens),
                                                     index,
                                                     line: display.line })
        },
    }
}

/// Parses `<identifier> = <operand>`.
///
/// # Errors
/// - `ExpectedAssignment` if the identifier is not followed by `=`.
/// - `MissingAssignmentValue` if `=` is not followed by a number, string or
///   identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if !matches!(tokens.peek(), Some((_, token)) if token.kind == TokenKind::Identifier) {
        return Ok(None);
    }
    let (index, target) = parse_identifier(tokens)?;

    if tokens.next_if(|(_, token)| token.is_operator(ASSIGNMENT_OPERATOR)).is_none() {
        return Err(SyntaxError::ExpectedAssignment { name: target.lexeme.clone(),
                                                     found: peek_found(tokens),
                                                     index,
                                                     line: target.line });
    }

    match tokens.next_if(|(_, token)| token.is_value()) {
        Some((_, operand)) => Ok(Some(Statement::Assignment { name:    target.lexeme.clone(),
                                                              operand: operand.clone(),
                                                              line:    target.line, })),
        None => Err(SyntaxError::MissingAssignmentValue { name: target.lexeme.clone(),
                                                          found: peek_found(tokens),
                                                          index,
                                                          line: target.line }),
    }
}

/// Parses the break keyword. Never fails.
fn parse_break<'a, I>(tokens: &mut Peekable<I>, keyword: &str) -> Option<Statement>
    where I: Iterator<Item = (usize, &'a Token)>
{
    tokens.next_if(|(_, token)| token.lexeme == keyword)
          .map(|(_, token)| Statement::Break { line: token.line })
}

/// Consumes the next token, which must be an identifier.
///
/// # Errors
/// `ExpectedIdentifier` if the next token is anything else. The cursor only
/// moves when an identifier is found.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(usize, &'a Token)>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if let Some(identifier) = tokens.next_if(|(_, token)| token.kind == TokenKind::Identifier) {
        return Ok(identifier);
    }

    let (index, line) = tokens.peek().map_or((0, 0), |(index, token)| (*index, token.line));
    Err(SyntaxError::ExpectedIdentifier { found: peek_found(tokens),
                                          index,
                                          line })
}

fn peek_found<'a, I>(tokens: &mut Peekable<I>) -> Found
    where I: Iterator<Item = (usize, &'a Token)>
{
    Found::from(tokens.peek().map(|(_, token)| *token))
}
