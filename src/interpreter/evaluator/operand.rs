use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates an operand token.
    ///
    /// - Integer and float literals become [`Value::Number`].
    /// - String literals become [`Value::Text`] with the surrounding quotes
    ///   removed.
    /// - Identifiers evaluate to their current value, or [`Value::Absent`]
    ///   if they were never assigned.
    ///
    /// # Errors
    /// - `NumberOutOfRange` if a numeric literal does not fit a finite `f64`.
    /// - `MalformedString` if a string literal is missing a quote.
    /// - `UnsupportedOperand` for any other kind of token.
    pub fn eval_operand(&self, token: &Token) -> EvalResult<Value> {
        match token.kind {
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral => eval_number(token),
            TokenKind::StringLiteral => eval_string(token),
            TokenKind::Identifier => {
                Ok(self.get_variable(&token.lexeme).cloned().unwrap_or(Value::Absent))
            },
            kind => Err(RuntimeError::UnsupportedOperand { kind:   kind.to_string(),
                                                           lexeme: token.lexeme.clone(),
                                                           line:   token.line, }),
        }
    }
}

fn eval_number(token: &Token) -> EvalResult<Value> {
    let n: f64 = token.lexeme.parse().map_err(|_| RuntimeError::InvalidNumber {
                                           literal: token.lexeme.clone(),
                                           line: token.line,
                                       })?;

    if !n.is_finite() {
        return Err(RuntimeError::NumberOutOfRange { literal: token.lexeme.clone(),
                                                    line:    token.line, });
    }

    Ok(Value::Number(n))
}

fn eval_string(token: &Token) -> EvalResult<Value> {
    token.lexeme
         .strip_prefix('"')
         .and_then(|rest| rest.strip_suffix('"'))
         .map(Value::from)
         .ok_or_else(|| RuntimeError::MalformedString { literal: token.lexeme.clone(),
                                                        line:    token.line, })
}
