use std::collections::HashMap;

use log::{debug, trace};

use crate::{ast::Statement, error::RuntimeError, interpreter::value::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The line a break statement appends to the output.
pub const BREAK_LINE: &str = "Broke";

/// Prefix of the output line a failed statement is turned into.
pub const RUNTIME_ERROR_PREFIX: &str = "Runtime error: ";

/// Executes statements and collects their output.
///
/// An interpreter owns the environment of exactly one run. It starts empty,
/// is changed only by assignments and is dropped with the interpreter, so no
/// two runs ever share variables.
///
/// # Example
/// ```
/// use legoc::{
///     config::Config,
///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse, value::Value},
/// };
///
/// let config = Config::default();
/// let tokens = scan("x = 5 Display x", &config).tokens;
/// let outcome = parse(&tokens, &config);
///
/// let mut interpreter = Interpreter::new();
/// let output = interpreter.run(outcome.statements());
///
/// assert_eq!(output, ["5.0"]);
/// assert_eq!(interpreter.get_variable("x"), Some(&Value::Number(5.0)));
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: HashMap<String, Value>,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `statements` in order and returns the output log.
    ///
    /// A statement that fails adds a line starting with
    /// [`RUNTIME_ERROR_PREFIX`] and execution carries on with the next one.
    pub fn run(&mut self, statements: &[Statement]) -> Vec<String> {
        let mut output = Vec::new();

        for statement in statements {
            trace!("executing {statement}");

            match self.eval_statement(statement) {
                Ok(Some(line)) => output.push(line),
                Ok(None) => {},
                Err(e) => output.push(format!("{RUNTIME_ERROR_PREFIX}{e}")),
            }
        }

        debug!("executed {} statements into {} output lines",
               statements.len(),
               output.len());

        output
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// The output line the statement produces, if any.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<String>> {
        match statement {
            Statement::Display { operand } => Ok(Some(self.eval_operand(operand)?.to_string())),
            Statement::Assignment { name, operand, .. } => {
                let value = self.eval_operand(operand)?;
                self.environment.insert(name.clone(), value);
                Ok(None)
            },
            Statement::Break { .. } => Ok(Some(BREAK_LINE.to_string())),
        }
    }

    /// Returns the value last assigned to `name`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.environment.get(name)
    }

    /// The variables assigned so far in this run.
    #[must_use]
    pub const fn environment(&self) -> &HashMap<String, Value> {
        &self.environment
    }
}
