/// The evaluator module executes parsed statements.
///
/// The evaluator walks the statement list, keeps the variable environment of
/// the run and produces the program output. A statement that fails becomes
/// an output line instead of stopping the run.
///
/// # Responsibilities
/// - Evaluates operand tokens into runtime values.
/// - Executes display, assignment and break statements.
/// - Isolates per-statement failures.
pub mod evaluator;
/// The lexer module tokenizes source code for further processing.
///
/// The lexer (scanner) reads the raw source text and produces a sequence of
/// tokens: keywords, identifiers, literals, operators, punctuators and
/// unknown fragments. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans and
///   line numbers.
/// - Applies the configured keyword, operator and identifier rules.
/// - Reports lexical errors for invalid or malformed input without stopping.
pub mod lexer;
/// The parser module builds the statement list from tokens.
///
/// The parser recognises display, assignment and break statements and skips
/// anything else one token at a time.
///
/// # Responsibilities
/// - Converts tokens into [`Statement`](crate::ast::Statement) nodes.
/// - Raises a syntax error for a display or assignment that starts but does
///   not finish, keeping what was parsed before it.
/// - Terminates on any input.
pub mod parser;
/// The token model shared by every stage.
pub mod token;
/// Structural checks over a token sequence.
///
/// Independent, advisory passes that flag misplaced operators, malformed
/// return sites, unterminated strings and missing program brackets.
pub mod validator;
/// The value module defines the runtime data type for evaluation.
pub mod value;
