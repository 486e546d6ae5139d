/// Recoverable diagnostics.
///
/// Defines the record produced by the scanner and the syntax validator for
/// lexical and structural anomalies. Diagnostics are collected, never raised:
/// a run may produce any number of them and none stops the pipeline.
pub mod diagnostic;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a single
/// statement. The interpreter catches each one at the statement boundary and
/// turns it into a line of program output.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines the fatal parse-time error. Raising one aborts statement
/// recognition for the rest of the input; statements parsed before it are
/// kept.
pub mod syntax_error;

pub use diagnostic::{Diagnostic, Location, Stage};
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
