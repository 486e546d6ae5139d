/// Core evaluation logic and the run loop.
///
/// Contains the interpreter, its environment and the per-statement failure
/// boundary.
pub mod core;

/// Operand evaluation.
///
/// Turns a single operand token into a [`Value`](crate::interpreter::value::Value).
pub mod operand;
