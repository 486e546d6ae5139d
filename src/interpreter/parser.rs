/// Parser entry point and the parse outcome.
///
/// Drives statement recognition over the whole token sequence and guarantees
/// termination on any input.
pub mod core;

/// Statement recognition.
///
/// Recognises the display, assignment and break forms at a single cursor
/// position.
pub mod statement;
