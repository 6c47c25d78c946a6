/// Core evaluation state.
///
/// Holds the runtime context threaded through the parser: the symbol table of
/// the current run and the active overflow policy.
pub mod core;

/// Integer arithmetic.
///
/// Applies binary and unary operators under the configured overflow policy.
pub mod arithmetic;
