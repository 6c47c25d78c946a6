/// Shared parsing machinery.
///
/// Defines the token stream with its one-token lookahead, the result type of
/// every grammar rule, and the entry point for expressions.
pub mod core;

/// Unary-level rules.
///
/// Handles sign runs in front of a primary and the primaries themselves:
/// groupings, literals and variable references.
pub mod unary;

/// Binary operator rules.
///
/// Implements the left-associative folds for `+`/`-` and `*`.
pub mod binary;

/// Statement rules.
///
/// Implements assignments and the program as a sequence of them.
pub mod statement;
