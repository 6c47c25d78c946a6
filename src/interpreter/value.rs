use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The single value type of the language: a 32-bit signed integer.
pub type Integer = i32;

/// Parses the text of a literal token into its value.
///
/// The scanner only lets decimal digit runs through, so the only way this can
/// fail is a value beyond [`Integer::MAX`].
///
/// # Errors
/// Returns [`RuntimeError::LiteralTooLarge`] if the literal does not fit.
///
/// # Examples
/// ```
/// use minicalc::interpreter::value::parse_literal;
///
/// assert_eq!(parse_literal("42", 1).unwrap(), 42);
/// assert!(parse_literal("2147483648", 1).is_err());
/// ```
pub fn parse_literal(text: &str, line: usize) -> EvalResult<Integer> {
    text.parse()
        .map_err(|_| RuntimeError::LiteralTooLarge { literal: text.to_string(),
                                                     line })
}
