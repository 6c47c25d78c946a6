use crate::interpreter::lexer::TokenKind;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

impl BinaryOperator {
    /// Returns `true` for the operators folded by `expr`, i.e. `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

/// Unary operators applied by a sign run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Negate,
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token kind that does not denote one.
///
/// # Example
/// ```
/// use minicalc::interpreter::{
///     lexer::TokenKind,
///     operator::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Multiply),
///            Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        _ => None,
    }
}
