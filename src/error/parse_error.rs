use crate::interpreter::lexer::TokenKind;

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One specific kind of token, e.g. the `;` closing an assignment.
    Token(TokenKind),
    /// The start of a primary expression: `(`, a literal or an identifier.
    Primary,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(kind) => kind.fmt(f),
            Self::Primary => f.write_str("'(', a literal or an identifier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token of the wrong kind.
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: Expected,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// The exact text of the token actually found.
        lexeme:   String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input before the current rule was complete.
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: Expected,
        /// The line of the last token in the input.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    lexeme,
                                    line, } => write!(f,
                                                      "Unexpected token `{lexeme}` on line {line}: expected {expected}, found {found}."),
            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Unexpected end of input on line {line}: expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
