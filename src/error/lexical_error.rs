#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexicalError {
    /// A numeric literal started with `0` and continued with more digits.
    MalformedLiteral {
        /// The whole digit run, e.g. `007`.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A character that is not part of the language, reported in strict mode
    /// only.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLiteral { literal, line } => write!(f,
                                                               "Malformed literal `{literal}` on line {line}: leading zeros are not allowed."),
            Self::UnrecognizedCharacter { character, line } => {
                write!(f, "Unrecognized character `{character}` on line {line}.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
