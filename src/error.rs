/// Scanning errors.
///
/// Raised while turning source text into tokens: malformed numeric literals
/// and, in strict mode, characters the language does not know.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the syntax errors raised when the token stream does not follow the
/// grammar, either because a token of the wrong kind shows up or because the
/// input ends too early.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing values: references to
/// unassigned variables, literals that do not fit, and overflow under the
/// checked policy.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::{Expected, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of a program run.
///
/// Scanning, parsing and evaluation all abort the run on their first error, so
/// a run ends with exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// The source text could not be tokenized.
    Lexical(LexicalError),
    /// The token stream did not match the grammar.
    Syntax(ParseError),
    /// A value could not be computed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for InterpretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexicalError> for InterpretError {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<ParseError> for InterpretError {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
