#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing values.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal does not fit in the integer type.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Arithmetic overflowed under the checked overflow policy.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Undefined variable '{name}' on line {line}.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Literal `{literal}` on line {line} is too large.")
            },
            Self::Overflow { line } => write!(f,
                                              "Integer overflow on line {line} while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
