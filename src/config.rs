/// How arithmetic reacts when a result does not fit in an
/// [`Integer`](crate::interpreter::value::Integer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum OverflowMode {
    /// Two's-complement wrap around, e.g. `2147483647 + 1` is `-2147483648`.
    #[default]
    Wrapping,
    /// Any overflowing operation fails with
    /// [`RuntimeError::Overflow`](crate::error::RuntimeError::Overflow).
    Checked,
}

/// Options shared by the scanner and the evaluator for one run.
///
/// The default is lenient scanning with wrapping arithmetic.
///
/// # Examples
/// ```
/// use minicalc::config::{Config, OverflowMode};
///
/// let config = Config::new().with_strict(true)
///                           .with_overflow(OverflowMode::Checked);
/// assert!(config.strict);
/// assert_eq!(config.overflow, OverflowMode::Checked);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Reject characters the scanner does not recognize instead of dropping
    /// them.
    pub strict:   bool,
    /// Overflow policy for `+`, `-`, `*` and negation.
    pub overflow: OverflowMode,
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict:   false,
               overflow: OverflowMode::Wrapping, }
    }

    /// Sets strict scanning.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the overflow policy.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }
}
