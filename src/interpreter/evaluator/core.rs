use tracing::debug;

use crate::{
    config::{Config, OverflowMode},
    error::RuntimeError,
    interpreter::{
        evaluator::arithmetic::{eval_binary, eval_unary},
        operator::{BinaryOperator, UnaryOperator},
        symbols::SymbolTable,
        value::Integer,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// One `Context` lives for exactly one program run. The parser threads it
/// through every grammar rule so that values are computed, and variables
/// read and written, while the tokens are recognized.
#[derive(Debug, Default)]
pub struct Context {
    /// Bindings made so far by completed assignments.
    pub symbols:  SymbolTable,
    /// Overflow policy for every arithmetic operation of the run.
    pub overflow: OverflowMode,
}

impl Context {
    /// Creates a context with an empty symbol table.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { symbols:  SymbolTable::new(),
               overflow: config.overflow, }
    }

    /// Reads the current value of a variable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if `name` has not been
    /// assigned yet.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Integer> {
        self.symbols.resolve(name, line)
    }

    /// Binds a variable to the value of a completed assignment.
    pub fn eval_assignment(&mut self, name: &str, value: Integer, line: usize) {
        debug!(name, value, line, "assigned variable");
        self.symbols.assign(name, value);
    }

    /// Folds one binary operation under the context's overflow policy.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Overflow`] if the checked policy is active and
    /// the result does not fit.
    pub fn eval_binary_op(&self,
                          op: BinaryOperator,
                          lhs: Integer,
                          rhs: Integer,
                          line: usize)
                          -> EvalResult<Integer> {
        eval_binary(op, lhs, rhs, self.overflow, line)
    }

    /// Applies one unary operation under the context's overflow policy.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Overflow`] if the checked policy is active and
    /// the result does not fit.
    pub fn eval_unary_op(&self, op: UnaryOperator, value: Integer, line: usize) -> EvalResult<Integer> {
        eval_unary(op, value, self.overflow, line)
    }

    /// Ends the run and hands out its final bindings.
    #[must_use]
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}
