use crate::{
    config::OverflowMode,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        operator::{BinaryOperator, UnaryOperator},
        value::Integer,
    },
};

/// Applies a binary operator to two integers.
///
/// Under [`OverflowMode::Wrapping`] this never fails.
///
/// # Errors
/// Returns [`RuntimeError::Overflow`] under [`OverflowMode::Checked`] when the
/// result does not fit.
///
/// # Examples
/// ```
/// use minicalc::{
///     config::OverflowMode,
///     interpreter::{evaluator::arithmetic::eval_binary, operator::BinaryOperator},
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 4, 6, OverflowMode::Wrapping, 1).unwrap(),
///            -2);
/// assert_eq!(eval_binary(BinaryOperator::Add, i32::MAX, 1, OverflowMode::Wrapping, 1).unwrap(),
///            i32::MIN);
/// assert!(eval_binary(BinaryOperator::Add, i32::MAX, 1, OverflowMode::Checked, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   lhs: Integer,
                   rhs: Integer,
                   mode: OverflowMode,
                   line: usize)
                   -> EvalResult<Integer> {
    match mode {
        OverflowMode::Wrapping => Ok(match op {
                                      BinaryOperator::Add => lhs.wrapping_add(rhs),
                                      BinaryOperator::Sub => lhs.wrapping_sub(rhs),
                                      BinaryOperator::Mul => lhs.wrapping_mul(rhs),
                                  }),
        OverflowMode::Checked => {
            let result = match op {
                BinaryOperator::Add => lhs.checked_add(rhs),
                BinaryOperator::Sub => lhs.checked_sub(rhs),
                BinaryOperator::Mul => lhs.checked_mul(rhs),
            };
            result.ok_or(RuntimeError::Overflow { line })
        },
    }
}

/// Applies a unary operator to an integer.
///
/// Negating [`Integer::MIN`] is the only case that can overflow.
///
/// # Errors
/// Returns [`RuntimeError::Overflow`] under [`OverflowMode::Checked`] when the
/// result does not fit.
pub fn eval_unary(op: UnaryOperator,
                  value: Integer,
                  mode: OverflowMode,
                  line: usize)
                  -> EvalResult<Integer> {
    match (op, mode) {
        (UnaryOperator::Negate, OverflowMode::Wrapping) => Ok(value.wrapping_neg()),
        (UnaryOperator::Negate, OverflowMode::Checked) => {
            value.checked_neg().ok_or(RuntimeError::Overflow { line })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_follows_twos_complement() {
        let mode = OverflowMode::Wrapping;
        assert_eq!(eval_binary(BinaryOperator::Sub, Integer::MIN, 1, mode, 1), Ok(Integer::MAX));
        assert_eq!(eval_binary(BinaryOperator::Mul, 65536, 65536, mode, 1), Ok(0));
        assert_eq!(eval_unary(UnaryOperator::Negate, Integer::MIN, mode, 1), Ok(Integer::MIN));
    }

    #[test]
    fn checked_reports_the_line() {
        let mode = OverflowMode::Checked;
        assert_eq!(eval_binary(BinaryOperator::Mul, 65536, 65536, mode, 7),
                   Err(RuntimeError::Overflow { line: 7 }));
        assert_eq!(eval_unary(UnaryOperator::Negate, Integer::MIN, mode, 2),
                   Err(RuntimeError::Overflow { line: 2 }));
        assert_eq!(eval_unary(UnaryOperator::Negate, 5, mode, 2), Ok(-5));
    }
}
