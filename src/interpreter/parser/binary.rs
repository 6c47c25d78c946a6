use crate::interpreter::{
    evaluator::core::Context,
    operator::token_to_binary_operator,
    parser::{
        core::{ParseResult, TokenStream},
        unary::parse_factor,
    },
    value::Integer,
};

/// Parses and evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`, so `8 - 5 - 2` is
/// `(8 - 5) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `context`: Evaluation context.
///
/// # Returns
/// The folded value of the whole chain.
pub fn parse_additive(tokens: &mut TokenStream<'_>, context: &mut Context) -> ParseResult<Integer> {
    let mut left = parse_multiplicative(tokens, context)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && op.is_additive()
    {
        tokens.next();
        let right = parse_multiplicative(tokens, context)?;
        left = context.eval_binary_op(op, left, right, token.line)?;
    }
    Ok(left)
}

/// Parses and evaluates multiplication.
///
/// The rule is: `multiplicative := factor ("*" factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `context`: Evaluation context.
///
/// # Returns
/// The folded product.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>,
                            context: &mut Context)
                            -> ParseResult<Integer> {
    let mut left = parse_factor(tokens, context)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && !op.is_additive()
    {
        tokens.next();
        let right = parse_factor(tokens, context)?;
        left = context.eval_binary_op(op, left, right, token.line)?;
    }
    Ok(left)
}
