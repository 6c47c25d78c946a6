use crate::{
    error::Expected,
    interpreter::{
        evaluator::core::Context,
        lexer::TokenKind,
        operator::UnaryOperator,
        parser::core::{ParseResult, TokenStream, parse_expression},
        value::{Integer, parse_literal},
    },
};

/// Parses and evaluates a factor: a run of prefix signs and a primary.
///
/// Every `+` and `-` in front of the primary is consumed. Only the number of
/// `-` signs matters: an odd count negates the primary once, an even count
/// leaves it alone. So `---x` is `-x` and `-+-x` is `x`.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-")* primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `context`: Evaluation context.
///
/// # Returns
/// The signed value of the primary.
pub(crate) fn parse_factor(tokens: &mut TokenStream<'_>, context: &mut Context) -> ParseResult<Integer> {
    let mut negate = false;
    let mut sign_line = None;
    while let Some(token) = tokens.peek()
          && matches!(token.kind, TokenKind::Plus | TokenKind::Minus)
    {
        tokens.next();
        sign_line.get_or_insert(token.line);
        if token.kind == TokenKind::Minus {
            negate = !negate;
        }
    }

    let value = parse_primary(tokens, context)?;
    match sign_line {
        Some(line) if negate => Ok(context.eval_unary_op(UnaryOperator::Negate, value, line)?),
        _ => Ok(value),
    }
}

/// Parses and evaluates a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | LITERAL
///              | IDENTIFIER
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary.
/// - `context`: Evaluation context.
///
/// # Returns
/// The value of the primary, or an error if the next token cannot start one.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>, context: &mut Context) -> ParseResult<Integer> {
    match tokens.peek_kind() {
        Some(TokenKind::LeftParen) => parse_grouping(tokens, context),
        Some(TokenKind::Literal) => parse_literal_value(tokens),
        Some(TokenKind::Identifier) => parse_variable(tokens, context),
        _ => Err(tokens.unexpected(Expected::Primary).into()),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The value of the inner expression.
fn parse_grouping(tokens: &mut TokenStream<'_>, context: &mut Context) -> ParseResult<Integer> {
    tokens.expect(TokenKind::LeftParen)?;
    let value = parse_expression(tokens, context)?;
    tokens.expect(TokenKind::RightParen)?;
    Ok(value)
}

/// Parses a literal token into its value.
fn parse_literal_value(tokens: &mut TokenStream<'_>) -> ParseResult<Integer> {
    let token = tokens.expect(TokenKind::Literal)?;
    Ok(parse_literal(&token.text, token.line)?)
}

/// Reads the current value of the variable named by an identifier token.
///
/// The variable must have been assigned by an earlier statement.
fn parse_variable(tokens: &mut TokenStream<'_>, context: &Context) -> ParseResult<Integer> {
    let token = tokens.expect(TokenKind::Identifier)?;
    Ok(context.eval_variable(&token.text, token.line)?)
}
