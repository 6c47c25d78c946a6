use crate::interpreter::{
    evaluator::core::Context,
    lexer::TokenKind,
    parser::core::{ParseResult, TokenStream, parse_expression},
};

/// Parses and executes an assignment.
///
/// The right-hand side is evaluated completely, against the bindings made so
/// far, before the variable is written. Assigning to a name that is already
/// bound replaces its value.
///
/// Grammar: `assignment := IDENTIFIER "=" expression ";"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a statement.
/// - `context`: Evaluation context that receives the binding.
pub fn parse_assignment(tokens: &mut TokenStream<'_>, context: &mut Context) -> ParseResult<()> {
    let target = tokens.expect(TokenKind::Identifier)?;
    tokens.expect(TokenKind::Assign)?;
    let value = parse_expression(tokens, context)?;
    tokens.expect(TokenKind::Semicolon)?;
    context.eval_assignment(&target.text, value, target.line);
    Ok(())
}

/// Parses and executes a whole program.
///
/// Statements run one after another until the stream is exhausted. The first
/// failing statement stops the program; bindings made by earlier statements
/// stay in `context`.
///
/// Grammar: `program := assignment*`
pub fn parse_program(tokens: &mut TokenStream<'_>, context: &mut Context) -> ParseResult<()> {
    while !tokens.is_exhausted() {
        parse_assignment(tokens, context)?;
    }
    Ok(())
}
