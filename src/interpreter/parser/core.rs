use std::{iter::Peekable, slice};

use crate::{
    error::{Expected, InterpretError, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, TokenKind},
        parser::binary::parse_additive,
        value::Integer,
    },
};

/// Result type used by the parser.
///
/// Rules compute values while they parse, so a rule fails with a syntax
/// error as well as with a runtime error such as an undefined variable.
pub type ParseResult<T> = Result<T, InterpretError>;

/// The tokens of one program plus a cursor.
///
/// Offers a single token of lookahead and never moves backwards.
#[derive(Debug, Clone)]
pub struct TokenStream<'t> {
    tokens:   Peekable<slice::Iter<'t, Token>>,
    end_line: usize,
}

impl<'t> TokenStream<'t> {
    /// Places the cursor before the first token.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens:   tokens.iter().peekable(),
               end_line: tokens.last().map_or(1, |token| token.line), }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'t Token> {
        self.tokens.peek().copied()
    }

    /// Returns the kind of the next token without consuming it.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Consumes the next token, which must be of kind `kind`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the next token has another
    /// kind, and [`ParseError::UnexpectedEndOfInput`] if there is none. The
    /// cursor does not move on failure.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<&'t Token> {
        match self.tokens.next_if(|token| token.kind == kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(Expected::Token(kind)).into()),
        }
    }

    /// Builds the error for the token under the cursor, given what the grammar
    /// wanted there.
    pub fn unexpected(&mut self, expected: Expected) -> ParseError {
        match self.tokens.peek() {
            Some(token) => ParseError::UnexpectedToken { expected,
                                                         found: token.kind,
                                                         lexeme: token.text.clone(),
                                                         line: token.line },
            None => ParseError::UnexpectedEndOfInput { expected,
                                                       line: self.end_line },
        }
    }
}

impl<'t> Iterator for TokenStream<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Stack space that must remain before a rule may recurse again.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment once the red zone is reached.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// Nesting depth is bounded only by memory, so groupings such as
/// `((((...))))` cannot overflow the thread's stack.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Parses and evaluates an expression.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// Every nested grouping passes through here, which is where the stack is
/// grown for deeply nested input.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `context`: Evaluation context supplying variables and the overflow
///   policy.
///
/// # Returns
/// The value of the expression. The cursor is left right after it.
pub fn parse_expression(tokens: &mut TokenStream<'_>,
                        context: &mut Context)
                        -> ParseResult<Integer> {
    ensure_sufficient_stack(|| parse_additive(tokens, context))
}
