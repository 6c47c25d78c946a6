use logos::Logos;
use tracing::{debug, trace};

use crate::{config::Config, error::LexicalError};

/// The kind of a lexical token.
///
/// Every token the scanner emits is one of the seven punctuation kinds, a
/// literal or an identifier. Whitespace, including non-ASCII spaces such as
/// U+00A0 or U+2003, is skipped before it becomes a token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"\p{White_Space}+")]
#[logos(error = ScanError)]
pub enum TokenKind {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Decimal integer literals such as `42` or `0`. `007` is rejected.
    #[regex(r"[0-9]+", reject_leading_zero)]
    Literal,
    /// Identifier tokens; variable names such as `x`, `_tmp` or `x_2`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Identifier,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Semicolon => "';'",
            Self::Literal => "literal",
            Self::Identifier => "identifier",
        };
        f.write_str(name)
    }
}

/// Raw failures reported by the generated lexer.
///
/// [`tokenize`] turns these into [`LexicalError`]s once it knows the lexeme
/// and line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// No rule matched the input.
    #[default]
    Unrecognized,
    /// A digit run started with `0` followed by another digit.
    LeadingZero,
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: String,
    /// The line the token starts on, counting from 1.
    pub line: usize,
}

impl Token {
    /// Creates a token from its kind, lexeme and line.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }
}

/// Rejects digit runs such as `00` or `007`; a lone `0` is fine.
fn reject_leading_zero(lex: &logos::Lexer<TokenKind>) -> Result<(), ScanError> {
    let digits = lex.slice();
    if digits.len() > 1 && digits.starts_with('0') {
        Err(ScanError::LeadingZero)
    } else {
        Ok(())
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Whitespace is dropped. Characters that are neither punctuation,
/// whitespace, letters, digits nor `_` are dropped as well, unless
/// [`Config::strict`] is set, in which case they are an error.
///
/// # Errors
/// Returns [`LexicalError::MalformedLiteral`] for literals with a leading
/// zero, and [`LexicalError::UnrecognizedCharacter`] for unknown characters
/// in strict mode. No tokens are returned once an error occurs.
///
/// # Examples
/// ```
/// use minicalc::{
///     config::Config,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("x = -42;", &Config::default()).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Minus,
///             TokenKind::Literal,
///             TokenKind::Semicolon]);
/// assert_eq!(tokens[3].text, "42");
///
/// assert!(tokenize("x = 007;", &Config::default()).is_err());
/// ```
pub fn tokenize(source: &str, config: &Config) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut line = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        // Only skipped whitespace lies between the previous lexeme and this one.
        let span = lexer.span();
        line += source[scanned..span.start].matches('\n').count();
        scanned = span.end;

        match result {
            Ok(kind) => {
                trace!(%kind, text = lexer.slice(), line, "scanned token");
                tokens.push(Token::new(kind, lexer.slice(), line));
            },
            Err(ScanError::LeadingZero) => {
                return Err(LexicalError::MalformedLiteral { literal: lexer.slice().to_string(),
                                                            line });
            },
            Err(ScanError::Unrecognized) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                if config.strict {
                    return Err(LexicalError::UnrecognizedCharacter { character, line });
                }
                trace!(%character, line, "skipped unrecognized character");
            },
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source, &Config::default()).unwrap()
                                            .into_iter()
                                            .map(|t| t.kind)
                                            .collect()
    }

    #[test]
    fn punctuation_maps_to_fixed_kinds() {
        assert_eq!(kinds("=+-*();"),
                   [TokenKind::Assign,
                    TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Multiply,
                    TokenKind::LeftParen,
                    TokenKind::RightParen,
                    TokenKind::Semicolon]);
    }

    #[test]
    fn identifiers_are_maximal_runs() {
        let tokens = tokenize("x_2 _a Abc9 héllo", &Config::default()).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["x_2", "_a", "Abc9", "héllo"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn digits_then_letters_split_into_two_tokens() {
        assert_eq!(kinds("12ab"), [TokenKind::Literal, TokenKind::Identifier]);
    }

    #[test]
    fn zero_alone_is_a_literal() {
        let tokens = tokenize("0", &Config::default()).unwrap();
        assert_eq!(tokens, [Token::new(TokenKind::Literal, "0", 1)]);
    }

    #[test]
    fn leading_zero_is_rejected() {
        for source in ["00", "007", "x = 01;"] {
            assert!(matches!(tokenize(source, &Config::default()),
                             Err(LexicalError::MalformedLiteral { .. })),
                    "{source} should not tokenize");
        }
    }

    #[test]
    fn lines_are_tracked_across_newlines() {
        let tokens = tokenize("a\n\nb\r\n c", &Config::default()).unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 3, 4]);
    }

    #[test]
    fn unknown_characters_are_dropped_when_lenient() {
        assert_eq!(kinds("x $= 1#;"),
                   [TokenKind::Identifier,
                    TokenKind::Assign,
                    TokenKind::Literal,
                    TokenKind::Semicolon]);
    }

    #[test]
    fn unknown_characters_are_errors_when_strict() {
        let config = Config::new().with_strict(true);
        assert_eq!(tokenize("x = 1;\ny = 2 $;", &config),
                   Err(LexicalError::UnrecognizedCharacter { character: '$',
                                                             line:      2, }));
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(kinds("").is_empty());
        assert!(kinds(" \t\n").is_empty());
    }

    #[test]
    fn unicode_spaces_are_whitespace_even_when_strict() {
        let config = Config::new().with_strict(true);
        for source in ["x\u{2003}=\u{00A0}1;", "x\u{3000}=\u{2009}1\u{202F};"] {
            let tokens = tokenize(source, &config).unwrap();
            let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, ["x", "=", "1", ";"], "{source:?}");
        }
        assert!(tokenize("\u{00A0}\u{2003}\n", &config).unwrap().is_empty());
    }

    #[test]
    fn lines_are_tracked_past_unicode_spaces() {
        let tokens = tokenize("a\u{2003}\n\u{00A0}b\n\u{3000}\nc", &Config::default()).unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 2, 4]);
    }

    #[test]
    fn lines_are_tracked_past_dropped_characters() {
        let tokens = tokenize("a\n$\n@ b", &Config::default()).unwrap();
        assert_eq!(tokens, [Token::new(TokenKind::Identifier, "a", 1),
                            Token::new(TokenKind::Identifier, "b", 3)]);
    }

    #[test]
    fn every_kind_has_a_display_name() {
        let names: Vec<_> = [TokenKind::Assign,
                             TokenKind::Plus,
                             TokenKind::Minus,
                             TokenKind::Multiply,
                             TokenKind::LeftParen,
                             TokenKind::RightParen,
                             TokenKind::Semicolon,
                             TokenKind::Literal,
                             TokenKind::Identifier].iter()
                                                   .map(ToString::to_string)
                                                   .collect();
        assert_eq!(names,
                   ["'='", "'+'", "'-'", "'*'", "'('", "')'", "';'", "literal", "identifier"]);
    }

    #[test]
    fn literals_are_ascii_digits_only() {
        // U+0663 ARABIC-INDIC DIGIT THREE is a decimal digit but not a literal.
        assert!(kinds("\u{0663}").is_empty());
        assert_eq!(tokenize("\u{0663}", &Config::new().with_strict(true)),
                   Err(LexicalError::UnrecognizedCharacter { character: '\u{0663}',
                                                             line:      1, }));
        assert_eq!(kinds("x = \u{0663};"),
                   [TokenKind::Identifier, TokenKind::Assign, TokenKind::Semicolon]);
    }

    #[test]
    fn non_ascii_digits_may_continue_an_identifier() {
        let tokens = tokenize("x\u{0663}", &Config::default()).unwrap();
        assert_eq!(tokens, [Token::new(TokenKind::Identifier, "x\u{0663}", 1)]);
    }
}
