/// The evaluator module holds the runtime side of the interpreter.
///
/// It owns the per-run context (symbol table and overflow policy) and the
/// integer arithmetic. The parser calls into it while it recognizes the
/// grammar; there is no separate evaluation pass.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: punctuation, integer literals and identifiers, each with its
/// source line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Rejects malformed literals such as `007`.
/// - Drops or rejects unknown characters depending on the configuration.
pub mod lexer;
/// Arithmetic operators and their mapping from tokens.
pub mod operator;
/// The parser module recognizes the grammar and evaluates as it goes.
///
/// Each grammar rule is a function that consumes exactly its tokens from the
/// stream and returns the value it denotes, or, for assignments, writes to
/// the symbol table.
pub mod parser;
/// Variable bindings of a program run.
pub mod symbols;
/// The integer value type and literal conversion.
pub mod value;
