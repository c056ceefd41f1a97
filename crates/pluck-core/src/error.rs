//! Error types for lexing, parsing, and path queries.

use thiserror::Error;

use crate::lexer::TokenKind;

/// Errors detected while scanning raw input into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A `"` was opened but the input ended before the matching close quote.
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),

    /// A character that cannot start any JSON token. Covers stray
    /// punctuation, control characters, and comment openers (`/`, `#`) —
    /// JSON has no comment syntax.
    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    /// A number span that does not convert to a 64-bit float. The lexer
    /// delimits number spans greedily, so this is reported when the span is
    /// materialized, e.g. for `1.2.3` or `1e`.
    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),

    /// Empty or whitespace-only input where a JSON value was required.
    #[error("input contains no JSON value")]
    EmptyInput,

    /// Raw byte input that is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Errors detected while matching the token stream against the JSON grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The current token does not match the single token the grammar
    /// requires at this position.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken { found: TokenKind, expected: TokenKind },

    /// A token that cannot begin a value where one was required.
    #[error("unexpected {found}, expected a string, number, 'true', 'false' or 'null'")]
    ExpectedValue { found: TokenKind },

    /// Tokens remained after the single top-level value was parsed.
    #[error("unexpected content after JSON data ({0})")]
    TrailingContent(TokenKind),

    /// An object repeated a key while `deny_duplicate_keys` was enabled.
    #[error("duplicate object key {0:?}")]
    DuplicateKey(String),
}

/// Errors produced while resolving a dotted path against a value tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The path did not start with `.`.
    #[error("invalid path {0:?}: paths start with '.'")]
    InvalidPath(String),

    /// An object was missing the requested key.
    #[error("key {0:?} not found")]
    KeyNotFound(String),

    /// A segment applied to an array did not parse as a non-negative index.
    #[error("invalid array index {0:?}")]
    InvalidIndex(String),

    /// A segment parsed as an index beyond the end of the array.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A segment was applied to a value with no children.
    #[error("cannot descend into {kind} value with segment {segment:?}")]
    NotAContainer { kind: &'static str, segment: String },

    /// The resolved value's variant does not match the requested type.
    #[error("type mismatch: requested {requested}, found {found}")]
    TypeMismatch {
        requested: &'static str,
        found: &'static str,
    },
}

/// Any failure the library can report.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// I/O failure while draining a reader in [`crate::from_reader`].
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout pluck-core.
pub type Result<T> = std::result::Result<T, Error>;
