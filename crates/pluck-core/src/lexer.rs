//! Byte-level tokenizer.
//!
//! The lexer walks the input with a single cursor and hands out one token per
//! [`Lexer::next`] call. Tokens carry no character data — string and number
//! tokens are byte ranges into the source buffer, materialized later by the
//! parser. This keeps scanning allocation-free and lets escape-free strings
//! borrow straight from the input.

use crate::error::LexError;

/// Classification of a token. Structural kinds carry no payload; `String` and
/// `Number` delimit a span of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    String,
    Number,
    True,
    False,
    Null,
    Eof,
}

impl std::fmt::Display for TokenKind {
    /// Human-readable name used in error messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified span of the source buffer. For `String` tokens the span
/// covers the content between the quotes, exclusive; for `Number` tokens the
/// whole literal. Structural tokens span their single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// On-demand scanner over a source buffer.
#[derive(Debug)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Scan and return the next token. Once the input is exhausted every
    /// further call yields an `Eof` token.
    pub fn next(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let bytes = self.src.as_bytes();
        let Some(&byte) = bytes.get(self.pos) else {
            return Ok(Token {
                kind: TokenKind::Eof,
                start: self.pos,
                end: self.pos,
            });
        };

        match byte {
            b'{' => Ok(self.single(TokenKind::LeftBrace)),
            b'}' => Ok(self.single(TokenKind::RightBrace)),
            b'[' => Ok(self.single(TokenKind::LeftBracket)),
            b']' => Ok(self.single(TokenKind::RightBracket)),
            b',' => Ok(self.single(TokenKind::Comma)),
            b':' => Ok(self.single(TokenKind::Colon)),
            b'"' => self.string(),
            b'-' | b'0'..=b'9' => Ok(self.number()),
            b't' => self.keyword("true", TokenKind::True),
            b'f' => self.keyword("false", TokenKind::False),
            b'n' => self.keyword("null", TokenKind::Null),
            _ => Err(self.unexpected_character()),
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.src.as_bytes();
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += 1;
        Token {
            kind,
            start,
            end: self.pos,
        }
    }

    /// Scan a string literal: from the opening quote to the matching
    /// unescaped close quote. The token spans the raw content between the
    /// quotes; escape sequences are left for the consumer to decode.
    fn string(&mut self) -> Result<Token, LexError> {
        let open = self.pos;
        let bytes = self.src.as_bytes();
        let mut i = self.pos + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'"' => {
                    let token = Token {
                        kind: TokenKind::String,
                        start: self.pos + 1,
                        end: i,
                    };
                    self.pos = i + 1;
                    return Ok(token);
                }
                _ => i += 1,
            }
        }
        Err(LexError::UnterminatedString(open))
    }

    /// Delimit a number literal greedily over the characters a JSON number
    /// can contain. Shape validation happens when the span is converted to a
    /// float, so a span like `1.2.3` lexes fine and fails at parse time.
    fn number(&mut self) -> Token {
        let start = self.pos;
        let bytes = self.src.as_bytes();
        let mut i = self.pos + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-' => i += 1,
                _ => break,
            }
        }
        self.pos = i;
        Token {
            kind: TokenKind::Number,
            start,
            end: i,
        }
    }

    fn keyword(&mut self, literal: &str, kind: TokenKind) -> Result<Token, LexError> {
        if self.src[self.pos..].starts_with(literal) {
            let start = self.pos;
            self.pos += literal.len();
            Ok(Token {
                kind,
                start,
                end: self.pos,
            })
        } else {
            Err(self.unexpected_character())
        }
    }

    fn unexpected_character(&self) -> LexError {
        let found = self.src[self.pos..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::UnexpectedCharacter {
            found,
            offset: self.pos,
        }
    }
}
