//! Recursive-descent JSON parser.
//!
//! The parser pulls tokens from the [`Lexer`] one at a time — a single token
//! of lookahead, no buffering — and builds a [`Value`] tree according to the
//! grammar:
//!
//! ```text
//! value    := object | array | atom
//! object   := '{' (member (',' member)*)? '}'
//! member   := string ':' value
//! array    := '[' (value (',' value)*)? ']'
//! atom     := string | number | 'true' | 'false' | 'null'
//! document := value END
//! ```
//!
//! The document rule consumes the entire input: anything after the single
//! top-level value — extra tokens, comment sequences, stray bytes — fails
//! the parse. There is no error recovery; the first violation aborts and no
//! partial tree is returned.
//!
//! String materialization happens here, not in the lexer: a string token is
//! a raw span of the input, and [`unescape`] turns it into a `Cow` that
//! borrows the span when it holds no escape sequences.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Read;

use crate::error::{LexError, ParseError, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::types::Value;

/// Knobs for the strictness variants of [`parse_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Reject documents in which an object repeats a key. The default keeps
    /// the last-write-wins relaxation: repeated keys overwrite, no error.
    pub deny_duplicate_keys: bool,
}

/// Parse a complete in-memory document.
///
/// Strings in the returned tree borrow from `input` wherever possible, so
/// the buffer must outlive the tree (or be detached via
/// [`Value::into_owned`]).
///
/// ```
/// use pluck_core::parse;
///
/// let doc = parse(r#"{"greeting": "hi"}"#).unwrap();
/// assert_eq!(doc.kind(), "object");
/// ```
pub fn parse(input: &str) -> Result<Value<'_>> {
    parse_with(input, ParseOptions::default())
}

/// Parse a complete in-memory byte buffer, validating it as UTF-8 first.
pub fn parse_bytes(input: &[u8]) -> Result<Value<'_>> {
    let src = std::str::from_utf8(input).map_err(LexError::from)?;
    parse(src)
}

/// Drain `reader` to completion, then parse the whole buffer. There is no
/// incremental parsing; the returned tree owns all of its strings.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Value<'static>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(parse(&buffer)?.into_owned())
}

/// [`parse`] with explicit [`ParseOptions`].
pub fn parse_with(input: &str, options: ParseOptions) -> Result<Value<'_>> {
    let mut parser = Parser::new(input, options)?;
    if parser.current.kind == TokenKind::Eof {
        return Err(LexError::EmptyInput.into());
    }
    let value = parser.value()?;
    if parser.current.kind != TokenKind::Eof {
        return Err(ParseError::TrailingContent(parser.current.kind).into());
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    lexer: Lexer<'a>,
    current: Token,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, options: ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(src);
        let current = lexer.next()?;
        Ok(Self {
            src,
            lexer,
            current,
            options,
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next()?;
        Ok(())
    }

    /// Assert that the current token is `expected` and move past it.
    fn expect(&mut self, expected: TokenKind) -> Result<()> {
        if self.current.kind == expected {
            self.advance()
        } else {
            Err(ParseError::UnexpectedToken {
                found: self.current.kind,
                expected,
            }
            .into())
        }
    }

    fn value(&mut self) -> Result<Value<'a>> {
        match self.current.kind {
            TokenKind::LeftBrace => self.object(),
            TokenKind::LeftBracket => self.array(),
            _ => self.atom(),
        }
    }

    fn object(&mut self) -> Result<Value<'a>> {
        self.expect(TokenKind::LeftBrace)?;

        let mut members = HashMap::new();
        while self.current.kind != TokenKind::Eof && self.current.kind != TokenKind::RightBrace {
            // A comma separates every pair of members and may not appear
            // before the first or after the last.
            if !members.is_empty() {
                self.expect(TokenKind::Comma)?;
            }

            if self.current.kind != TokenKind::String {
                return Err(ParseError::UnexpectedToken {
                    found: self.current.kind,
                    expected: TokenKind::String,
                }
                .into());
            }
            let key = self.string_content(self.current);
            self.advance()?;

            self.expect(TokenKind::Colon)?;
            let value = self.value()?;

            if self.options.deny_duplicate_keys && members.contains_key(key.as_ref()) {
                return Err(ParseError::DuplicateKey(key.into_owned()).into());
            }
            members.insert(key, value);
        }

        self.expect(TokenKind::RightBrace)?;
        Ok(Value::Object(members))
    }

    fn array(&mut self) -> Result<Value<'a>> {
        self.expect(TokenKind::LeftBracket)?;

        let mut items = Vec::new();
        while self.current.kind != TokenKind::Eof && self.current.kind != TokenKind::RightBracket {
            if !items.is_empty() {
                self.expect(TokenKind::Comma)?;
            }
            items.push(self.value()?);
        }

        self.expect(TokenKind::RightBracket)?;
        Ok(Value::Array(items))
    }

    fn atom(&mut self) -> Result<Value<'a>> {
        let value = match self.current.kind {
            TokenKind::String => Value::String(self.string_content(self.current)),
            TokenKind::Number => {
                let raw = &self.src[self.current.start..self.current.end];
                let number = raw
                    .parse::<f64>()
                    .map_err(|_| LexError::InvalidNumber(raw.to_string()))?;
                Value::Number(number)
            }
            TokenKind::True => Value::Bool(true),
            TokenKind::False => Value::Bool(false),
            TokenKind::Null => Value::Null,
            found => return Err(ParseError::ExpectedValue { found }.into()),
        };
        self.advance()?;
        Ok(value)
    }

    fn string_content(&self, token: Token) -> Cow<'a, str> {
        unescape(&self.src[token.start..token.end])
    }
}

/// Decode the escape sequences of a raw string span. Escape-free spans are
/// returned as borrows of the input. Unknown escapes pass through verbatim
/// rather than failing.
fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => out.push(unicode_escape(&mut chars)),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Decode the four hex digits after `\u`, joining surrogate pairs when the
/// low half follows as another `\uXXXX`. Malformed sequences decode to
/// U+FFFD instead of failing.
fn unicode_escape(chars: &mut std::str::Chars<'_>) -> char {
    let Some(mut code) = hex4(chars) else {
        return char::REPLACEMENT_CHARACTER;
    };

    if (0xD800..0xDC00).contains(&code) {
        // High surrogate: consume a following \uXXXX low surrogate, if any.
        let mut rest = chars.clone();
        if rest.next() == Some('\\') && rest.next() == Some('u') {
            if let Some(low) = hex4(&mut rest) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = rest;
                    code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                }
            }
        }
    }

    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let mut code = 0u32;
    for _ in 0..4 {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}
