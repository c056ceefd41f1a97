//! # pluck-core
//!
//! A strict, zero-copy JSON text engine: a byte-level tokenizer, a
//! recursive-descent parser, and a typed dotted-path query accessor.
//!
//! The parser accepts exactly the JSON grammar — no comments, no trailing
//! commas, no multiple top-level values — and builds an immutable [`Value`]
//! tree whose strings borrow from the input buffer whenever they contain no
//! escape sequences. Queries walk that tree with dot-separated paths and
//! return typed results, failing loudly on any miss.
//!
//! ## Quick start
//!
//! ```rust
//! use pluck_core::{get, parse, Value};
//!
//! let doc = parse(r#"{"hello": {"world": ["hi"]}}"#).unwrap();
//!
//! // Typed access
//! let greeting: String = get(&doc, ".hello.world.0").unwrap();
//! assert_eq!(greeting, "hi");
//!
//! // Untyped access
//! let world: Value = get(&doc, ".hello.world").unwrap();
//! assert_eq!(world.kind(), "array");
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] — bytes → position-tagged tokens, on demand
//! - [`parser`] — tokens → [`Value`] tree (`parse`, `parse_bytes`,
//!   `from_reader`, `parse_with`)
//! - [`query`] — dotted-path resolution with typed extraction (`get`)
//! - [`types`] — the `Value` tagged union
//! - [`error`] — lex/parse/query error taxonomy

pub mod error;
pub mod lexer;
pub mod parser;
pub mod query;
pub mod types;

pub use error::{Error, LexError, ParseError, QueryError, Result};
pub use parser::{from_reader, parse, parse_bytes, parse_with, ParseOptions};
pub use query::{get, FromValue};
pub use types::Value;
