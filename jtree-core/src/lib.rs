//! jtree Core Parser
//!
//! Turns JSON text into an owned tree of typed values. A matcher-chain
//! lexer produces tokens one at a time; a recursive-descent parser consumes
//! them and builds the tree.
//!
//! # Architecture
//!
//! - **cursor.rs** - Lookahead cursor over the source, with line tracking
//! - **token.rs** - Token, TokenKind, Keyword
//! - **lexer.rs** - Ordered matcher chain (string, keyword, number, whitespace, punctuation)
//! - **parser.rs** - Recursive-descent object/array/scalar builder
//! - **value.rs** - Value tree and object members
//! - **error.rs** - ParseErrorCode and ParseError
//! - **options.rs** - ParserOptions (depth limit, trailing content)
//! - **span.rs** - Span/Location types
//!
//! # Example
//!
//! ```
//! use jtree_core::{parse, Value};
//!
//! let value = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
//! assert_eq!(value.get("a"), Some(&Value::Number(1.0)));
//! assert_eq!(value.get("b").and_then(|b| b.at(2)).and_then(Value::as_str), Some("x"));
//! ```
//!
//! String escapes are not decoded: `"a\nb"` parses to the four characters
//! `a`, `\`, `n`, `b`.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod span;
pub mod token;
pub mod value;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorCode};
pub use lexer::{Lexer, Matcher, STANDARD_MATCHERS};
pub use options::{ParserOptions, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use parser::Parser;
pub use span::{Location, Span};
pub use token::{Keyword, Token, TokenKind};
pub use value::{Member, Value};

/// Parse a complete document with default options.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parse a complete document.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParseError> {
    Parser::with_options(text, options).parse_document()
}

/// Lex `text` into tokens, whitespace included.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    Lexer::new(text).collect()
}
