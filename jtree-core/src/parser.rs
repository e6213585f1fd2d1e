//! Recursive-descent parser.
//!
//! Pulls tokens from a [`Lexer`] one at a time and builds a [`Value`] tree
//! bottom-up. Objects and arrays are small explicit state machines; nested
//! containers recurse, with depth bounded by [`ParserOptions::max_depth`].
//!
//! Whitespace tokens are discarded here, between every structural element.
//! Where the grammar needs a token or value the parser only peeks at the
//! next character to choose between object, array and scalar; everything
//! else is decided on token kind.

use crate::error::{ParseError, ParseErrorCode, Result};
use crate::lexer::Lexer;
use crate::options::{ParserOptions, MAX_SUPPORTED_DEPTH};
use crate::span::Location;
use crate::token::{Keyword, Token, TokenKind};
use crate::value::{Member, Value};

/// Object parsing states.
#[derive(Debug)]
enum ObjectState {
    ExpectKeyOrEnd,
    ExpectColon(String),
    ExpectValue(String),
    ExpectCommaOrEnd,
}

/// Array parsing states.
#[derive(Debug, Clone, Copy)]
enum ArrayState {
    ExpectValueOrEnd,
    ExpectCommaOrEnd,
}

/// Parser over one source text. Owns its lexer and cursor; not reusable
/// across inputs.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    options: ParserOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::with_options(src, ParserOptions::default())
    }

    /// Parser with `options`. A `max_depth` above [`MAX_SUPPORTED_DEPTH`]
    /// is clamped.
    pub fn with_options(src: &'a str, mut options: ParserOptions) -> Self {
        options.max_depth = options.max_depth.min(MAX_SUPPORTED_DEPTH);
        Self {
            lexer: Lexer::new(src),
            options,
            depth: 0,
        }
    }

    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Location of the next unconsumed character.
    #[inline]
    pub fn location(&self) -> Location {
        self.lexer.cursor().location()
    }

    /// Parse a whole document: one object, array or scalar, surrounded by
    /// optional whitespace.
    pub fn parse_document(&mut self) -> Result<Value> {
        tracing::trace!(
            len = self.lexer.cursor().len(),
            max_depth = self.options.max_depth,
            "parsing document"
        );
        let result = self.document();
        if let Err(err) = &result {
            tracing::debug!(
                code = ?err.code,
                line = err.location.line,
                offset = err.location.offset,
                "parse failed"
            );
        }
        result
    }

    fn document(&mut self) -> Result<Value> {
        self.skip_whitespace()?;
        let value = match self.lexer.peek_char() {
            Some('{') => self.parse_object()?,
            Some('[') => self.parse_array()?,
            Some(_) => {
                let token = self.next_token()?;
                if !token.kind.is_scalar() {
                    return Err(unexpected(&token));
                }
                Self::parse_value(token)?
            }
            None => return Err(self.error(ParseErrorCode::OutOfInput)),
        };
        self.finish()?;
        Ok(value)
    }

    /// Convert one scalar token to a value.
    ///
    /// Container tokens never reach here; the caller dispatches `{` and `[`
    /// first. Any non-scalar kind is `UnexpectedToken`.
    pub fn parse_value(token: Token<'_>) -> Result<Value> {
        match token.kind {
            TokenKind::Number => parse_number(&token),
            TokenKind::String => Ok(Value::String(string_text(&token).to_owned())),
            TokenKind::Keyword(Keyword::True) => Ok(Value::Bool(true)),
            TokenKind::Keyword(Keyword::False) => Ok(Value::Bool(false)),
            TokenKind::Keyword(Keyword::Null) => Ok(Value::Null),
            TokenKind::Whitespace
            | TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::Colon
            | TokenKind::Comma => Err(unexpected(&token)),
        }
    }

    /// Parse `{ "key": value, ... }`. The next significant token must be `{`.
    pub fn parse_object(&mut self) -> Result<Value> {
        let open = self.expect_open(TokenKind::OpenBrace)?;
        self.enter(&open)?;

        let mut members: Vec<Member> = Vec::new();
        let mut state = ObjectState::ExpectKeyOrEnd;
        loop {
            state = match state {
                ObjectState::ExpectKeyOrEnd => {
                    self.skip_whitespace()?;
                    let token = self.next_token()?;
                    match token.kind {
                        // `}` only closes an empty object; after a comma it
                        // is a missing key.
                        TokenKind::CloseBrace if members.is_empty() => break,
                        TokenKind::String => ObjectState::ExpectColon(string_text(&token).to_owned()),
                        _ => return Err(ParseError::new(ParseErrorCode::MissingKey, token.location())),
                    }
                }
                ObjectState::ExpectColon(key) => {
                    self.skip_whitespace()?;
                    let token = self.next_token()?;
                    if token.kind != TokenKind::Colon {
                        return Err(ParseError::new(ParseErrorCode::MissingColon, token.location()));
                    }
                    ObjectState::ExpectValue(key)
                }
                ObjectState::ExpectValue(key) => {
                    let value = self.parse_element()?;
                    members.push(Member { key, value });
                    ObjectState::ExpectCommaOrEnd
                }
                ObjectState::ExpectCommaOrEnd => {
                    self.skip_whitespace()?;
                    let token = self.next_token()?;
                    match token.kind {
                        TokenKind::Comma => ObjectState::ExpectKeyOrEnd,
                        TokenKind::CloseBrace => break,
                        _ => {
                            return Err(ParseError::new(
                                ParseErrorCode::MissingCommaOrBrace,
                                token.location(),
                            ))
                        }
                    }
                }
            };
        }

        self.leave();
        Ok(Value::Object(members))
    }

    /// Parse `[ value, ... ]`. The next significant token must be `[`.
    pub fn parse_array(&mut self) -> Result<Value> {
        let open = self.expect_open(TokenKind::OpenBracket)?;
        self.enter(&open)?;

        let mut items: Vec<Value> = Vec::new();
        self.skip_whitespace()?;
        if self.lexer.peek_char() == Some(']') {
            self.next_token()?;
            self.leave();
            return Ok(Value::Array(items));
        }

        let mut state = ArrayState::ExpectValueOrEnd;
        loop {
            state = match state {
                ArrayState::ExpectValueOrEnd => {
                    items.push(self.parse_element()?);
                    ArrayState::ExpectCommaOrEnd
                }
                ArrayState::ExpectCommaOrEnd => {
                    self.skip_whitespace()?;
                    let token = self.next_token()?;
                    match token.kind {
                        TokenKind::Comma => ArrayState::ExpectValueOrEnd,
                        TokenKind::CloseBracket => break,
                        _ => {
                            return Err(ParseError::new(
                                ParseErrorCode::InvalidArraySeparator,
                                token.location(),
                            ))
                        }
                    }
                }
            };
        }

        self.leave();
        Ok(Value::Array(items))
    }

    /// A value in object-member or array-element position.
    fn parse_element(&mut self) -> Result<Value> {
        self.skip_whitespace()?;
        match self.lexer.peek_char() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(_) => {
                let token = self.next_token()?;
                Self::parse_value(token)
            }
            None => Err(self.error(ParseErrorCode::OutOfInput)),
        }
    }

    /// Reject anything but whitespace after the document, unless allowed.
    fn finish(&mut self) -> Result<()> {
        if self.options.allow_trailing_characters {
            return Ok(());
        }
        self.skip_whitespace()?;
        if self.lexer.cursor().has_more() {
            return Err(self.error(ParseErrorCode::TrailingCharacters));
        }
        Ok(())
    }

    /// Lex and discard a whitespace run, if one is next.
    fn skip_whitespace(&mut self) -> Result<()> {
        while self.lexer.peek_char().is_some_and(char::is_whitespace) {
            match self.lexer.tokenize()? {
                Some(token) if token.kind == TokenKind::Whitespace => {}
                Some(token) => return Err(unexpected(&token)),
                None => break,
            }
        }
        Ok(())
    }

    /// Next token; running out of input here is `OutOfInput`.
    fn next_token(&mut self) -> Result<Token<'a>> {
        match self.lexer.tokenize()? {
            Some(token) => Ok(token),
            None => Err(self.error(ParseErrorCode::OutOfInput)),
        }
    }

    fn expect_open(&mut self, kind: TokenKind) -> Result<Token<'a>> {
        self.skip_whitespace()?;
        let token = self.next_token()?;
        if token.kind != kind {
            return Err(unexpected(&token));
        }
        Ok(token)
    }

    fn enter(&mut self, open: &Token<'_>) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::new(ParseErrorCode::NestingTooDeep, open.location()));
        }
        Ok(())
    }

    #[inline]
    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn error(&self, code: ParseErrorCode) -> ParseError {
        ParseError::new(code, self.location())
    }
}

fn unexpected(token: &Token<'_>) -> ParseError {
    ParseError::new(ParseErrorCode::UnexpectedToken, token.location())
}

/// String token text without its quotes.
fn string_text<'a>(token: &Token<'a>) -> &'a str {
    token.string_contents().unwrap_or(token.text)
}

fn parse_number(token: &Token<'_>) -> Result<Value> {
    match token.text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Number(n)),
        _ => Err(ParseError::new(ParseErrorCode::InvalidNumber, token.location())),
    }
}

// ============================================================================
// Tests
// ============================================================================
