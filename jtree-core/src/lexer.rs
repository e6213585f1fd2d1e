//! Matcher-chain lexer.
//!
//! The lexer holds an ordered list of [`Matcher`]s. For each token it asks
//! them in turn whether they apply to the next character and lets the first
//! one that does extract the token. Order is priority:
//!
//! 1. string (`"`)
//! 2. keyword (any letter)
//! 3. number (digit, or `-` before a digit)
//! 4. whitespace
//! 5. punctuation (`{ } [ ] : ,`)
//!
//! Whitespace is returned as real tokens; skipping it is up to the parser.

use std::fmt;

use memchr::memchr2;
use unicode_xid::UnicodeXID;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorCode, Result};
use crate::token::{Keyword, Token, TokenKind};

/// Recognizes and extracts one kind of token.
///
/// `matches` must not move the cursor. `extract` is only called after
/// `matches` returned true, and consumes exactly the token's characters.
pub trait Matcher {
    fn name(&self) -> &'static str;

    fn matches(&self, cursor: &Cursor<'_>) -> bool;

    fn extract<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Token<'a>>;
}

/// The standard chain, in priority order.
pub const STANDARD_MATCHERS: &[&dyn Matcher] = &[
    &StringMatcher,
    &KeywordMatcher,
    &NumberMatcher,
    &WhitespaceMatcher,
    &PunctuationMatcher,
];

// ============================================================================
// Matchers
// ============================================================================

/// `"` through the next unescaped `"`, inclusive. Escapes are not decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMatcher;

impl Matcher for StringMatcher {
    fn name(&self) -> &'static str {
        "string"
    }

    fn matches(&self, cursor: &Cursor<'_>) -> bool {
        cursor.peek() == Some('"')
    }

    fn extract<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Token<'a>> {
        let start = cursor.location();
        let bytes = cursor.source().as_bytes();
        // Opening quote is one byte; UTF-8 continuation bytes never equal
        // '"' or '\\', so scanning bytes is safe.
        let mut scan = start.offset + 1;
        loop {
            let found = bytes.get(scan..).and_then(|rest| memchr2(b'"', b'\\', rest));
            match found {
                Some(i) if bytes[scan + i] == b'"' => {
                    cursor.jump_to(scan + i + 1);
                    break;
                }
                // Backslash: the next byte can't close the string.
                Some(i) => scan += i + 2,
                None => return Err(ParseError::new(ParseErrorCode::UnterminatedString, start)),
            }
        }
        let text = &cursor.source()[start.offset..cursor.offset()];
        Ok(Token::new(start.offset, start.line, TokenKind::String, text))
    }
}

/// Maximal letter run, lower-cased and classified as a keyword.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

fn is_letter(ch: char) -> bool {
    ch.is_xid_start()
}

impl Matcher for KeywordMatcher {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn matches(&self, cursor: &Cursor<'_>) -> bool {
        cursor.peek().is_some_and(is_letter)
    }

    fn extract<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Token<'a>> {
        let start = cursor.location();
        let text = cursor.consume_while(|c| c.peek().is_some_and(is_letter));
        match Keyword::from_lowercase(&text.to_lowercase()) {
            Some(keyword) => Ok(Token::new(start.offset, start.line, TokenKind::Keyword(keyword), text)),
            None => Err(ParseError::new(ParseErrorCode::InvalidKeyword, start)),
        }
    }
}

/// Maximal run of `0-9 . e E + -`. Shape is checked later, on conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberMatcher;

fn is_number_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '.' | 'e' | 'E' | '+' | '-')
}

impl Matcher for NumberMatcher {
    fn name(&self) -> &'static str {
        "number"
    }

    fn matches(&self, cursor: &Cursor<'_>) -> bool {
        match cursor.peek() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('-') => cursor.peek_nth(2).is_some_and(|ch| ch.is_ascii_digit()),
            _ => false,
        }
    }

    fn extract<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Token<'a>> {
        let start = cursor.location();
        let text = cursor.consume_while(|c| c.peek().is_some_and(is_number_char));
        Ok(Token::new(start.offset, start.line, TokenKind::Number, text))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceMatcher;

impl Matcher for WhitespaceMatcher {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn matches(&self, cursor: &Cursor<'_>) -> bool {
        cursor.peek().is_some_and(char::is_whitespace)
    }

    fn extract<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Token<'a>> {
        let start = cursor.location();
        let text = cursor.consume_while(|c| c.peek().is_some_and(char::is_whitespace));
        Ok(Token::new(start.offset, start.line, TokenKind::Whitespace, text))
    }
}

/// One of `{ } [ ] : ,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationMatcher;

impl Matcher for PunctuationMatcher {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn matches(&self, cursor: &Cursor<'_>) -> bool {
        cursor.peek().and_then(TokenKind::punctuation).is_some()
    }

    fn extract<'a>(&self, cursor: &mut Cursor<'a>) -> Result<Token<'a>> {
        let start = cursor.location();
        let ch = cursor.advance()?;
        let kind = TokenKind::punctuation(ch)
            .ok_or_else(|| ParseError::new(ParseErrorCode::UnrecognizedCharacter, start))?;
        let text = &cursor.source()[start.offset..cursor.offset()];
        Ok(Token::new(start.offset, start.line, kind, text))
    }
}

// ============================================================================
// Lexer
// ============================================================================

/// Produces tokens one at a time from a cursor it owns.
///
/// Also an iterator over `Result<Token>`; the iterator ends after the first
/// error.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    matchers: &'static [&'static dyn Matcher],
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Lexer over `src` using [`STANDARD_MATCHERS`].
    pub fn new(src: &'a str) -> Self {
        Self::with_matchers(src, STANDARD_MATCHERS)
    }

    /// Lexer over `src` with a custom ordered matcher chain.
    pub fn with_matchers(src: &'a str, matchers: &'static [&'static dyn Matcher]) -> Self {
        Self {
            cursor: Cursor::new(src),
            matchers,
            failed: false,
        }
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    #[inline]
    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Next character without consuming it.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// Lex one token. `Ok(None)` at end of input.
    pub fn tokenize(&mut self) -> Result<Option<Token<'a>>> {
        if !self.cursor.has_more() {
            return Ok(None);
        }
        for matcher in self.matchers {
            if matcher.matches(&self.cursor) {
                return matcher.extract(&mut self.cursor).map(Some);
            }
        }
        Err(self.cursor.error(ParseErrorCode::UnrecognizedCharacter))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.tokenize() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.matchers.iter().map(|m| m.name()).collect();
        f.debug_struct("Lexer")
            .field("cursor", &self.cursor)
            .field("matchers", &names)
            .field("failed", &self.failed)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
