//! Lexical tokens.
//!
//! These types are stable and hand-written. A token's `text` is a zero-copy
//! slice of the source; string tokens keep their quotes and any escape
//! sequences exactly as written.

use phf::phf_map;

use crate::span::{Location, Span};

/// Keyword literals, resolved when the token is lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    True,
    False,
    Null,
}

static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "true" => Keyword::True,
    "false" => Keyword::False,
    "null" => Keyword::Null,
};

impl Keyword {
    /// Look up an already lower-cased letter run.
    #[inline]
    pub fn from_lowercase(word: &str) -> Option<Keyword> {
        KEYWORDS.get(word).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `"..."`, quotes included in the text
    String,
    /// Run of `0-9 . e E + -`, not yet validated
    Number,
    /// `true`, `false` or `null`, in any letter case
    Keyword(Keyword),
    /// Run of whitespace characters
    Whitespace,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Kind for a punctuation character, if it is one.
    pub fn punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            '{' => Some(TokenKind::OpenBrace),
            '}' => Some(TokenKind::CloseBrace),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Check if this kind can stand alone as a scalar value.
    #[inline]
    pub fn is_scalar(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number | TokenKind::Keyword(_))
    }
}

/// A classified, positioned slice of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the first character.
    pub position: usize,
    /// 1-based line of the first character.
    pub line: u32,
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(position: usize, line: u32, kind: TokenKind, text: &'a str) -> Self {
        Self { position, line, kind, text }
    }

    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.position, self.line)
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.position, self.position + self.text.len())
    }

    /// String contents without the surrounding quotes. Escapes are left
    /// as written. Returns `None` for non-string tokens.
    pub fn string_contents(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::String => self
                .text
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"')),
            _ => None,
        }
    }
}
