//! Parse errors.
//!
//! Every failure is terminal for the `parse` call that produced it: there is
//! no recovery and no partial tree. The error carries one [`ParseErrorCode`]
//! and the [`Location`] of the offending character or token.

use thiserror::Error;

use crate::span::Location;

/// Error codes for parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParseErrorCode {
    /// No matcher in the chain accepts the current character
    UnrecognizedCharacter = 0,
    /// Opening quote with no closing quote before end of input
    UnterminatedString,
    /// Letter run that is not `true`, `false` or `null`
    InvalidKeyword,
    /// Numeric-looking text that does not convert to an f64
    InvalidNumber,
    /// Token kind does not fit the current grammar position
    UnexpectedToken,
    /// Object member does not start with a string key
    MissingKey,
    /// Object key not followed by `:`
    MissingColon,
    /// Object member not followed by `,` or `}`
    MissingCommaOrBrace,
    /// Array element not followed by `,` or `]`
    InvalidArraySeparator,
    /// Container nesting exceeds the configured maximum depth
    NestingTooDeep,
    /// Cursor asked to move past the end (or start) of input
    OutOfInput,
    /// Non-whitespace content after the top-level value
    TrailingCharacters,
}

impl ParseErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter => "unrecognized character",
            Self::UnterminatedString => "unterminated string",
            Self::InvalidKeyword => "invalid keyword",
            Self::InvalidNumber => "invalid number",
            Self::UnexpectedToken => "unexpected token",
            Self::MissingKey => "missing object key",
            Self::MissingColon => "missing colon",
            Self::MissingCommaOrBrace => "missing comma or closing brace",
            Self::InvalidArraySeparator => "missing comma or closing bracket",
            Self::NestingTooDeep => "nesting too deep",
            Self::OutOfInput => "unexpected end of input",
            Self::TrailingCharacters => "trailing characters",
        }
    }
}

impl std::fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Error returned when lexing or parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{code} at {location}")]
pub struct ParseError {
    pub code: ParseErrorCode,
    pub location: Location,
}

impl ParseError {
    #[inline]
    pub fn new(code: ParseErrorCode, location: Location) -> Self {
        Self { code, location }
    }

    /// Byte offset of the failure.
    #[inline]
    pub fn offset(&self) -> usize {
        self.location.offset
    }

    /// 1-based line of the failure. Only `\n` starts a new line, so input
    /// using bare `\r` line endings reports everything on line 1.
    #[inline]
    pub fn line(&self) -> u32 {
        self.location.line
    }
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
