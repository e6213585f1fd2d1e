//! Lookahead cursor over the source text.
//!
//! The cursor sits *between* characters. Initially it is before the first
//! character; [`Cursor::current`] is the last character consumed and
//! [`Cursor::peek`] the next one. Offsets are byte offsets, so every slice
//! handed out by the cursor borrows straight from the source.

use memchr::memchr_iter;

use crate::error::{ParseError, ParseErrorCode, Result};
use crate::span::Location;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the next unconsumed character. Never exceeds `src.len()`.
    offset: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, offset: 0, line: 1 }
    }

    /// The full source buffer.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Source length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.src.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the next unconsumed character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.offset, self.line)
    }

    /// Everything not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.src[self.offset..]
    }

    /// The character at the current position, `None` before the start.
    pub fn current(&self) -> Option<char> {
        self.src[..self.offset].chars().next_back()
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character `n` positions ahead. `peek_nth(1)` is [`peek`](Self::peek),
    /// `peek_nth(0)` is [`current`](Self::current). Out of range yields `None`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        match n {
            0 => self.current(),
            _ => self.remaining().chars().nth(n - 1),
        }
    }

    /// Whether at least one more character exists.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.offset < self.src.len()
    }

    /// Whether at least `n` more characters exist.
    pub fn has_at_least(&self, n: usize) -> bool {
        n == 0 || self.remaining().chars().nth(n - 1).is_some()
    }

    /// Whether `n` characters can be stepped back over.
    pub fn has_less(&self, n: usize) -> bool {
        self.src[..self.offset].chars().rev().take(n).count() == n
    }

    /// Consume one character and return it.
    pub fn advance(&mut self) -> Result<char> {
        self.bump().ok_or_else(|| self.error(ParseErrorCode::OutOfInput))
    }

    /// Consume `n` characters and return the last one consumed (the character
    /// now at the current position). Fails without moving when fewer than
    /// `n` characters remain.
    pub fn advance_by(&mut self, n: usize) -> Result<char> {
        if n == 0 {
            return self.current().ok_or_else(|| self.error(ParseErrorCode::OutOfInput));
        }
        if !self.has_at_least(n) {
            return Err(self.error(ParseErrorCode::OutOfInput));
        }
        let mut last = None;
        for _ in 0..n {
            last = self.bump();
        }
        last.ok_or_else(|| self.error(ParseErrorCode::OutOfInput))
    }

    /// Step back over `n` characters. Diagnostic only; the parser never
    /// seeks backwards.
    pub fn back(&mut self, n: usize) -> Result<()> {
        if !self.has_less(n) {
            return Err(self.error(ParseErrorCode::OutOfInput));
        }
        for _ in 0..n {
            if let Some(ch) = self.src[..self.offset].chars().next_back() {
                self.offset -= ch.len_utf8();
                if ch == '\n' {
                    self.line -= 1;
                }
            }
        }
        Ok(())
    }

    /// Consume characters one at a time while `pred` holds and input remains.
    ///
    /// `pred` sees the cursor before each step, so it typically inspects
    /// [`peek`](Self::peek). Returns the consumed text as a slice of the source.
    pub fn consume_while<F>(&mut self, mut pred: F) -> &'a str
    where
        F: FnMut(&Self) -> bool,
    {
        let start = self.offset;
        while self.has_more() && pred(self) {
            if self.bump().is_none() {
                break;
            }
        }
        &self.src[start..self.offset]
    }

    /// Jump forward to byte offset `target`, keeping the line count right.
    ///
    /// `target` must lie on a char boundary at or after the current offset;
    /// callers only jump to offsets found by scanning for ASCII bytes.
    pub(crate) fn jump_to(&mut self, target: usize) {
        debug_assert!(target >= self.offset && self.src.is_char_boundary(target));
        let target = target.min(self.src.len());
        let skipped = &self.src.as_bytes()[self.offset..target];
        self.line += memchr_iter(b'\n', skipped).count() as u32;
        self.offset = target;
    }

    pub(crate) fn error(&self, code: ParseErrorCode) -> ParseError {
        ParseError::new(code, self.location())
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}
