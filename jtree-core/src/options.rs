/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Ceiling for [`ParserOptions::max_depth`]. Larger settings are clamped to
/// this so nesting stays within a default thread stack.
pub const MAX_SUPPORTED_DEPTH: usize = 1024;

/// Configuration for [`Parser`](crate::Parser).
///
/// # Default
///
/// `max_depth` is [`DEFAULT_MAX_DEPTH`]; trailing characters are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of nested objects/arrays. The top-level container is
    /// depth 1; opening one more than this fails with `NestingTooDeep`.
    ///
    /// Recursion depth of the parser equals nesting depth, so this also
    /// bounds stack use. The parser never honors more than
    /// [`MAX_SUPPORTED_DEPTH`], however this field is set.
    pub max_depth: usize,

    /// Whether to ignore anything after the top-level value.
    ///
    /// When `false`, non-whitespace content after the document fails with
    /// `TrailingCharacters`.
    ///
    /// ```json
    /// {"a": 1} garbage
    /// ```
    pub allow_trailing_characters: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_characters: false,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit, clamped to [`MAX_SUPPORTED_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    pub fn with_trailing_characters(mut self, allow: bool) -> Self {
        self.allow_trailing_characters = allow;
        self
    }
}
