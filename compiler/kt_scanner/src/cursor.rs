//! Forward-only cursor over the host's character stream.
//!
//! The host owns the input; a resolver only sees the current character and
//! can move past it in two ways. [`advance`](ScanCursor::advance) makes the
//! character part of the token, [`skip`](ScanCursor::skip) treats it as
//! leading trivia. [`mark_end`](ScanCursor::mark_end) fixes where the token
//! stops; characters read after the last mark are lookahead only and are
//! handed back to the host when the call returns.
//!
//! There is no way to move backwards. Resolvers peek, decide, and only then
//! consume.
//!
//! # End of Input
//!
//! [`peek`](ScanCursor::peek) returns `'\0'` at end of input, the same
//! sentinel convention as the host lexer. No resolver treats `'\0'` as
//! whitespace, alphabetic or punctuation, so every `while`-style loop over a
//! character class stops there without an explicit end check.

use std::ops::Range;

/// Host cursor contract.
pub trait ScanCursor {
    /// Current character, `'\0'` at end of input.
    fn peek(&self) -> char;

    /// Consume the current character as part of the token.
    fn advance(&mut self);

    /// Consume the current character as trivia; the token starts after it.
    fn skip(&mut self);

    /// Commit the current position as the end of the token.
    fn mark_end(&mut self);

    /// Whether the cursor is at end of input.
    fn at_end(&self) -> bool;

    /// Advance up to (not including) the next `a` or `b`, or to end of input.
    ///
    /// Returns `true` if at least one character was consumed. Both needles
    /// must be ASCII.
    fn advance_until(&mut self, a: char, b: char) -> bool {
        let mut consumed = false;
        while !self.at_end() {
            let c = self.peek();
            if c == a || c == b {
                break;
            }
            self.advance();
            consumed = true;
        }
        consumed
    }
}

/// Skip any run of whitespace, newlines included.
pub(crate) fn skip_whitespace<C: ScanCursor>(cursor: &mut C) {
    while cursor.peek().is_whitespace() {
        cursor.skip();
    }
}

/// Advance over any run of whitespace, keeping it inside the token.
pub(crate) fn advance_whitespace<C: ScanCursor>(cursor: &mut C) {
    while cursor.peek().is_whitespace() {
        cursor.advance();
    }
}

/// Skip over `word` character by character.
///
/// Stops at the first mismatch and returns `false`; the matched prefix stays
/// consumed.
pub(crate) fn skip_word<C: ScanCursor>(cursor: &mut C, word: &str) -> bool {
    for expected in word.chars() {
        if cursor.peek() != expected {
            return false;
        }
        cursor.skip();
    }
    true
}

/// Byte ranges produced by one scan call on a [`SourceCursor`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScannedSpan {
    /// From the call's start position to the committed end, trivia included.
    pub consumed: Range<usize>,
    /// The token itself: leading skipped trivia excluded.
    pub token: Range<usize>,
}

impl ScannedSpan {
    /// Whether the emitted token covers no characters.
    pub fn is_zero_width(&self) -> bool {
        self.token.is_empty()
    }
}

/// In-memory cursor over a `&str`, following the host's span rules.
///
/// - `skip` moves the token start to the current position,
/// - the committed end is the last `mark_end` position, or the current
///   position when `mark_end` was never called,
/// - a committed end before the token start collapses the token onto the end.
#[derive(Clone, Debug)]
pub struct SourceCursor<'a> {
    source: &'a str,
    /// Position at call entry.
    start: usize,
    /// Current read position (byte offset, always on a char boundary).
    pos: usize,
    token_start: usize,
    marked: Option<usize>,
}

impl<'a> SourceCursor<'a> {
    /// Cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            token_start: 0,
            marked: None,
        }
    }

    /// Cursor at byte `offset`, `None` unless it lies on a char boundary
    /// within the source (`offset == source.len()` is allowed).
    pub fn at(source: &'a str, offset: usize) -> Option<Self> {
        source.is_char_boundary(offset).then_some(Self {
            source,
            start: offset,
            pos: offset,
            token_start: offset,
            marked: None,
        })
    }

    /// Current read position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Close the call and compute its spans.
    pub fn finish(self) -> ScannedSpan {
        let end = self.marked.unwrap_or(self.pos);
        let token_start = self.token_start.min(end);
        ScannedSpan {
            consumed: self.start..end,
            token: token_start..end,
        }
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.source[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }
}

impl ScanCursor for SourceCursor<'_> {
    #[inline]
    fn peek(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    #[inline]
    fn advance(&mut self) {
        self.bump();
    }

    #[inline]
    fn skip(&mut self) {
        self.bump();
        self.token_start = self.pos;
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked = Some(self.pos);
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// memchr-accelerated: the needles are ASCII, so any hit is a char
    /// boundary.
    fn advance_until(&mut self, a: char, b: char) -> bool {
        debug_assert!(a.is_ascii() && b.is_ascii(), "needles must be ASCII");
        let remaining = &self.source.as_bytes()[self.pos..];
        #[allow(
            clippy::cast_possible_truncation,
            reason = "needles are asserted ASCII"
        )]
        let offset = memchr::memchr2(a as u8, b as u8, remaining).unwrap_or(remaining.len());
        self.pos += offset;
        offset > 0
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
