//! Scanner entry point and the host's state protocol.
//!
//! Resolvers run in a fixed priority order; the first one that is requested
//! and succeeds produces the token:
//!
//! 1. raw string content (exclusive: nothing else runs when requested)
//! 2. statement / member terminator
//! 3. `!is`
//! 4. `in`
//! 5. `?.`
//! 6. block comment

use tracing::trace;

use crate::cursor::{skip_whitespace, ScanCursor, ScannedSpan, SourceCursor};
use crate::kind::{KindSet, TokenKind};
use crate::terminator::Decision;
use crate::{block_comment, contextual, string_content, terminator};

/// Host-facing scanner protocol.
///
/// Mirrors the external scanner lifecycle: one `scan` per lookahead
/// position, plus snapshot hooks for incremental reparsing.
pub trait ExternalScanner {
    /// Try to produce one token at the cursor.
    ///
    /// Returns the produced kind, or `None` when no requested kind matches.
    /// The cursor's committed end marks the consumed span on success; on
    /// `None` the host discards whatever the cursor read.
    fn scan<C: ScanCursor>(&self, cursor: &mut C, valid: KindSet) -> Option<TokenKind>;

    /// Write a snapshot into `buffer`, returning the number of bytes used.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore from a snapshot produced by [`serialize`](Self::serialize).
    fn deserialize(&mut self, state: &[u8]);
}

/// The stateless contextual scanner.
///
/// Holds nothing between calls, so identical calls always agree and
/// snapshots are empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    pub const fn new() -> Self {
        Scanner
    }
}

impl ExternalScanner for Scanner {
    fn scan<C: ScanCursor>(&self, cursor: &mut C, valid: KindSet) -> Option<TokenKind> {
        let produced = dispatch(cursor, valid);
        trace!(?valid, ?produced, "external scan");
        produced
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _state: &[u8]) {}
}

fn dispatch<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Option<TokenKind> {
    if valid.has(TokenKind::StringContent) {
        return string_content::scan(cursor);
    }

    if let Some(terminator) = valid.terminator() {
        return match terminator::resolve(cursor, valid) {
            Decision::Insert => Some(terminator),
            Decision::Comment => comment(cursor, valid),
            Decision::SafeNav => contextual::safe_nav(cursor),
            Decision::NotIs if valid.has(TokenKind::NotIs) => contextual::not_is(cursor),
            Decision::Suppress | Decision::NotIs => None,
        };
    }

    skip_whitespace(cursor);

    if valid.has(TokenKind::NotIs) && cursor.peek() == '!' {
        return contextual::not_is(cursor);
    }
    if valid.has(TokenKind::In) && cursor.peek() == 'i' {
        return contextual::membership(cursor);
    }
    if valid.has(TokenKind::SafeNav) && cursor.peek() == '?' {
        return contextual::safe_nav(cursor);
    }

    comment(cursor, valid)
}

/// Block comments are literal text inside strings, where `$` is requested.
fn comment<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Option<TokenKind> {
    if valid.has(TokenKind::Dollar) || !valid.has(TokenKind::BlockComment) {
        return None;
    }
    block_comment::scan(cursor)
}

/// A token produced by [`scan_str`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: ScannedSpan,
}

/// Run one scan call over `source` starting at byte `offset`.
///
/// Returns `None` when no token is produced, including when `offset` is not
/// a char boundary of `source`.
pub fn scan_str(source: &str, offset: usize, valid: KindSet) -> Option<Token> {
    let mut cursor = SourceCursor::at(source, offset)?;
    let kind = Scanner::new().scan(&mut cursor, valid)?;
    Some(Token {
        kind,
        span: cursor.finish(),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
