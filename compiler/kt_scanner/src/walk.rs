//! Whole-input replay with a fixed requested set.
//!
//! Stands in for the host parser when exercising the scanner outside a
//! generated grammar: after a produced token the next call starts at its
//! committed end; after a failed call, or a zero-width token, the host
//! consumes one character on its own. The consumed ranges of the returned
//! segments tile the input exactly.

use std::ops::Range;

use crate::cursor::SourceCursor;
use crate::kind::{KindSet, TokenKind};
use crate::scanner::{ExternalScanner, Scanner};

/// One step of a replay.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Kind produced by the scanner, `None` for a character the host consumed.
    pub kind: Option<TokenKind>,
    /// Input covered by this step, trivia included.
    pub consumed: Range<usize>,
    /// The token's own range (equal to `consumed` for host characters).
    pub token: Range<usize>,
}

/// Replay the scanner over all of `source`.
pub fn walk(source: &str, valid: KindSet) -> Vec<Segment> {
    let scanner = Scanner::new();
    let mut segments = Vec::new();
    let mut pos = 0;
    while let Some(mut cursor) = SourceCursor::at(source, pos) {
        if let Some(kind) = scanner.scan(&mut cursor, valid) {
            let span = cursor.finish();
            pos = span.consumed.end;
            let zero_width = span.consumed.is_empty();
            segments.push(Segment {
                kind: Some(kind),
                consumed: span.consumed,
                token: span.token,
            });
            if !zero_width {
                continue;
            }
        }
        // The host lexes one character itself, which also guarantees
        // progress after a zero-width token.
        let Some(c) = source[pos..].chars().next() else {
            break;
        };
        let end = pos + c.len_utf8();
        segments.push(Segment {
            kind: None,
            consumed: pos..end,
            token: pos..end,
        });
        pos = end;
    }
    segments
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
