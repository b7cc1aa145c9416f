//! Content of `"""` raw strings.
//!
//! One call consumes the longest literal run it can, so a long string costs
//! one scanner round-trip instead of one per character. The run ends before
//! an interpolation anchor (`$name`, `${`) or before the closing `"""` /
//! `""""`; neither is part of the content token, the grammar matches both
//! itself.

use crate::cursor::ScanCursor;
use crate::kind::TokenKind;

/// Scan one literal run.
///
/// Returns `None` when the run is empty (the cursor is already at an anchor
/// or at the closing delimiter) and when input ends before the closing
/// delimiter.
pub(crate) fn scan<C: ScanCursor>(cursor: &mut C) -> Option<TokenKind> {
    let mut has_content = false;
    while !cursor.at_end() {
        match cursor.peek() {
            '$' => {
                cursor.mark_end();
                cursor.advance();
                if starts_interpolation(cursor.peek()) {
                    return produced(has_content);
                }
                // A lone `$` is literal text.
                has_content = true;
            }
            '"' => {
                cursor.mark_end();
                cursor.advance();
                if cursor.peek() == '"' {
                    cursor.advance();
                    if cursor.peek() == '"' {
                        cursor.advance();
                        if cursor.peek() == '"' {
                            cursor.advance();
                        }
                        return produced(has_content);
                    }
                }
                // One or two quotes are literal text.
                has_content = true;
            }
            _ => {
                cursor.advance_until('$', '"');
                has_content = true;
            }
        }
    }
    tracing::trace!("raw string content reached end of input");
    None
}

#[inline]
fn starts_interpolation(c: char) -> bool {
    c.is_alphabetic() || c == '{'
}

#[inline]
fn produced(has_content: bool) -> Option<TokenKind> {
    has_content.then_some(TokenKind::StringContent)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
