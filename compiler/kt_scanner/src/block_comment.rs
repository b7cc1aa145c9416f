//! Nested `/* ... */` comments.

use crate::cursor::ScanCursor;
use crate::kind::TokenKind;

/// Scan a block comment starting at the cursor.
///
/// Each `/*` opens a level and each `*/` closes one; the token ends at the
/// `*/` that closes the outermost level. Input ending first produces nothing:
/// comments are never closed implicitly.
pub(crate) fn scan<C: ScanCursor>(cursor: &mut C) -> Option<TokenKind> {
    if cursor.peek() != '/' {
        return None;
    }
    cursor.advance();
    if cursor.peek() != '*' {
        return None;
    }
    cursor.advance();

    let mut depth: u32 = 1;
    let mut after_star = false;
    loop {
        if cursor.at_end() {
            tracing::trace!(depth, "unterminated block comment");
            return None;
        }
        match cursor.peek() {
            '*' => {
                cursor.advance();
                after_star = true;
            }
            '/' if after_star => {
                cursor.advance();
                after_star = false;
                depth -= 1;
                if depth == 0 {
                    cursor.mark_end();
                    return Some(TokenKind::BlockComment);
                }
            }
            '/' => {
                cursor.advance();
                after_star = false;
                if cursor.peek() == '*' {
                    depth += 1;
                    cursor.advance();
                }
            }
            _ => {
                cursor.advance();
                after_star = false;
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
