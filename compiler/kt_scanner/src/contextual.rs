//! Short fixed-lookahead resolvers for `!is`, `in` and `?.`.
//!
//! Each resolver starts at its first character and either produces its token
//! or nothing; once the first character is consumed there is no fallback to
//! another resolver.

use crate::cursor::{advance_whitespace, skip_whitespace, ScanCursor};
use crate::kind::TokenKind;

/// `!is` as one token, unless it is the prefix of a longer word (`!isValid`).
pub(crate) fn not_is<C: ScanCursor>(cursor: &mut C) -> Option<TokenKind> {
    soft_operator(cursor, "!is", TokenKind::NotIs)
}

/// Bare `in`, unless it is the prefix of a longer word (`index`, `in2`).
pub(crate) fn membership<C: ScanCursor>(cursor: &mut C) -> Option<TokenKind> {
    soft_operator(cursor, "in", TokenKind::In)
}

/// `?` followed by `.`, with any whitespace (newlines included) between.
///
/// Leading whitespace is trivia; whitespace between the two characters stays
/// inside the token.
pub(crate) fn safe_nav<C: ScanCursor>(cursor: &mut C) -> Option<TokenKind> {
    skip_whitespace(cursor);
    if cursor.peek() != '?' {
        return None;
    }
    cursor.advance();
    advance_whitespace(cursor);
    if cursor.peek() != '.' {
        return None;
    }
    cursor.advance();
    cursor.mark_end();
    Some(TokenKind::SafeNav)
}

fn soft_operator<C: ScanCursor>(cursor: &mut C, text: &str, kind: TokenKind) -> Option<TokenKind> {
    for expected in text.chars() {
        if cursor.peek() != expected {
            return None;
        }
        cursor.advance();
    }
    cursor.mark_end();
    (!cursor.peek().is_alphanumeric()).then_some(kind)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
