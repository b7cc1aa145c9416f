//! Automatic semicolon insertion.
//!
//! A line break ends a statement unless the next token clearly continues the
//! expression. The resolver walks four phases:
//!
//! ```text
//! seek line boundary ──► skip trivia ──► classify next token ──► Decision
//! ```
//!
//! The inserted terminator is zero-width at the call's start position (the
//! end is marked before anything is read); an explicit `;` is consumed
//! instead. Some positions hand control to another resolver rather than
//! deciding here; those are returned as [`Decision`] variants and dispatched
//! by the scanner.
//!
//! # Insertion Bias
//!
//! When no continuation pattern is recognized, a terminator is inserted.

use tracing::trace;

use crate::cursor::{skip_whitespace, skip_word, ScanCursor};
use crate::kind::{KindSet, TokenKind};
use crate::words::{ContextWord, Word};

/// Outcome of the terminator phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Emit the terminator.
    Insert,
    /// No token at this position.
    Suppress,
    /// A `/` follows the trivia: hand over to the block comment scanner.
    /// Insertion is deferred to the next call.
    Comment,
    /// A `?` follows: hand over to the safe-navigation resolver.
    SafeNav,
    /// A `!` follows on the same line: hand over to the `!is` resolver.
    NotIs,
}

/// Run the terminator phases from the cursor's position.
pub(crate) fn resolve<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Decision {
    cursor.mark_end();

    let Some(saw_newline) = seek_line_boundary(cursor) else {
        return Decision::Insert;
    };

    skip_whitespace(cursor);
    if cursor.peek() == '/' {
        return Decision::Comment;
    }

    let decision = if saw_newline {
        classify(cursor, valid)
    } else {
        same_line(cursor, valid)
    };
    trace!(?decision, saw_newline, "terminator decision");
    decision
}

/// Skip horizontal whitespace up to the first line break.
///
/// Returns `Some(true)` after consuming a line break (`\n`, `\r\n` or a lone
/// `\r`) and `Some(false)` when other content comes first. Returns `None`
/// when the terminator is already settled: end of input, or an explicit `;`
/// (consumed and marked).
fn seek_line_boundary<C: ScanCursor>(cursor: &mut C) -> Option<bool> {
    loop {
        if cursor.at_end() {
            return None;
        }
        match cursor.peek() {
            ';' => {
                cursor.advance();
                cursor.mark_end();
                return None;
            }
            '\n' => {
                cursor.skip();
                return Some(true);
            }
            '\r' => {
                cursor.skip();
                if cursor.peek() == '\n' {
                    cursor.skip();
                }
                return Some(true);
            }
            c if c.is_whitespace() => cursor.skip(),
            _ => return Some(false),
        }
    }
}

/// Content follows on the same line: only a few characters allow a
/// terminator here.
fn same_line<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Decision {
    match cursor.peek() {
        '!' => Decision::NotIs,
        '?' if valid.has(TokenKind::SafeNav) => Decision::SafeNav,
        // Header boundary: `package a.b import c.d`.
        'i' if skip_word(cursor, "import") => Decision::Insert,
        _ => Decision::Suppress,
    }
}

/// Classify the first token on the next line.
fn classify<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Decision {
    loop {
        let decision = match cursor.peek() {
            ',' | '.' | ':' | '*' | '%' | '>' | '<' | '=' | '{' | '[' | '|' | '&' | '/' => {
                Decision::Suppress
            }
            // `++x`, `--x` and signed literals start statements; a lone
            // `+`/`-` continues a binary expression.
            c @ ('+' | '-') => {
                cursor.skip();
                let next = cursor.peek();
                if next == c || next.is_ascii_digit() {
                    Decision::Insert
                } else {
                    Decision::Suppress
                }
            }
            '!' => bang(cursor, valid),
            '?' if valid.has(TokenKind::SafeNav) => Decision::SafeNav,
            '?' => Decision::Insert,
            ';' => {
                cursor.advance();
                cursor.mark_end();
                Decision::Insert
            }
            '@' => match annotation(cursor, valid) {
                Some(decision) => decision,
                None => continue,
            },
            c if c.is_alphabetic() => soft_keyword(cursor, valid),
            _ => Decision::Insert,
        };
        return decision;
    }
}

/// `!` on a new line: `!=` continues, unary `!` and `!is` start a statement.
fn bang<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Decision {
    cursor.skip();
    if cursor.peek() == 'i' && valid.has(TokenKind::NotIs) {
        cursor.skip();
        if cursor.peek() == 's' {
            cursor.skip();
            if !cursor.peek().is_alphanumeric() {
                return Decision::Insert;
            }
        }
    }
    if cursor.peek() == '=' {
        Decision::Suppress
    } else {
        Decision::Insert
    }
}

/// Skip modifiers, then decide on the context word that follows.
fn soft_keyword<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Decision {
    let mut word = Word::capture(cursor);
    while word.is_modifier() {
        skip_whitespace(cursor);
        word = Word::capture(cursor);
    }

    let Some(keyword) = word.context_word() else {
        // Ordinary identifier, or nothing alphabetic after the modifiers.
        trace!(empty = word.is_empty(), "no context word");
        return Decision::Insert;
    };

    let insert = match keyword {
        // Secondary constructor in a class body, or a variable named
        // `constructor` being accessed or assigned.
        ContextWord::Constructor => {
            skip_whitespace(cursor);
            valid.has(TokenKind::MemberSemi) || matches!(cursor.peek(), '.' | '=')
        }
        // `else` continues an `if`, except as a `when` arm: `else ->`.
        ContextWord::Else => {
            skip_whitespace(cursor);
            if cursor.peek() == '-' {
                cursor.skip();
                cursor.peek() == '>'
            } else {
                false
            }
        }
        // Accessor keyword only where the grammar accepts one; `get[...]` is
        // an identifier either way.
        ContextWord::Get => !valid.has(TokenKind::Get) || cursor.peek() == '[',
        ContextWord::Set => return setter(cursor, valid),
        ContextWord::In => valid.has(TokenKind::In),
        ContextWord::Instanceof | ContextWord::By | ContextWord::As | ContextWord::Where => false,
    };
    trace!(keyword = keyword.as_str(), insert, "context word");
    if insert {
        Decision::Insert
    } else {
        Decision::Suppress
    }
}

/// `set` on a new line.
fn setter<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Decision {
    let accessor_valid = valid.has(TokenKind::Set);
    let next = cursor.peek();
    if accessor_valid && !matches!(next, '[' | '(' | '.') {
        return Decision::Suppress;
    }
    if next == '(' && accessor_valid {
        // `set(value) = ...` continues the property; `set(value)` alone on its
        // line is a call to a function named `set`.
        while !cursor.at_end() && cursor.peek() != ')' {
            cursor.skip();
        }
        cursor.skip();
        while cursor.peek().is_whitespace() {
            if cursor.peek() == '\n' {
                return Decision::Insert;
            }
            cursor.skip();
        }
        return Decision::Suppress;
    }
    Decision::Insert
}

/// `@` on a new line.
///
/// Returns `None` when the annotation was skipped and the token after it
/// must be classified instead.
fn annotation<C: ScanCursor>(cursor: &mut C, valid: KindSet) -> Option<Decision> {
    if valid.has(TokenKind::Constructor) {
        // `@Inject constructor(...)` belongs to the primary constructor.
        while !cursor.at_end() && !cursor.peek().is_whitespace() {
            cursor.skip();
        }
        skip_whitespace(cursor);
        return Some(if skip_word(cursor, "constructor") {
            Decision::Suppress
        } else {
            Decision::Insert
        });
    }

    if valid.intersects(KindSet::GET | KindSet::SET) {
        // Annotation on an accessor. Arguments may contain spaces but not
        // line breaks.
        let mut in_parens = false;
        while !cursor.at_end() {
            let c = cursor.peek();
            let boundary = if in_parens {
                c == '\n'
            } else {
                c.is_whitespace()
            };
            if boundary {
                break;
            }
            cursor.skip();
            match cursor.peek() {
                '(' => in_parens = true,
                ')' => in_parens = false,
                _ => {}
            }
        }
        skip_whitespace(cursor);
        if cursor.peek() == '/' {
            return Some(Decision::Insert);
        }
        return None;
    }

    Some(Decision::Insert)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
