//! Word matching for the terminator resolver.
//!
//! Two fixed vocabularies:
//! 1. **Modifiers**: skipped in runs before the real decision is made
//! 2. **Context words**: soft keywords whose position drives the decision
//!
//! Both lookups are length-bucketed `match`es. A word is captured once and
//! checked against both vocabularies without re-reading the input.

use crate::cursor::ScanCursor;

/// Declaration modifiers, in grammar order.
pub const MODIFIERS: [&str; 15] = [
    "public",
    "private",
    "protected",
    "internal",
    "abstract",
    "final",
    "open",
    "override",
    "lateinit",
    "vararg",
    "noinline",
    "crossinline",
    "external",
    "suspend",
    "inline",
];

/// Context words, indexed by [`ContextWord::index()`].
pub const CONTEXT_WORDS: [&str; 9] = [
    "else",
    "in",
    "instanceof",
    "get",
    "set",
    "constructor",
    "by",
    "as",
    "where",
];

/// Longest word in either vocabulary.
const LONGEST_WORD: usize = 11;

/// A soft keyword that changes the terminator decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextWord {
    Else,
    In,
    Instanceof,
    Get,
    Set,
    Constructor,
    By,
    As,
    Where,
}

impl ContextWord {
    /// Look up a context word.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.len() {
            2 => match word {
                "in" => Some(Self::In),
                "by" => Some(Self::By),
                "as" => Some(Self::As),
                _ => None,
            },
            3 => match word {
                "get" => Some(Self::Get),
                "set" => Some(Self::Set),
                _ => None,
            },
            4 => match word {
                "else" => Some(Self::Else),
                _ => None,
            },
            5 => match word {
                "where" => Some(Self::Where),
                _ => None,
            },
            10 => match word {
                "instanceof" => Some(Self::Instanceof),
                _ => None,
            },
            11 => match word {
                "constructor" => Some(Self::Constructor),
                _ => None,
            },
            _ => None,
        }
    }

    /// Position in [`CONTEXT_WORDS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        CONTEXT_WORDS[self.index()]
    }
}

/// Whether `word` is a declaration modifier.
pub(crate) fn is_modifier(word: &str) -> bool {
    match word.len() {
        4 => word == "open",
        5 => word == "final",
        6 => matches!(word, "public" | "vararg" | "inline"),
        7 => matches!(word, "private" | "suspend"),
        8 => matches!(
            word,
            "internal" | "abstract" | "override" | "lateinit" | "noinline" | "external"
        ),
        9 => word == "protected",
        11 => word == "crossinline",
        _ => false,
    }
}

/// A run of alphabetic characters taken from the cursor.
///
/// Only runs that could still be a vocabulary word are kept; anything longer
/// than [`LONGEST_WORD`] or containing non-ASCII letters is consumed in full
/// and remembered as unmatchable.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Word {
    bytes: [u8; LONGEST_WORD],
    len: usize,
    matchable: bool,
}

impl Word {
    /// Consume the maximal alphabetic run at the cursor as trivia.
    pub(crate) fn capture<C: ScanCursor>(cursor: &mut C) -> Self {
        let mut word = Self {
            bytes: [0; LONGEST_WORD],
            len: 0,
            matchable: true,
        };
        while cursor.peek().is_alphabetic() {
            word.push(cursor.peek());
            cursor.skip();
        }
        word
    }

    fn push(&mut self, c: char) {
        if self.matchable && c.is_ascii() && self.len < LONGEST_WORD {
            #[allow(clippy::cast_possible_truncation, reason = "checked ASCII")]
            let byte = c as u8;
            self.bytes[self.len] = byte;
        } else {
            self.matchable = false;
        }
        self.len += 1;
    }

    /// No alphabetic character was at the cursor.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Captured text, `None` if it cannot match any vocabulary word.
    fn text(&self) -> Option<&str> {
        if !self.matchable {
            return None;
        }
        std::str::from_utf8(&self.bytes[..self.len]).ok()
    }

    pub(crate) fn is_modifier(&self) -> bool {
        self.text().is_some_and(is_modifier)
    }

    pub(crate) fn context_word(&self) -> Option<ContextWord> {
        self.text().and_then(ContextWord::from_word)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
