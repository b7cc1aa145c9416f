//! Contextual external scanner for the Kotlin tree-sitter grammar.
//!
//! The generated parser resolves almost every token with its own lexer. The
//! handful of tokens it cannot resolve from a context-free table alone are
//! delegated here, together with the set of kinds the parser would accept at
//! the current position:
//!
//! - automatic semicolon insertion (statement and class-member terminators),
//! - `/* ... */` block comments with arbitrary nesting,
//! - the soft operators `!is`, `in` and `?.`,
//! - raw (`"""`) string content up to the next interpolation or delimiter.
//!
//! # Architecture
//!
//! ```text
//! host lexer ──► ScanCursor ──► Scanner::scan(cursor, KindSet)
//!                                   │
//!                                   ├─ string_content
//!                                   ├─ terminator ──► Decision
//!                                   ├─ contextual (!is, in, ?.)
//!                                   └─ block_comment
//! ```
//!
//! The scanner is stateless: every decision is re-derived by reading forward
//! from the cursor, so snapshots for incremental reparsing are always empty.
//! Cursor motion is forward-only; resolvers decide with a few peeked
//! characters before they consume anything they cannot give back.

mod block_comment;
mod contextual;
mod cursor;
pub mod ffi;
mod kind;
mod scanner;
mod string_content;
mod terminator;
mod walk;
mod words;

pub use cursor::{ScanCursor, ScannedSpan, SourceCursor};
pub use kind::{KindSet, TokenKind};
pub use scanner::{scan_str, ExternalScanner, Scanner, Token};
pub use walk::{walk, Segment};
pub use words::{ContextWord, CONTEXT_WORDS, MODIFIERS};
