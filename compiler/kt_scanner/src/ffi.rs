//! tree-sitter external scanner ABI.
//!
//! Exports the five `tree_sitter_kotlin_external_scanner_*` symbols the
//! generated parser links against, so this crate (built as a `staticlib`)
//! replaces a hand-written `scanner.c`.
//!
//! # Layout
//!
//! [`TSLexer`] mirrors the prefix of tree-sitter's `TSLexer` struct up to
//! `eof`. Later fields are never read, so newer runtimes that append fields
//! stay compatible.
#![allow(
    unsafe_code,
    reason = "C ABI boundary: raw lexer pointer and valid-symbol array come from the runtime"
)]

use std::ffi::{c_char, c_uint, c_void};

use crate::cursor::ScanCursor;
use crate::kind::{KindSet, TokenKind};
use crate::scanner::{ExternalScanner, Scanner};

/// tree-sitter's lexer interface (leading fields).
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [`ScanCursor`] over a runtime-owned [`TSLexer`].
///
/// Holds the runtime's pointer unchanged. Callbacks cast it back to the
/// runtime's larger lexer struct, so it is never narrowed to a `&mut TSLexer`.
pub struct HostLexer {
    lexer: *mut TSLexer,
}

impl HostLexer {
    /// # Safety
    ///
    /// `lexer` must be non-null and point to a live `TSLexer` whose callbacks
    /// accept it, for as long as the `HostLexer` is used.
    pub unsafe fn new(lexer: *mut TSLexer) -> Self {
        Self { lexer }
    }

    fn set_result_symbol(&mut self, symbol: u16) {
        // SAFETY: `new`'s contract keeps the lexer live and writable.
        unsafe { (*self.lexer).result_symbol = symbol }
    }
}

impl ScanCursor for HostLexer {
    fn peek(&self) -> char {
        // SAFETY: `new`'s contract keeps the lexer live.
        let lookahead = unsafe { (*self.lexer).lookahead };
        u32::try_from(lookahead)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or('\0')
    }

    fn advance(&mut self) {
        // SAFETY: the runtime passed a live lexer for the duration of the
        // scan call; its callbacks accept that same pointer.
        unsafe { ((*self.lexer).advance)(self.lexer, false) }
    }

    fn skip(&mut self) {
        // SAFETY: as in `advance`.
        unsafe { ((*self.lexer).advance)(self.lexer, true) }
    }

    fn mark_end(&mut self) {
        // SAFETY: as in `advance`.
        unsafe { ((*self.lexer).mark_end)(self.lexer) }
    }

    fn at_end(&self) -> bool {
        // SAFETY: as in `advance`.
        unsafe { ((*self.lexer).eof)(self.lexer.cast_const()) }
    }
}

/// No persistent state: the payload is always null.
#[no_mangle]
pub extern "C" fn tree_sitter_kotlin_external_scanner_create() -> *mut c_void {
    std::ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn tree_sitter_kotlin_external_scanner_destroy(_payload: *mut c_void) {}

/// Always writes nothing.
#[no_mangle]
pub extern "C" fn tree_sitter_kotlin_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> c_uint {
    0
}

#[no_mangle]
pub extern "C" fn tree_sitter_kotlin_external_scanner_deserialize(
    _payload: *mut c_void,
    _buffer: *const c_char,
    _length: c_uint,
) {
}

/// Scan one token for the runtime.
///
/// Null pointers produce no token.
///
/// # Safety
///
/// `lexer` must point to a live `TSLexer` whose callbacks accept it, and
/// `valid_symbols` must point to at least [`TokenKind::COUNT`] booleans.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_kotlin_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    if lexer.is_null() || valid_symbols.is_null() {
        return false;
    }
    // SAFETY: caller guarantees `TokenKind::COUNT` readable booleans.
    let valid = KindSet::from_valid_symbols(unsafe {
        std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT)
    });

    // SAFETY: non-null, and the caller guarantees a live lexer.
    let mut cursor = unsafe { HostLexer::new(lexer) };
    match Scanner::new().scan(&mut cursor, valid) {
        Some(kind) => {
            cursor.set_result_symbol(kind.symbol());
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
