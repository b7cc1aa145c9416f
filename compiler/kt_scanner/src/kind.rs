//! External token kinds and the per-call requested-kind set.
//!
//! Discriminants match the order of the grammar's `externals` list, so a
//! `TokenKind` converts to and from the host's symbol index without a table.

use bitflags::bitflags;

/// A token the external scanner can produce.
///
/// `#[repr(u16)]` with discriminants equal to the host symbol index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenKind {
    /// Statement terminator, explicit `;` or inserted at a line break.
    Semi = 0,
    /// Terminator between class members.
    MemberSemi = 1,
    /// `/* ... */`, possibly nested.
    BlockComment = 2,
    /// Negated type check `!is`.
    NotIs = 3,
    /// Membership test `in`.
    In = 4,
    /// Safe navigation `?.`, whitespace allowed between the two characters.
    SafeNav = 5,
    /// Literal run inside a `"""` string.
    StringContent = 6,
    /// Secondary-constructor marker. Only ever requested, never produced.
    Constructor = 7,
    /// Property-getter marker. Only ever requested, never produced.
    Get = 8,
    /// Property-setter marker. Only ever requested, never produced.
    Set = 9,
    /// Interpolation anchor `$`. Requested inside string literals only.
    Dollar = 10,
}

impl TokenKind {
    /// Number of external kinds (length of the host's valid-symbol array).
    pub const COUNT: usize = 11;

    /// All kinds in symbol order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Semi,
        TokenKind::MemberSemi,
        TokenKind::BlockComment,
        TokenKind::NotIs,
        TokenKind::In,
        TokenKind::SafeNav,
        TokenKind::StringContent,
        TokenKind::Constructor,
        TokenKind::Get,
        TokenKind::Set,
        TokenKind::Dollar,
    ];

    /// Host symbol index.
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Kind for a host symbol index, `None` if out of range.
    pub fn from_symbol(symbol: u16) -> Option<Self> {
        Self::ALL.get(usize::from(symbol)).copied()
    }

    /// Name used by the grammar and by the `ktscan` driver.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Semi => "semi",
            TokenKind::MemberSemi => "class_member_semi",
            TokenKind::BlockComment => "block_comment",
            TokenKind::NotIs => "not_is",
            TokenKind::In => "in",
            TokenKind::SafeNav => "q_dot",
            TokenKind::StringContent => "multiline_string_content",
            TokenKind::Constructor => "constructor",
            TokenKind::Get => "get",
            TokenKind::Set => "set",
            TokenKind::Dollar => "dollar",
        }
    }

    /// Inverse of [`name()`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

bitflags! {
    /// Kinds the parser accepts at the current position.
    ///
    /// Supplied per call and never mutated by the scanner. Several kinds may
    /// be requested at once; the resolver order in [`Scanner`](crate::Scanner)
    /// decides which one wins.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct KindSet: u16 {
        const SEMI = 1 << 0;
        const MEMBER_SEMI = 1 << 1;
        const BLOCK_COMMENT = 1 << 2;
        const NOT_IS = 1 << 3;
        const IN = 1 << 4;
        const SAFE_NAV = 1 << 5;
        const STRING_CONTENT = 1 << 6;
        const CONSTRUCTOR = 1 << 7;
        const GET = 1 << 8;
        const SET = 1 << 9;
        const DOLLAR = 1 << 10;
    }
}

impl KindSet {
    /// Set holding exactly `kind`.
    #[inline]
    pub const fn of(kind: TokenKind) -> Self {
        Self::from_bits_truncate(1 << kind.symbol())
    }

    /// Whether `kind` is requested.
    #[inline]
    pub const fn has(self, kind: TokenKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Build from the host's boolean array indexed by symbol.
    ///
    /// Entries past [`TokenKind::COUNT`] are ignored; a shorter array leaves
    /// the missing kinds unrequested.
    pub fn from_valid_symbols(valid: &[bool]) -> Self {
        valid
            .iter()
            .zip(TokenKind::ALL)
            .filter(|(is_valid, _)| **is_valid)
            .map(|(_, kind)| kind)
            .collect()
    }

    /// Requested kinds in symbol order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.has(*kind))
    }

    /// Terminator the ASI path emits: `Semi` wins over `MemberSemi`.
    pub const fn terminator(self) -> Option<TokenKind> {
        if self.has(TokenKind::Semi) {
            Some(TokenKind::Semi)
        } else if self.has(TokenKind::MemberSemi) {
            Some(TokenKind::MemberSemi)
        } else {
            None
        }
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | Self::of(kind))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
