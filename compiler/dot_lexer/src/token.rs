//! Token kinds and tokens.
//!
//! A [`TokenKind`] is an opaque number handed out by a
//! [`TokenMap`](crate::TokenMap). The scanner never hard-codes kind values;
//! it asks the map for the kind registered under a spelling such as `"->"`
//! or `"id"`.

use std::borrow::Cow;
use std::fmt;

/// Classification of a lexical unit, as assigned by a token map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKind(u16);

impl TokenKind {
    /// Reserved "not found" kind. Token maps return this for unknown text,
    /// and the scanner uses it for characters no rule accepts.
    pub const ILLEGAL: TokenKind = TokenKind(0);

    /// Create a kind from its raw value.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        TokenKind(raw)
    }

    /// Raw value of this kind.
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Returns `true` for [`TokenKind::ILLEGAL`].
    #[inline]
    pub const fn is_illegal(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One lexical unit: its kind and the exact source bytes it covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lit: &'src [u8],
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, lit: &'src [u8]) -> Self {
        Token { kind, lit }
    }

    /// The literal as text. Invalid UTF-8 is replaced with U+FFFD.
    pub fn text(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.lit)
    }

    /// Length of the literal in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "literals are slices of a source buffer bounded by u32"
    )]
    pub fn len(&self) -> u32 {
        self.lit.len() as u32
    }

    /// Only the end-of-file token has an empty literal.
    pub fn is_empty(&self) -> bool {
        self.lit.is_empty()
    }
}
