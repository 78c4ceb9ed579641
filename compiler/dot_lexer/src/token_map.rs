//! Token kind lookup.
//!
//! The scanner resolves every kind it emits through a [`TokenMap`], keyed by
//! spelling: punctuation by its literal text (`"->"`), literal classes by
//! their class name (`"id"`, `"float_lit"`), and keywords by their exact
//! text. [`TokenTable`] is the stock implementation.

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Read-only spelling-to-kind lookup used by the scanner.
pub trait TokenMap {
    /// The kind registered under `text`, or [`TokenKind::ILLEGAL`].
    fn kind_of(&self, text: &str) -> TokenKind;
}

impl<M: TokenMap + ?Sized> TokenMap for &M {
    fn kind_of(&self, text: &str) -> TokenKind {
        (**self).kind_of(text)
    }
}

/// Name of kind 0 in every table.
const INVALID: &str = "INVALID";

/// Spellings registered by [`TokenTable::dot`], in kind order after
/// `INVALID`.
#[rustfmt::skip]
const DOT_SPELLINGS: &[&str] = &[
    "$", "ε", ",", "{", "}", ":", ";", "+", "-", "--", "->", "=", "[", "]", "(", ")", "|", "/",
    // literal classes
    "id", "int_lit", "float_lit", "string_lit", "char", "html_lit", "comment",
    // keywords
    "strict", "Strict", "STRICT",
    "graph", "Graph", "GRAPH",
    "digraph", "Digraph", "DIGRAPH",
    "node", "Node", "NODE",
    "edge", "Edge", "EDGE",
    "subgraph", "Subgraph", "SUBGRAPH",
];

/// Ordered table of spellings where a spelling's index is its kind.
///
/// Kind 0 is always `INVALID` and never returned by [`TokenMap::kind_of`]
/// as a match; looking up `"INVALID"` yields [`TokenKind::ILLEGAL`] like any
/// unknown text.
#[derive(Clone, Debug)]
pub struct TokenTable {
    names: Vec<Box<str>>,
    index: FxHashMap<Box<str>, TokenKind>,
}

impl TokenTable {
    /// Build a table from spellings, numbering kinds from 1.
    ///
    /// A repeated spelling keeps its first kind and its later occurrences
    /// are ignored. Spellings past the `u16` kind space are ignored.
    pub fn new<I, S>(spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = TokenTable {
            names: vec![INVALID.into()],
            index: FxHashMap::default(),
        };
        for spelling in spellings {
            let spelling = spelling.as_ref();
            if spelling == INVALID || table.index.contains_key(spelling) {
                continue;
            }
            let Ok(raw) = u16::try_from(table.names.len()) else {
                break;
            };
            table.names.push(spelling.into());
            table.index.insert(spelling.into(), TokenKind::new(raw));
        }
        table
    }

    /// The token table for the DOT grammar.
    pub fn dot() -> Self {
        Self::new(DOT_SPELLINGS)
    }

    /// The spelling registered for `kind`.
    pub fn name(&self, kind: TokenKind) -> Option<&str> {
        self.names.get(usize::from(kind.index())).map(AsRef::as_ref)
    }

    /// Iterate `(kind, spelling)` pairs in kind order, skipping kind 0.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, &str)> {
        self.names
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(i, name)| Some((TokenKind::new(u16::try_from(i).ok()?), name.as_ref())))
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::dot()
    }
}

impl TokenMap for TokenTable {
    fn kind_of(&self, text: &str) -> TokenKind {
        self.index.get(text).copied().unwrap_or(TokenKind::ILLEGAL)
    }
}

impl TokenMap for FxHashMap<String, TokenKind> {
    fn kind_of(&self, text: &str) -> TokenKind {
        self.get(text).copied().unwrap_or(TokenKind::ILLEGAL)
    }
}

#[cfg(test)]
mod tests;
