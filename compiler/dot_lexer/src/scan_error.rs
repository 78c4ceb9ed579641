//! Scan errors.
//!
//! Errors never stop the scanner. Each one is recorded with the position it
//! refers to and scanning resumes with a best-effort token.

use std::fmt;

use thiserror::Error;

use crate::Position;

/// A lexical error and where it was detected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{pos}: {kind}")]
pub struct ScanError {
    pub pos: Position,
    pub kind: ScanErrorKind,
}

impl ScanError {
    pub fn new(pos: Position, kind: ScanErrorKind) -> Self {
        ScanError { pos, kind }
    }
}

/// What went wrong. The `Display` text is the diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanErrorKind {
    // === Encoding ===
    #[error("illegal character NUL")]
    NulCharacter,
    #[error("illegal UTF-8 encoding")]
    InvalidUtf8,
    #[error("illegal character {}", CharName(.ch))]
    IllegalCharacter { ch: char },

    // === Unterminated Constructs ===
    #[error("comment not terminated")]
    UnterminatedComment,
    #[error("string not terminated")]
    UnterminatedString,
    #[error("character literal not terminated")]
    UnterminatedChar,
    #[error("raw string literal not terminated")]
    UnterminatedRawString,
    #[error("HTML literal not terminated")]
    UnterminatedHtml,

    // === Literal Contents ===
    /// Zero or several characters between single quotes.
    #[error("illegal character literal")]
    IllegalCharLiteral,
    #[error("unknown escape sequence")]
    UnknownEscape,
    /// Fewer digits than the escape form requires.
    #[error("escape sequence not terminated")]
    UnterminatedEscape,
    #[error("illegal character {} in escape sequence", CharName(.ch))]
    IllegalEscapeCharacter { ch: char },
    /// Escape value above the form's maximum or inside the surrogate range.
    #[error("escape sequence is invalid Unicode code point")]
    InvalidCodePoint { value: u32 },

    /// A required character class was missing, e.g. the digits of a numeral.
    #[error("expected {expected}, found {}", Found(.found))]
    Expected {
        expected: &'static str,
        found: Option<char>,
    },
}

/// `U+0041 'A'` for printable characters, bare `U+0007` otherwise.
struct CharName<'a>(&'a char);

impl fmt::Display for CharName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = *self.0;
        write!(f, "U+{:04X}", u32::from(ch))?;
        if !ch.is_control() && !ch.is_whitespace() {
            write!(f, " '{ch}'")?;
        }
        Ok(())
    }
}

/// The lookahead an `Expected` error saw.
struct Found<'a>(&'a Option<char>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            None => f.write_str("EOF"),
            Some('\n') => f.write_str("newline"),
            Some(ch) if ch.is_control() || ch.is_whitespace() => {
                write!(f, "U+{:04X}", u32::from(ch))
            }
            Some(ch) => write!(f, "'{ch}'"),
        }
    }
}
