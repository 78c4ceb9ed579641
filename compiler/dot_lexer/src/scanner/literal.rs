//! Quoted literals: strings, character literals, raw strings and HTML.
//!
//! Each scanner here is entered with the opening delimiter already consumed
//! and `start` pointing at it. Errors are recorded against `start` except for
//! escape problems, which point at the offending escape.

use crate::{Position, ScanErrorKind, TokenMap};

use super::Scanner;

/// Largest value accepted by `\NNN` and `\xHH`.
const MAX_BYTE_ESCAPE: u32 = 0xFF;

impl<M: TokenMap> Scanner<'_, M> {
    /// `"..."`. A newline or end of file ends the literal unterminated; the
    /// newline is left for the next scan.
    pub(super) fn string(&mut self, start: Position) {
        loop {
            match self.ch {
                Some('"') => {
                    self.advance();
                    return;
                }
                None | Some('\n') => {
                    self.error(start, ScanErrorKind::UnterminatedString);
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.escape('"');
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// `'c'`. Exactly one character or escape is allowed between the quotes.
    pub(super) fn char_literal(&mut self, start: Position) {
        let mut n = 0u32;
        loop {
            match self.ch {
                Some('\'') => {
                    self.advance();
                    break;
                }
                None | Some('\n') => {
                    self.error(start, ScanErrorKind::UnterminatedChar);
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.escape('\'');
                    n += 1;
                }
                Some(_) => {
                    self.advance();
                    n += 1;
                }
            }
        }
        if n != 1 {
            self.error(start, ScanErrorKind::IllegalCharLiteral);
        }
    }

    /// `` `...` ``, taken verbatim. Newlines are allowed.
    pub(super) fn raw_string(&mut self, start: Position) {
        loop {
            match self.ch {
                Some('`') => {
                    self.advance();
                    return;
                }
                None => {
                    self.error(start, ScanErrorKind::UnterminatedRawString);
                    return;
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// `<...>` with balanced angle brackets.
    pub(super) fn html(&mut self, start: Position) {
        let mut depth = 1u32;
        while depth > 0 {
            match self.ch {
                None => {
                    self.error(start, ScanErrorKind::UnterminatedHtml);
                    return;
                }
                Some('<') => depth += 1,
                Some('>') => depth -= 1,
                Some(_) => {}
            }
            self.advance();
        }
    }

    /// One escape sequence; the backslash is already consumed.
    ///
    /// A malformed escape is recorded and scanning of the enclosing literal
    /// continues.
    pub(super) fn escape(&mut self, quote: char) {
        let pos = self.pos;
        let (digits, base, max) = match self.ch {
            Some(c) if c == quote => {
                self.advance();
                return;
            }
            Some('a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\') => {
                self.advance();
                return;
            }
            Some('0'..='7') => (3, 8, MAX_BYTE_ESCAPE),
            Some('x') => {
                self.advance();
                (2, 16, MAX_BYTE_ESCAPE)
            }
            Some('u') => {
                self.advance();
                (4, 16, u32::from(char::MAX))
            }
            Some('U') => {
                self.advance();
                (8, 16, u32::from(char::MAX))
            }
            None | Some('\n') => {
                self.error(pos, ScanErrorKind::UnterminatedEscape);
                return;
            }
            Some(_) => {
                self.error(pos, ScanErrorKind::UnknownEscape);
                self.advance();
                return;
            }
        };

        let mut value = 0u32;
        let mut remaining = digits;
        while remaining > 0 {
            let Some(ch) = self.ch else {
                break;
            };
            if ch == quote || ch == '\n' {
                break;
            }
            let Some(digit) = ch.to_digit(base) else {
                self.error(self.pos, ScanErrorKind::IllegalEscapeCharacter { ch });
                return;
            };
            // At most 8 hex digits, so this stays within u32.
            value = value * base + digit;
            self.advance();
            remaining -= 1;
        }

        if remaining > 0 {
            self.error(pos, ScanErrorKind::UnterminatedEscape);
            return;
        }
        if value > max || (0xD800..0xE000).contains(&value) {
            self.error(pos, ScanErrorKind::InvalidCodePoint { value });
        }
    }
}
