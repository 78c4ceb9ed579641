//! Error-tolerant DOT scanner.
//!
//! The scanner pulls one token at a time from a [`SourceBuffer`], holding a
//! single decoded character of lookahead. Kinds are never hard-coded: every
//! token asks the injected [`TokenMap`] for the kind registered under its
//! spelling or literal class.
//!
//! # Error Tolerance
//!
//! Malformed input never stops the scan. Each problem is recorded as a
//! [`ScanError`], counted, and the scanner carries on with a plausible token.
//! Every call to [`Scanner::scan`] consumes at least one character until end
//! of file, after which the end-of-file token repeats at a fixed position.

use dot_lexer_core::{Cursor, Decoded, SourceBuffer};
use tracing::{debug, trace};

use crate::{Mode, Position, ScanError, ScanErrorKind, Token, TokenKind, TokenMap};

mod comment;
mod literal;

/// Pull-based scanner over a borrowed source buffer.
///
/// `M` is usually `&TokenTable`; anything implementing [`TokenMap`] works.
pub struct Scanner<'src, M> {
    cursor: Cursor<'src>,
    map: M,
    mode: Mode,
    /// Lookahead character, `None` at end of file.
    ch: Option<char>,
    /// `true` when the lookahead came from a decode error that is already
    /// recorded.
    ch_reported: bool,
    /// Position of the lookahead character.
    pos: Position,
    errors: Vec<ScanError>,
    error_count: u32,
    /// File named by the most recent line directive.
    filename: Option<String>,
}

impl<'src, M: TokenMap> Scanner<'src, M> {
    /// Create a scanner positioned at the start of `src`.
    pub fn new(src: &'src SourceBuffer, map: M) -> Self {
        let mut scanner = Scanner {
            cursor: src.cursor(),
            map,
            mode: Mode::empty(),
            ch: None,
            ch_reported: false,
            pos: Position::START,
            errors: Vec::new(),
            error_count: 0,
            filename: None,
        };
        scanner.prime(src);
        scanner
    }

    /// Builder-style mode setter.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Reset the scanner to scan `src` from the beginning with `map`.
    ///
    /// Clears the error list, the error count and the line-directive file
    /// name. The mode is kept.
    pub fn init(&mut self, src: &'src SourceBuffer, map: M) {
        self.cursor = src.cursor();
        self.map = map;
        self.ch = None;
        self.ch_reported = false;
        self.pos = Position::START;
        self.errors.clear();
        self.error_count = 0;
        self.filename = None;
        self.prime(src);
    }

    /// Read the first character, stepping over a leading byte-order mark.
    fn prime(&mut self, src: &SourceBuffer) {
        trace!(len = src.len(), bom = src.bom_len() > 0, "scanner init");
        self.read_char();
        if src.bom_len() > 0 && self.ch == Some('\u{FEFF}') {
            self.advance();
            self.pos.column = 1;
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Number of errors recorded since the last `init`.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Errors recorded since the last `init`, in detection order.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Take ownership of the recorded errors.
    pub fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }

    /// File name set by the most recent `//line file:N` directive.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Scan the next token and return it with the position of its first
    /// character.
    ///
    /// At end of file this returns the `"$"` kind with an empty literal, and
    /// keeps returning it on every further call.
    pub fn scan(&mut self) -> (Token<'src>, Position) {
        loop {
            self.skip_whitespace();
            let start = self.pos;
            if let Some(kind) = self.scan_token(start) {
                let tok = Token::new(kind, self.cursor.slice(start.offset, self.pos.offset));
                trace!(
                    kind = kind.index(),
                    offset = start.offset,
                    len = tok.len(),
                    "token"
                );
                return (tok, start);
            }
        }
    }

    // ─── Dispatch ───────────────────────────────────────────────

    /// Scan one token starting at the lookahead. Returns `None` for a
    /// skipped comment.
    fn scan_token(&mut self, start: Position) -> Option<TokenKind> {
        let Some(ch) = self.ch else {
            return Some(self.kind("$"));
        };
        if is_letter(ch) {
            return Some(self.identifier());
        }
        if ch.is_ascii_digit() || ch == '.' {
            return Some(self.number(start));
        }

        let reported = self.ch_reported;
        self.advance();
        let kind = match ch {
            '"' => {
                self.string(start);
                self.kind("string_lit")
            }
            '\'' => {
                self.char_literal(start);
                self.kind("char")
            }
            '`' => {
                self.raw_string(start);
                self.kind("string_lit")
            }
            '<' => {
                self.html(start);
                self.kind("html_lit")
            }
            '#' => return self.comment(start, '#'),
            '/' if matches!(self.ch, Some('/' | '*')) => return self.comment(start, '/'),
            '-' => self.minus(start),
            ',' | '{' | '}' | ':' | ';' | '+' | '=' | '[' | ']' | '(' | ')' | '|' | '/' | 'ε' => {
                self.kind(ch.encode_utf8(&mut [0; 4]))
            }
            _ => {
                if !reported {
                    self.error(start, ScanErrorKind::IllegalCharacter { ch });
                }
                TokenKind::ILLEGAL
            }
        };
        Some(kind)
    }

    fn kind(&self, spelling: &str) -> TokenKind {
        self.map.kind_of(spelling)
    }

    // ─── Identifiers & Numbers ──────────────────────────────────

    /// Identifier or keyword. The lookahead is a letter.
    ///
    /// Runs until the next character is whitespace, `-`, end of file, or a
    /// character the token map knows as a token by itself.
    fn identifier(&mut self) -> TokenKind {
        let start = self.pos.offset;
        self.advance();
        while let Some(ch) = self.ch {
            if ch == '-' || is_whitespace(ch) || self.is_single_char_token(ch) {
                break;
            }
            self.advance();
        }
        let text = self.cursor.slice(start, self.pos.offset);
        let kind = std::str::from_utf8(text).map_or(TokenKind::ILLEGAL, |text| self.kind(text));
        if kind.is_illegal() {
            self.kind("id")
        } else {
            kind
        }
    }

    fn is_single_char_token(&self, ch: char) -> bool {
        !self.kind(ch.encode_utf8(&mut [0; 4])).is_illegal()
    }

    /// Numeral: `digits`, `digits.digits?` or `.digits`. A leading `-`, if
    /// any, is already consumed.
    fn number(&mut self, start: Position) -> TokenKind {
        let mut digits = self.eat_digits();
        if self.ch != Some('.') {
            return self.kind("int_lit");
        }
        self.advance();
        digits += self.eat_digits();
        if digits == 0 {
            self.error(
                start,
                ScanErrorKind::Expected {
                    expected: "digit",
                    found: self.ch,
                },
            );
        }
        self.kind("float_lit")
    }

    fn eat_digits(&mut self) -> u32 {
        let mut n = 0;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            n += 1;
        }
        n
    }

    /// `--`, `->`, a signed numeral, or a lone `-`.
    fn minus(&mut self, start: Position) -> TokenKind {
        match self.ch {
            Some('-') => {
                self.advance();
                self.kind("--")
            }
            Some('>') => {
                self.advance();
                self.kind("->")
            }
            Some(c) if c.is_ascii_digit() => self.number(start),
            // The cursor already sits past the `.`, so `current` is the byte
            // after it.
            Some('.') if self.cursor.current().is_ascii_digit() => self.number(start),
            _ => self.kind("-"),
        }
    }

    // ─── Character Reader ───────────────────────────────────────

    /// Consume the lookahead and read the next character.
    ///
    /// Does nothing at end of file.
    fn advance(&mut self) {
        let Some(ch) = self.ch else {
            return;
        };
        if ch == '\n' {
            self.pos.line = self.pos.line.saturating_add(1);
            self.pos.column = 1;
        } else {
            self.pos.column = self.pos.column.saturating_add(1);
        }
        self.read_char();
    }

    /// Decode the character at the cursor into the lookahead.
    fn read_char(&mut self) {
        self.pos.offset = self.cursor.pos();
        self.ch_reported = false;
        self.ch = match self.cursor.bump_char() {
            Decoded::Char(ch) => Some(ch),
            Decoded::Eof => None,
            Decoded::InteriorNull => {
                self.error(self.pos, ScanErrorKind::NulCharacter);
                self.ch_reported = true;
                Some('\0')
            }
            Decoded::InvalidUtf8 => {
                self.error(self.pos, ScanErrorKind::InvalidUtf8);
                self.ch_reported = true;
                Some(char::REPLACEMENT_CHARACTER)
            }
        };
    }

    /// Consume an ASCII run from the lookahead up to `end` in one step.
    ///
    /// The run must not contain `\n` or NUL.
    fn skip_ascii_run(&mut self, end: u32) {
        let len = end.saturating_sub(self.pos.offset);
        if len == 0 {
            return;
        }
        // The lookahead byte itself is already behind the cursor.
        self.cursor.advance_n(len - 1);
        self.pos.column = self.pos.column.saturating_add(len);
        self.read_char();
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_whitespace) {
            self.advance();
        }
    }

    // ─── Errors ─────────────────────────────────────────────────

    #[cold]
    fn error(&mut self, pos: Position, kind: ScanErrorKind) {
        debug!(
            line = pos.line,
            column = pos.column,
            offset = pos.offset,
            error = %kind,
            "scan error"
        );
        self.error_count = self.error_count.saturating_add(1);
        self.errors.push(ScanError::new(pos, kind));
    }
}

/// Owning iterator over a scanner's tokens, created by
/// [`Scanner::into_iter`]. Stops before end of file.
pub struct Tokens<'src, M> {
    scanner: Scanner<'src, M>,
}

impl<'src, M> Tokens<'src, M> {
    /// The scanner, for its errors or line-directive file name.
    pub fn scanner(&self) -> &Scanner<'src, M> {
        &self.scanner
    }

    pub fn into_scanner(self) -> Scanner<'src, M> {
        self.scanner
    }
}

impl<'src, M: TokenMap> Iterator for Tokens<'src, M> {
    type Item = (Token<'src>, Position);

    fn next(&mut self) -> Option<Self::Item> {
        let (tok, pos) = self.scanner.scan();
        // Every other token consumes at least one character.
        if tok.is_empty() {
            None
        } else {
            Some((tok, pos))
        }
    }
}

impl<'src, M: TokenMap> IntoIterator for Scanner<'src, M> {
    type Item = (Token<'src>, Position);
    type IntoIter = Tokens<'src, M>;

    fn into_iter(self) -> Tokens<'src, M> {
        Tokens { scanner: self }
    }
}

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Letters start identifiers. `ε` is a token of its own.
#[inline]
fn is_letter(ch: char) -> bool {
    ch == '_' || (ch.is_alphabetic() && ch != 'ε')
}

/// Everything [`tokenize`] found in a buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanned<'src> {
    /// Tokens in source order, without the end-of-file token.
    pub tokens: Vec<(Token<'src>, Position)>,
    pub errors: Vec<ScanError>,
    pub error_count: u32,
}

impl Scanned<'_> {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Scan all of `src` with the default mode.
///
/// For streaming access or comment tokens, construct a [`Scanner`] directly.
pub fn tokenize<M: TokenMap>(src: &SourceBuffer, map: M) -> Scanned<'_> {
    let mut iter = Scanner::new(src, map).into_iter();
    let tokens: Vec<_> = iter.by_ref().collect();
    let scanner = iter.into_scanner();
    let error_count = scanner.error_count();
    Scanned {
        tokens,
        errors: scanner.into_errors(),
        error_count,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
