//! Comments and line directives.
//!
//! DOT accepts `#` and `//` line comments and `/* */` block comments. A
//! `//line file:N` comment in column 1 renumbers the following line.

use tracing::trace;

use crate::{Mode, Position, ScanErrorKind, TokenKind, TokenMap};

use super::Scanner;

const LINE_DIRECTIVE: &[u8] = b"//line ";

impl<M: TokenMap> Scanner<'_, M> {
    /// Scan a comment whose introducer (`#` or the first `/`) is consumed.
    ///
    /// Returns the `"comment"` kind under [`Mode::SCAN_COMMENTS`] and `None`
    /// otherwise.
    pub(super) fn comment(&mut self, start: Position, introducer: char) -> Option<TokenKind> {
        if introducer == '/' && self.ch == Some('*') {
            self.advance();
            self.block_comment(start);
        } else {
            if introducer == '/' {
                self.advance();
            }
            self.line_comment();
            if introducer == '/' && start.column == 1 {
                self.line_directive(start);
            }
        }

        if self.mode.contains(Mode::SCAN_COMMENTS) {
            Some(self.kind("comment"))
        } else {
            None
        }
    }

    /// Skip to the end of the line, leaving the newline as lookahead.
    fn line_comment(&mut self) {
        let end = self.cursor.line_end_from(self.pos.offset);
        let run = self.cursor.slice(self.pos.offset, end);
        if run.is_ascii() && memchr::memchr(0, run).is_none() {
            self.skip_ascii_run(end);
            return;
        }
        while self.ch.is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skip past the closing `*/`; `/*` is consumed.
    fn block_comment(&mut self, start: Position) {
        loop {
            match self.ch {
                None => {
                    self.error(start, ScanErrorKind::UnterminatedComment);
                    return;
                }
                Some('*') => {
                    self.advance();
                    if self.ch == Some('/') {
                        self.advance();
                        return;
                    }
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Apply a `//line file:N` directive that just ended at the lookahead.
    ///
    /// Malformed directives are ordinary comments.
    fn line_directive(&mut self, start: Position) {
        let text = self.cursor.slice(start.offset, self.pos.offset);
        let text = text.strip_suffix(b"\r").unwrap_or(text);
        let Some(rest) = text.strip_prefix(LINE_DIRECTIVE) else {
            return;
        };
        let Some(colon) = memchr::memrchr(b':', rest) else {
            return;
        };
        let Some(line) = std::str::from_utf8(&rest[colon + 1..])
            .ok()
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|&n| n > 0)
        else {
            return;
        };

        let filename = String::from_utf8_lossy(&rest[..colon]).into_owned();
        trace!(file = %filename, line, "line directive");
        self.filename = Some(filename);
        // The pending newline moves the scanner onto line `line`.
        self.pos.line = line - 1;
    }
}
