//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor reads the source one UTF-8 character at a time. EOF is
//! detected when the current byte is the sentinel (`0x00`) and the position
//! has reached the source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null and is reported as
//! [`Decoded::InteriorNull`]; a null at `pos >= source_len` is the sentinel.

/// Result of decoding one character at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed character.
    Char(char),
    /// A `0x00` byte inside the source content. One byte was consumed.
    InteriorNull,
    /// A byte that does not start a well-formed UTF-8 sequence. One byte was
    /// consumed.
    InvalidUtf8,
    /// The cursor is at the sentinel. Nothing was consumed.
    Eof,
}

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so snapshots are free.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance the cursor by `n` bytes, stopping at the sentinel.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`.
    ///
    /// Both bounds are clamped to the source content, so the sentinel and
    /// padding are never part of the result.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the character at the cursor and advance past it.
    ///
    /// Always advances by at least one byte unless at EOF. Malformed
    /// sequences consume exactly one byte so the next call resynchronizes on
    /// the following byte.
    pub fn bump_char(&mut self) -> Decoded {
        if self.is_eof() {
            return Decoded::Eof;
        }
        let lead = self.current();
        match lead {
            0 => {
                self.pos += 1;
                Decoded::InteriorNull
            }
            0x01..=0x7F => {
                self.pos += 1;
                Decoded::Char(char::from(lead))
            }
            _ => {
                let width = Self::utf8_char_width(lead);
                let end = self.pos.saturating_add(width).min(self.source_len);
                let decoded = std::str::from_utf8(self.slice(self.pos, end))
                    .ok()
                    .and_then(|s| s.chars().next());
                match decoded {
                    Some(ch) if end - self.pos == width => {
                        self.pos = end;
                        Decoded::Char(ch)
                    }
                    _ => {
                        self.pos += 1;
                        Decoded::InvalidUtf8
                    }
                }
            }
        }
    }

    /// Offset of the next `\n` at or after `from`, or the source length if
    /// there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn line_end_from(&self, from: u32) -> u32 {
        let from = from.min(self.source_len);
        let remaining = &self.buf[from as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => from + offset as u32,
            None => self.source_len,
        }
    }
}
