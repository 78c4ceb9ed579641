//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can read one byte past the last character without a bounds
//! check. The total buffer size is rounded up to the next 64-byte boundary
//! for cache-line alignment.
//!
//! DOT input is not guaranteed to be UTF-8, so the buffer is built from raw
//! bytes. Encoding problems are left for the cursor to report one character
//! at a time.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// UTF-8 encoding of U+FEFF.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Length of a leading UTF-8 byte-order mark (0 or 3).
    bom_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// Sources larger than `u32::MAX` bytes are accepted but only the first
    /// `u32::MAX` bytes are visible to the cursor.
    pub fn new(source: &[u8]) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let content = &source[..source_len as usize];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (content.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        let bom_len = if content.starts_with(&UTF8_BOM) { 3 } else { 0 };

        Self {
            buf,
            source_len,
            bom_len,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Byte length of a leading UTF-8 byte-order mark, or 0 if there is none.
    pub fn bom_len(&self) -> u32 {
        self.bom_len
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}

/// `SourceBuffer` should stay within one cache line on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);
