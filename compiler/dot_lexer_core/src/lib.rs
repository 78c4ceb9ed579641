//! Low-level byte layer for the DOT scanner.
//!
//! This crate owns the two pieces of state the scanner reads through:
//!
//! - [`SourceBuffer`]: a copy of the input bytes followed by a `0x00`
//!   sentinel and zero padding up to a 64-byte boundary.
//! - [`Cursor`]: a `Copy` byte cursor over that buffer which decodes one
//!   UTF-8 character at a time and reports interior NUL bytes and invalid
//!   encodings as [`Decoded`] variants instead of failing.
//!
//! Nothing here knows about tokens. Keyword resolution, literal rules and
//! error accounting live in `dot_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, Decoded};
pub use source_buffer::SourceBuffer;
