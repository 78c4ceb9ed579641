//! Lexical scanner for the DOT graph language.
//!
//! # Architecture
//!
//! - `dot_lexer_core` owns the bytes: a sentinel-terminated [`SourceBuffer`]
//!   and a UTF-8 decoding cursor.
//! - [`Scanner`] turns the buffer into `(Token, Position)` pairs, one per
//!   call, recording errors instead of failing.
//! - A [`TokenMap`] supplies every token kind. [`TokenTable::dot`] is the
//!   table for the DOT grammar.
//!
//! ```
//! use dot_lexer::{Scanner, SourceBuffer, TokenMap, TokenTable};
//!
//! let table = TokenTable::dot();
//! let src = SourceBuffer::from("digraph { a -> b }");
//! let mut scanner = Scanner::new(&src, &table);
//! let (tok, pos) = scanner.scan();
//! assert_eq!(tok.kind, table.kind_of("digraph"));
//! assert_eq!(pos.to_string(), "1:1");
//! ```

mod mode;
mod position;
mod scan_error;
mod scanner;
mod token;
mod token_map;

pub use dot_lexer_core::SourceBuffer;
pub use mode::Mode;
pub use position::Position;
pub use scan_error::{ScanError, ScanErrorKind};
pub use scanner::{tokenize, Scanned, Scanner, Tokens};
pub use token::{Token, TokenKind};
pub use token_map::{TokenMap, TokenTable};
