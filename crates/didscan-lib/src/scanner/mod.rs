//! Source scanning for exported declarations.
//!
//! # Architecture
//!
//! Source text is lexed once into span-based tokens (trivia included). The scanner
//! then walks the token stream looking for `#` and tries to match the fixed export
//! shape at each one:
//!
//! ```text
//! #[candid::candid_method(<query|update>, rename = "<name>")]
//! async fn <ident>(<params>) -> (<return>)
//! ```
//!
//! Only whitespace may separate the tokens of the shape. A candidate that fails to
//! match is recorded as a [`Miss`] with an explicit [`ScanMiss`] reason and skipped;
//! misses are never reported as diagnostics.

pub mod lexer;
pub mod token;

mod matcher;

#[cfg(test)]
mod scanner_tests;

pub use matcher::{Attempt, Miss, RawDeclaration, ScanMiss, Scanner, scan};
pub use lexer::{Token, is_balanced, lex, normalize, split_top_level, token_text};
pub use token::{TokenKind, TokenSet};
