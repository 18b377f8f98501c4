//! Lexer for service source text.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. The scanner never matches on `Garbage`, so
//! stray characters only ever break a declaration shape, never the scan.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::token::{CLOSERS, OPENERS, TokenKind};

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

pub(crate) fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[Range::<usize>::from(token.span)]
}

/// Content of a `StringLiteral` token without its quotes. Escapes are kept as written.
pub fn string_content<'s>(source: &'s str, token: &Token) -> &'s str {
    let text = token_text(source, token);
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

/// Re-joins the non-trivia tokens of `text`, keeping one space between adjacent words.
///
/// `Vec< u8 >` and `candid :: Nat` normalize to `Vec<u8>` and `candid::Nat`, while
/// `dyn Trait` keeps its space.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_word = false;
    for token in lex(text) {
        if token.kind.is_trivia() {
            continue;
        }
        let word = token.kind.is_word();
        if word && prev_word {
            out.push(' ');
        }
        out.push_str(token_text(text, &token));
        prev_word = word;
    }
    out
}

/// Ranges of the comma-separated segments of `text` at bracket depth zero.
///
/// Depth counts `()`, `[]` and `<>`; commas inside comments or literals are never
/// separators. Always yields at least one (possibly empty) segment.
pub fn split_top_level(text: &str) -> Vec<TextRange> {
    let mut segments = Vec::new();
    let mut depth = 0u32;
    let mut start = 0u32;
    for token in lex(text) {
        match token.kind {
            kind if OPENERS.contains(kind) => depth += 1,
            kind if CLOSERS.contains(kind) => depth = depth.saturating_sub(1),
            TokenKind::Comma if depth == 0 => {
                segments.push(TextRange::new(start.into(), token.span.start()));
                start = token.span.end().into();
            }
            _ => {}
        }
    }
    segments.push(TextRange::new(start.into(), (text.len() as u32).into()));
    segments
}

/// Whether every opener in `text` is closed and no closer goes below depth zero.
pub fn is_balanced(text: &str) -> bool {
    let mut depth = 0u32;
    for token in lex(text) {
        if OPENERS.contains(token.kind) {
            depth += 1;
        } else if CLOSERS.contains(token.kind) {
            let Some(next) = depth.checked_sub(1) else {
                return false;
            };
            depth = next;
        }
    }
    depth == 0
}
