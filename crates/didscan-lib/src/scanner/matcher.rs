//! Declaration matcher and the lazy scanner built on it.

use didscan_core::Mode;
use rowan::{TextRange, TextSize};

use super::lexer::{Token, lex, string_content, token_text};
use super::token::TokenKind;

/// Path of the export annotation, split at `::`.
const ANNOTATION_PATH: [&str; 2] = ["candid", "candid_method"];

/// Keyword that introduces the exported name inside the annotation.
const RENAME_KEY: &str = "rename";

/// One export annotation plus the signature adjacent to it, as raw source slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDeclaration<'src> {
    pub mode: Mode,
    pub exported_name: &'src str,
    /// Span of the exported name literal, quotes included.
    pub name_span: TextRange,
    pub fn_name: &'src str,
    /// Text between the parameter list parentheses.
    pub params: &'src str,
    pub params_span: TextRange,
    /// Text between the return tuple parentheses.
    pub return_text: &'src str,
    pub return_span: TextRange,
    /// From `#` to the closing `)` of the return tuple.
    pub span: TextRange,
}

/// Why a `#` in the source did not start an exported declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanMiss {
    #[error("`#` does not open an attribute")]
    NotAnAttribute,

    #[error("attribute is not `candid::candid_method`")]
    NotExportAnnotation,

    #[error("mode must be `query` or `update`, found `{0}`")]
    UnknownMode(String),

    #[error("expected `rename = \"...\"` after the mode")]
    MissingRename,

    #[error("expected a non-empty exported name")]
    MissingExportedName,

    #[error("annotation is not closed with `)]`")]
    UnclosedAnnotation,

    #[error("annotation is not followed by `async fn <name>(`")]
    NotAsyncFn,

    #[error("parameter list is not closed")]
    UnclosedParameters,

    #[error("expected `-> (...)` return tuple")]
    MissingReturnTuple,

    #[error("return tuple is not closed")]
    UnclosedReturnTuple,
}

/// A rejected candidate with the offset of its `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    pub offset: TextSize,
    pub reason: ScanMiss,
}

pub type Attempt<'src> = Result<RawDeclaration<'src>, Miss>;

/// Lazy scanner over every exported declaration in source order.
///
/// Tokens are produced once up front; iteration only moves a cursor, so
/// [`Scanner::reset`] restarts the same sequence without re-lexing.
pub struct Scanner<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Advance to the next `#` and try to match a declaration there.
    ///
    /// Returns `None` once the token stream is exhausted.
    pub fn next_attempt(&mut self) -> Option<Attempt<'src>> {
        let start = self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .position(|t| t.kind == TokenKind::Pound)
            .map(|offset| self.pos + offset);

        let Some(start) = start else {
            self.pos = self.tokens.len();
            return None;
        };

        let mut cursor = Cursor {
            source: self.source,
            tokens: &self.tokens,
            pos: start,
        };
        match cursor.declaration() {
            Ok(decl) => {
                self.pos = cursor.pos;
                Some(Ok(decl))
            }
            Err(reason) => {
                self.pos = start + 1;
                Some(Err(Miss {
                    offset: self.tokens[start].span.start(),
                    reason,
                }))
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = RawDeclaration<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_attempt()? {
                Ok(decl) => {
                    tracing::debug!(
                        name = decl.exported_name,
                        mode = %decl.mode,
                        function = decl.fn_name,
                        "matched exported declaration"
                    );
                    return Some(decl);
                }
                Err(miss) => {
                    tracing::trace!(
                        offset = u32::from(miss.offset),
                        reason = %miss.reason,
                        "skipped attribute"
                    );
                }
            }
        }
    }
}

/// Scan `source` for exported declarations.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

struct Cursor<'s, 't> {
    source: &'s str,
    tokens: &'t [Token],
    pos: usize,
}

impl<'s> Cursor<'s, '_> {
    /// Next non-whitespace token. Comments are returned, which breaks adjacency.
    fn peek(&mut self) -> Option<Token> {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind.is_whitespace())
        {
            self.pos += 1;
        }
        self.tokens.get(self.pos).copied()
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.peek()?;
        if token.kind != kind {
            return None;
        }
        self.pos += 1;
        Some(token)
    }

    fn eat_ident(&mut self) -> Option<&'s str> {
        self.eat(TokenKind::Ident)
            .map(|t| token_text(self.source, &t))
    }

    fn eat_keyword(&mut self, keyword: &str) -> Option<Token> {
        let token = self.peek()?;
        if token.kind != TokenKind::Ident || token_text(self.source, &token) != keyword {
            return None;
        }
        self.pos += 1;
        Some(token)
    }

    /// Consume up to the `)` matching an already consumed `(` ending at `open_end`.
    ///
    /// Returns the inner text range and the closing token.
    fn until_matching_paren(&mut self, open_end: TextSize) -> Option<(TextRange, Token)> {
        let mut depth = 0u32;
        while let Some(&token) = self.tokens.get(self.pos) {
            self.pos += 1;
            match token.kind {
                TokenKind::ParenOpen => depth += 1,
                TokenKind::ParenClose if depth == 0 => {
                    return Some((TextRange::new(open_end, token.span.start()), token));
                }
                TokenKind::ParenClose => depth -= 1,
                _ => {}
            }
        }
        None
    }

    fn slice(&self, range: TextRange) -> &'s str {
        &self.source[std::ops::Range::<usize>::from(range)]
    }

    fn declaration(&mut self) -> Result<RawDeclaration<'s>, ScanMiss> {
        let pound = self.eat(TokenKind::Pound).ok_or(ScanMiss::NotAnAttribute)?;
        self.eat(TokenKind::BracketOpen)
            .ok_or(ScanMiss::NotAnAttribute)?;

        self.annotation_path()?;

        self.eat(TokenKind::ParenOpen)
            .ok_or(ScanMiss::NotExportAnnotation)?;
        let mode_text = self
            .eat_ident()
            .ok_or_else(|| ScanMiss::UnknownMode(String::new()))?;
        let mode =
            Mode::from_keyword(mode_text).ok_or_else(|| ScanMiss::UnknownMode(mode_text.into()))?;

        self.eat(TokenKind::Comma).ok_or(ScanMiss::MissingRename)?;
        self.eat_keyword(RENAME_KEY)
            .ok_or(ScanMiss::MissingRename)?;
        self.eat(TokenKind::Equals).ok_or(ScanMiss::MissingRename)?;

        let name_token = self
            .eat(TokenKind::StringLiteral)
            .ok_or(ScanMiss::MissingExportedName)?;
        let exported_name = string_content(self.source, &name_token);
        if exported_name.is_empty() {
            return Err(ScanMiss::MissingExportedName);
        }

        self.eat(TokenKind::ParenClose)
            .ok_or(ScanMiss::UnclosedAnnotation)?;
        self.eat(TokenKind::BracketClose)
            .ok_or(ScanMiss::UnclosedAnnotation)?;

        self.eat(TokenKind::KwAsync).ok_or(ScanMiss::NotAsyncFn)?;
        self.eat(TokenKind::KwFn).ok_or(ScanMiss::NotAsyncFn)?;
        let fn_name = self.eat_ident().ok_or(ScanMiss::NotAsyncFn)?;
        let params_open = self
            .eat(TokenKind::ParenOpen)
            .ok_or(ScanMiss::NotAsyncFn)?;
        let (params_span, _) = self
            .until_matching_paren(params_open.span.end())
            .ok_or(ScanMiss::UnclosedParameters)?;

        self.eat(TokenKind::Arrow)
            .ok_or(ScanMiss::MissingReturnTuple)?;
        let return_open = self
            .eat(TokenKind::ParenOpen)
            .ok_or(ScanMiss::MissingReturnTuple)?;
        let (return_span, return_close) = self
            .until_matching_paren(return_open.span.end())
            .ok_or(ScanMiss::UnclosedReturnTuple)?;

        Ok(RawDeclaration {
            mode,
            exported_name,
            name_span: name_token.span,
            fn_name,
            params: self.slice(params_span),
            params_span,
            return_text: self.slice(return_span),
            return_span,
            span: TextRange::new(pound.span.start(), return_close.span.end()),
        })
    }

    fn annotation_path(&mut self) -> Result<(), ScanMiss> {
        for (i, segment) in ANNOTATION_PATH.iter().enumerate() {
            if i > 0 {
                self.eat(TokenKind::PathSep)
                    .ok_or(ScanMiss::NotExportAnnotation)?;
            }
            self.eat_keyword(segment)
                .ok_or(ScanMiss::NotExportAnnotation)?;
        }
        Ok(())
    }
}
