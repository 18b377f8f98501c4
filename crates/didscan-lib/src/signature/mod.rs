//! Signature parser: raw parameter and return text to translated types.


use std::ops::Range;

use didscan_core::{ProcedureSignature, TypeExpr};
use rowan::{TextRange, TextSize};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::scanner::{RawDeclaration, TokenKind, lex, split_top_level};
use crate::translate::translate;

/// How the parameter list is split into parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitMode {
    /// Split only at commas outside `()`, `[]` and `<>`.
    #[default]
    Nested,
    /// Split at every comma. `HashMap<K, V>` is torn into two segments, matching
    /// descriptors produced by older builds.
    Legacy,
}

/// Ranges of each parameter's type text, relative to `params`.
///
/// Every segment is split once at its first `:` and the name side is dropped.
/// Segments without a `:` (such as `self`) are skipped.
pub fn split_parameters(params: &str, mode: SplitMode) -> Vec<TextRange> {
    let segments = match mode {
        SplitMode::Nested => split_top_level(params),
        SplitMode::Legacy => split_every_comma(params),
    };

    segments
        .into_iter()
        .filter_map(|segment| {
            let text = slice(params, segment);
            let colon_end = match mode {
                SplitMode::Nested => first_colon_token(text)?,
                SplitMode::Legacy => text.find(':')? + 1,
            };
            let type_start = segment.start() + TextSize::from(colon_end as u32);
            Some(trim(params, TextRange::new(type_start, segment.end())))
        })
        .collect()
}

/// Translate one matched declaration.
///
/// Unrecognized leaves are reported as warnings at their type text and still
/// translate to [`TypeExpr::Opaque`].
pub fn parse_signature(
    decl: &RawDeclaration<'_>,
    mode: SplitMode,
    diagnostics: &mut Diagnostics,
) -> ProcedureSignature {
    let params_base = decl.params_span.start();
    let mut parameters = Vec::new();
    for range in split_parameters(decl.params, mode) {
        let ty = translate(slice(decl.params, range));
        report_opaque(&ty, range + params_base, diagnostics);
        if !ty.is_unit() {
            parameters.push(ty);
        }
    }

    let return_range = trim(decl.return_text, return_type_range(decl.return_text));
    let return_type = translate(slice(decl.return_text, return_range));
    report_opaque(
        &return_type,
        return_range + decl.return_span.start(),
        diagnostics,
    );

    ProcedureSignature {
        mode: decl.mode,
        exported_name: decl.exported_name.to_string(),
        parameters,
        return_type,
    }
}

/// Text of a return tuple, minus the trailing comma of the `(T,)` spelling.
fn return_type_range(text: &str) -> TextRange {
    match split_top_level(text).as_slice() {
        [first, trailing] if slice(text, *trailing).trim().is_empty() => *first,
        _ => TextRange::up_to(TextSize::from(text.len() as u32)),
    }
}

fn report_opaque(ty: &TypeExpr, range: TextRange, diagnostics: &mut Diagnostics) {
    for token in ty.opaque_tokens() {
        diagnostics
            .report(DiagnosticKind::UnrecognizedType, range)
            .message(token)
            .emit();
    }
}

/// Byte offset just past the first `:` token. `::` path separators don't count.
fn first_colon_token(text: &str) -> Option<usize> {
    lex(text)
        .into_iter()
        .find(|t| t.kind == TokenKind::Colon)
        .map(|t| usize::from(t.span.end()))
}

fn split_every_comma(text: &str) -> Vec<TextRange> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    for (i, _) in text.match_indices(',') {
        segments.push(text_range(start..i));
        start = i + 1;
    }
    segments.push(text_range(start..text.len()));
    segments
}

/// Shrink `range` to exclude surrounding whitespace.
fn trim(text: &str, range: TextRange) -> TextRange {
    let inner = slice(text, range);
    let start = usize::from(range.start()) + (inner.len() - inner.trim_start().len());
    let end = start + inner.trim().len();
    text_range(start..end)
}

fn text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

fn slice(text: &str, range: TextRange) -> &str {
    &text[Range::<usize>::from(range)]
}
