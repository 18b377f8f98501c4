//! Type translator: source type tokens to IDL types.
//!
//! Translation is pure and total. A token is normalized, looked up in a fixed
//! table, then tried as `(T)`, `Vec<T>` and `Option<T>` in that order. Anything
//! else becomes [`TypeExpr::Opaque`], which never fails the pipeline.


use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use didscan_core::{Primitive, TypeExpr};

use crate::scanner::{is_balanced, normalize, split_top_level};

/// Source tokens with a direct IDL counterpart.
pub const PRIMITIVES: &[(&str, Primitive)] = &[
    ("String", Primitive::Text),
    ("bool", Primitive::Bool),
    ("u8", Primitive::Nat8),
    ("u16", Primitive::Nat16),
    ("u32", Primitive::Nat32),
    ("u64", Primitive::Nat64),
    ("u128", Primitive::Nat),
    ("i8", Primitive::Int8),
    ("i16", Primitive::Int16),
    ("i32", Primitive::Int32),
    ("i64", Primitive::Int64),
    ("i128", Primitive::Int),
    ("f32", Primitive::Float32),
    ("f64", Primitive::Float64),
    ("candid::Nat", Primitive::Nat),
    ("candid::Int", Primitive::Int),
    ("candid::Principal", Primitive::Principal),
    ("candid::Empty", Primitive::Empty),
    ("candid::Reserved", Primitive::Reserved),
];

const UNIT: &str = "()";
const VECTOR: &str = "Vec";
const OPTIONAL: &str = "Option";

static TABLE: LazyLock<HashMap<&'static str, TypeExpr>> = LazyLock::new(|| {
    PRIMITIVES
        .iter()
        .map(|&(token, primitive)| (token, TypeExpr::Primitive(primitive)))
        .chain([(UNIT, TypeExpr::Unit)])
        .collect()
});

/// Translate one source type token.
///
/// Whitespace and comments inside the token are incidental: `Vec< u8 >` and
/// `Vec<u8>` translate identically. An empty token is the unit type.
pub fn translate(token: &str) -> TypeExpr {
    translate_normalized(&normalize(token))
}

fn translate_normalized(token: &str) -> TypeExpr {
    if token.is_empty() {
        return TypeExpr::Unit;
    }

    if let Some(found) = TABLE.get(token) {
        return found.clone();
    }

    if let Some(inner) = parenthesized(token) {
        return translate_normalized(inner);
    }

    if let Some(element) = generic_argument(token, VECTOR) {
        return match translate_normalized(element) {
            TypeExpr::Primitive(Primitive::Nat8) => TypeExpr::ByteVector,
            element => TypeExpr::vector(element),
        };
    }

    if let Some(inner) = generic_argument(token, OPTIONAL) {
        return TypeExpr::optional(translate_normalized(inner));
    }

    TypeExpr::Opaque(token.to_string())
}

/// Inner type of `(T)` or `(T,)`. Multi-element tuples are not unwrapped.
fn parenthesized(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    single_type(inner)
}

/// The single argument of `head<T>`.
fn generic_argument<'t>(token: &'t str, head: &str) -> Option<&'t str> {
    let args = token.strip_prefix(head)?.strip_prefix('<')?.strip_suffix('>')?;
    single_type(args)
}

/// `text` if it holds exactly one balanced type, ignoring one trailing comma.
///
/// Rejects `u8>,Vec<u8` style text where the outer brackets do not pair up.
fn single_type(text: &str) -> Option<&str> {
    if !is_balanced(text) {
        return None;
    }
    match split_top_level(text).as_slice() {
        [only] => Some(slice(text, *only)),
        [first, trailing] if trailing.is_empty() => Some(slice(text, *first)),
        _ => None,
    }
    .filter(|inner| !inner.is_empty())
}

fn slice(text: &str, range: rowan::TextRange) -> &str {
    &text[Range::<usize>::from(range)]
}
