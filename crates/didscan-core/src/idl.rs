//! Interface descriptor data model.
//!
//! Values here are produced once per pipeline run and discarded after emission.
//! Nothing is interned or shared; every type is plain owned data.

use serde::Serialize;

/// Calling convention of an exported procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Read-only call.
    Query,
    /// State-mutating call.
    Update,
}

impl Mode {
    /// Parse the mode literal used inside the export annotation.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "update" => Some(Self::Update),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Update => "update",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf IDL types reachable from the fixed translation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Text,
    Bool,
    Nat8,
    Nat16,
    Nat32,
    Nat64,
    /// Arbitrary-precision natural.
    Nat,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Arbitrary-precision integer.
    Int,
    Float32,
    Float64,
    Principal,
    /// Type with no values.
    Empty,
    /// Type reserved for future extension; any value decodes to it.
    Reserved,
}

impl Primitive {
    /// Keyword used for this type in the descriptor text.
    pub fn idl_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Nat8 => "nat8",
            Self::Nat16 => "nat16",
            Self::Nat32 => "nat32",
            Self::Nat64 => "nat64",
            Self::Nat => "nat",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int => "int",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Principal => "principal",
            Self::Empty => "empty",
            Self::Reserved => "reserved",
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.idl_name())
    }
}

/// Translated type of a parameter or return value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeExpr {
    Primitive(Primitive),
    /// `vec T`
    Vector(Box<TypeExpr>),
    /// `opt T`
    Optional(Box<TypeExpr>),
    /// `blob`: a vector whose element is exactly `nat8`.
    ByteVector,
    /// The empty tuple. Renders as nothing at the top level and as the opaque
    /// placeholder inside a container.
    Unit,
    /// Source token outside the translation grammar, kept for diagnostics.
    /// Always rendered as the opaque placeholder.
    Opaque(String),
}

impl TypeExpr {
    pub fn vector(element: TypeExpr) -> Self {
        Self::Vector(Box::new(element))
    }

    pub fn optional(inner: TypeExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Source tokens of every leaf rendered as the opaque placeholder, outermost
    /// first. A unit nested in a container counts as `()`.
    pub fn opaque_tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_opaque(false, &mut out);
        out
    }

    fn collect_opaque<'a>(&'a self, nested: bool, out: &mut Vec<&'a str>) {
        match self {
            Self::Opaque(token) => out.push(token),
            Self::Unit if nested => out.push("()"),
            Self::Vector(inner) | Self::Optional(inner) => inner.collect_opaque(true, out),
            Self::Primitive(_) | Self::ByteVector | Self::Unit => {}
        }
    }
}

/// One exported procedure recovered from source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcedureSignature {
    pub mode: Mode,
    pub exported_name: String,
    pub parameters: Vec<TypeExpr>,
    pub return_type: TypeExpr,
}
