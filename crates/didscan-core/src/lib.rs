#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for didscan.
//!
//! - [`idl`]: the interface descriptor model (`ProcedureSignature`, `TypeExpr`)
//! - [`colors`]: ANSI palette shared by the emitter echo and the CLI

pub mod colors;
pub mod idl;

#[cfg(test)]
mod idl_tests;

pub use colors::Colors;
pub use idl::{Mode, Primitive, ProcedureSignature, TypeExpr};
