//! didscan: recover a service interface descriptor from annotated source.
//!
//! The pipeline runs leaf-first: [`scanner`] finds exported declarations,
//! [`signature`] splits their parameter and return text, [`translate`] maps each
//! source type to an IDL type, and [`emit`] renders the descriptor.
//!
//! # Example
//!
//! ```
//! use didscan_lib::{EmitConfig, Emitter, SplitMode, recover};
//!
//! let source = r#"
//!     #[candid::candid_method(query, rename = "get_version")]
//!     async fn get_version() -> (String) { todo!() }
//! "#;
//!
//! let recovery = recover(source, SplitMode::default());
//! let descriptor = Emitter::new(&EmitConfig::default()).emit(&recovery.signatures);
//! assert_eq!(descriptor, "service : {\n  \"get_version\" : () -> (text) query;\n}\n");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod diagnostics;
pub mod emit;
pub mod generate;
pub mod scanner;
pub mod signature;
pub mod translate;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{EmitConfig, Emitter, write_descriptor};
pub use generate::{
    GenerateOptions, Outcome, Recovery, Report, generate, generate_with_echo, load_source,
    recover,
};
pub use signature::SplitMode;
pub use translate::translate;

/// Errors that stop a generation run.
///
/// Questionable input never lands here; it is reported through [`Diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source exists but could not be read as UTF-8 text.
    #[error("failed to read source {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The descriptor could not be written.
    #[error("failed to write descriptor {}: {source}", path.display())]
    WriteDescriptor {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
