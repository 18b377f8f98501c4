//! Pipeline facade: annotated source in, service descriptor out.
//!
//! [`recover`] is the pure part (scan, parse, translate). [`generate`] adds the
//! file handling around it: a missing source is a skipped run, not a failure,
//! while an unwritable destination is fatal.


use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use didscan_core::{Colors, ProcedureSignature};
use indexmap::IndexMap;
use indexmap::map::Entry;
use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::{EmitConfig, Emitter, write_descriptor};
use crate::scanner::scan;
use crate::signature::{SplitMode, parse_signature};
use crate::{Error, Result};

/// Translated signatures in source order plus everything worth warning about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recovery {
    pub signatures: Vec<ProcedureSignature>,
    pub diagnostics: Diagnostics,
}

/// Recover every exported signature from `source`.
///
/// Repeated exported names are kept; each repeat is reported against the first
/// declaration that used the name.
pub fn recover(source: &str, split_mode: SplitMode) -> Recovery {
    let mut diagnostics = Diagnostics::new();
    let mut signatures = Vec::new();
    let mut first_use: IndexMap<&str, TextRange> = IndexMap::new();

    for decl in scan(source) {
        match first_use.entry(decl.exported_name) {
            Entry::Vacant(entry) => {
                entry.insert(decl.name_span);
            }
            Entry::Occupied(entry) => {
                diagnostics
                    .report(DiagnosticKind::DuplicateExportedName, decl.name_span)
                    .message(decl.exported_name)
                    .related_to("first exported here", *entry.get())
                    .emit();
            }
        }
        signatures.push(parse_signature(&decl, split_mode, &mut diagnostics));
    }

    tracing::debug!(
        signatures = signatures.len(),
        diagnostics = diagnostics.len(),
        "recovered service"
    );

    Recovery {
        signatures,
        diagnostics,
    }
}

/// Options for [`generate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub(crate) verbose: bool,
    pub(crate) split_mode: SplitMode,
    pub(crate) deny_warnings: bool,
    pub(crate) emit: EmitConfig,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo the descriptor to the echo stream before writing it.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    pub fn split_mode(mut self, value: SplitMode) -> Self {
        self.split_mode = value;
        self
    }

    /// Report every warning as an error.
    pub fn deny_warnings(mut self, value: bool) -> Self {
        self.deny_warnings = value;
        self
    }

    /// Placeholder and echo colors. The written artifact is never colored.
    pub fn emit(mut self, config: EmitConfig) -> Self {
        self.emit = config;
        self
    }
}

/// What a [`generate`] run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The source file does not exist. Nothing was written.
    MissingSource { path: PathBuf },
    /// The descriptor was written.
    Written(Report),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Source text the descriptor was recovered from, for rendering diagnostics.
    pub source: String,
    /// Exactly the bytes written to the destination.
    pub descriptor: String,
    pub signatures: Vec<ProcedureSignature>,
    pub diagnostics: Diagnostics,
}

/// Recover the descriptor for `source_path` and write it to `descriptor_path`.
///
/// Verbose echo goes to stdout.
pub fn generate(
    source_path: &Path,
    descriptor_path: &Path,
    options: &GenerateOptions,
) -> Result<Outcome> {
    generate_with_echo(
        source_path,
        descriptor_path,
        options,
        &mut std::io::stdout().lock(),
    )
}

/// [`generate`] with an explicit echo stream.
///
/// A failing echo stream is logged and otherwise ignored.
pub fn generate_with_echo(
    source_path: &Path,
    descriptor_path: &Path,
    options: &GenerateOptions,
    echo: &mut impl Write,
) -> Result<Outcome> {
    let Some(source) = load_source(source_path)? else {
        tracing::warn!(
            path = %source_path.display(),
            "source not found, skipping descriptor generation"
        );
        return Ok(Outcome::MissingSource {
            path: source_path.to_path_buf(),
        });
    };

    let Recovery {
        signatures,
        mut diagnostics,
    } = recover(&source, options.split_mode);
    if options.deny_warnings {
        diagnostics.deny_warnings();
    }

    let plain = EmitConfig {
        colors: Colors::OFF,
        ..options.emit.clone()
    };
    let descriptor = Emitter::new(&plain).emit(&signatures);

    if options.verbose {
        let shown = if options.emit.colors.is_enabled() {
            Emitter::new(&options.emit).emit(&signatures)
        } else {
            descriptor.clone()
        };
        if let Err(err) = writeln!(echo, "{shown}") {
            tracing::debug!(error = %err, "descriptor echo failed");
        }
    }

    write_descriptor(descriptor_path, &descriptor)?;

    Ok(Outcome::Written(Report {
        source,
        descriptor,
        signatures,
        diagnostics,
    }))
}

/// Read the source text. `Ok(None)` means the file does not exist.
pub fn load_source(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::ReadSource {
            path: path.to_path_buf(),
            source,
        }),
    }
}
