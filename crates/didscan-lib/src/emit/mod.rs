//! Descriptor emission and persistence.
//!
//! Entry points:
//! - [`Emitter::emit`]: render signatures into descriptor text
//! - [`write_descriptor`]: replace the artifact at a path with that text

mod config;
mod emitter;


use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use config::{DEFAULT_PLACEHOLDER, EmitConfig};
pub use emitter::Emitter;

use crate::{Error, Result};

/// Write `descriptor` to `path`, truncating any previous content.
///
/// The parent directory must already exist. The file handle is closed on every
/// return path, including a failed write or flush.
pub fn write_descriptor(path: &Path, descriptor: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(descriptor.as_bytes())?;
        out.flush()
    };

    write().map_err(|source| Error::WriteDescriptor {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = descriptor.len(), "wrote descriptor");
    Ok(())
}
