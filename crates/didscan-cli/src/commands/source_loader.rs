use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Source text plus the name used when rendering diagnostics.
pub struct LoadedSource {
    pub name: String,
    pub text: String,
}

/// Load a source file, or stdin when `path` is `-`.
pub fn load_source(path: &Path) -> Result<LoadedSource, String> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }

    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
    Ok(LoadedSource {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

fn load_stdin() -> Result<LoadedSource, String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(LoadedSource {
        name: "<stdin>".to_string(),
        text,
    })
}
