//! Loading and listing SQL source files.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CliError, Result};

/// File extension of source files.
pub const SOURCE_EXTENSION: &str = "sql";

/// Lists the `*.sql` file names in a directory, sorted by name.
///
/// Subdirectories are not searched.
pub fn list_sql_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(CliError::SourcesDirNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            files.push(name.to_string());
        }
    }
    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "listed source files");
    Ok(files)
}

/// Resolves a file argument against the sources directory.
///
/// Absolute paths are used as given.
#[must_use]
pub fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

/// Reads a source file unchanged.
pub fn load_source(dir: &Path, file: &Path) -> Result<String> {
    let path = resolve(dir, file);
    if !path.is_file() {
        return Err(CliError::SourceNotFound(path));
    }
    let source = fs::read_to_string(&path)?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(source)
}

/// Reads the whole of a reader as source text.
pub fn read_source(mut reader: impl Read) -> Result<String> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}
