//! Reading sources and writing rendered output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Read a source document.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `html` to `dir/name`, adding an `.html` extension when missing and
/// creating `dir` as needed. Returns the written path.
pub fn write_output(dir: &Path, name: &str, html: &str) -> Result<PathBuf> {
    if name.is_empty() || name.starts_with(char::is_whitespace) {
        return Err(Error::InvalidOutputName {
            name: name.to_string(),
        });
    }

    let file_name = if name.ends_with(".html") {
        name.to_string()
    } else {
        format!("{}.html", name)
    };

    fs::create_dir_all(dir).map_err(|source| Error::WriteFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    fs::write(&path, html).map_err(|source| Error::WriteFailure {
        path: path.clone(),
        source,
    })?;

    log::debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}
