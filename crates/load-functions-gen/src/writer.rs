//! Atomic output file writes.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create temporary file in {}", dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to replace {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `contents` to a temporary file next to `path`, then rename it over `path`.
///
/// Readers see either the previous file or the complete new one. On error
/// the temporary file is removed and `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(|source| WriteError::Create {
        dir: dir.clone(),
        source,
    })?;
    let write_err = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| WriteError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
