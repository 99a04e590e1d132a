//! Data file loading.
//!
//! Reads the JSON format mapping and checks the invariants the emitters rely
//! on. Any failure is terminal: the caller is a build step that should halt
//! on bad input rather than emit a partial table.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::FormatMap;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("source format '{0}' has no target formats")]
    EmptyTargets(String),
}

/// Parse a format mapping from JSON text and validate it.
pub fn from_json_str(s: &str, path: &Path) -> Result<FormatMap, LoadError> {
    let map: FormatMap = serde_json::from_str(s).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&map)?;
    Ok(map)
}

pub fn load_from_file(path: &Path) -> Result<FormatMap, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let map = from_json_str(&content, path)?;
    tracing::debug!(
        "loaded {} source format(s) from {}",
        map.by_format.len(),
        path.display()
    );
    Ok(map)
}

fn validate(map: &FormatMap) -> Result<(), LoadError> {
    for (internal_format, targets) in &map.by_format {
        if targets.by_target.is_empty() {
            return Err(LoadError::EmptyTargets(internal_format.clone()));
        }
    }
    Ok(())
}
