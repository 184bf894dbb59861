//! JSON file backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::traits::GraphSource;
use crate::types::GraphConfig;

/// Reads a graph configuration from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<GraphConfig, StorageError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::ConfigNotFound {
                path: self.path.clone(),
            },
            _ => StorageError::Io(e),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
