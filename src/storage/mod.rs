//! File storage collaborator for the `/files/*` routes.
//!
//! # Responsibilities
//! - Resolve file names against the configured base directory
//! - Whole-file reads and writes
//! - Explicit error signaling for every failure mode
//!
//! # Design Decisions
//! - A missing or nonexistent base directory is a per-request failure,
//!   not a startup error: other routes keep working
//! - Names that are absolute or contain `..` components are rejected
//!   before any path join
//! - No locking: concurrent writes to the same name can race (accepted
//!   limitation)

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors produced by file storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No base directory was configured.
    #[error("no storage directory configured")]
    NotConfigured,

    /// The configured base directory does not exist.
    #[error("storage directory {} does not exist", .0.display())]
    MissingBaseDir(PathBuf),

    /// The file name would escape the base directory.
    #[error("file name escapes the storage directory")]
    InvalidName,

    /// The file does not exist under the base directory.
    #[error("file not found")]
    NotFound,

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads and writes whole files under an externally configured base
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: Option<PathBuf>,
}

impl FileStore {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Read a file's full contents.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(name)?;
        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(contents),
            Err(error) if error.kind() == ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    /// Write `contents` to a file, creating or truncating it.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        tokio::fs::write(&path, contents).await?;
        Ok(())
    }

    /// Validate the name and join it onto the base directory.
    fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        let base = self.base_dir.as_ref().ok_or(StorageError::NotConfigured)?;
        if !base.is_dir() {
            return Err(StorageError::MissingBaseDir(base.clone()));
        }

        let relative = Path::new(name);
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if name.is_empty() || !contained {
            return Err(StorageError::InvalidName);
        }

        Ok(base.join(relative))
    }
}
