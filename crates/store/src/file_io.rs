//! Local file I/O operations
//!
//! Saving a document locally hands a named blob to the host as a download;
//! loading reads a user-picked file as text.

use crate::{Result, StoreError};
use std::path::{Path, PathBuf};

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// File name as shown to the user
    pub name: String,
    /// Where the file's content can be read
    pub path: PathBuf,
}

impl FileHandle {
    /// Create a handle named after the last component of `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }

    /// Create a handle with an explicit display name
    pub fn named(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Host file operations used by local save, load and export
#[trait_variant::make(Send)]
pub trait LocalFiles: Send + Sync {
    /// Deliver `bytes` to the user as a download named `file_name`
    async fn download(&self, file_name: &str, bytes: Vec<u8>, mime: &str) -> Result<PathBuf>;

    /// Read the full text of a picked file
    async fn read_text(&self, file: &FileHandle) -> Result<String>;
}

/// Downloads land in a directory on disk
#[derive(Debug, Clone)]
pub struct DownloadDirectory {
    dir: PathBuf,
}

impl DownloadDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LocalFiles for DownloadDirectory {
    async fn download(&self, file_name: &str, bytes: Vec<u8>, mime: &str) -> Result<PathBuf> {
        let has_separator = file_name.contains(|c: char| c == '/' || c == '\\');
        if file_name.is_empty() || has_separator || file_name == ".." {
            return Err(StoreError::InvalidFileName(file_name.to_string()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let target = self.dir.join(file_name);
        tokio::fs::write(&target, bytes).await?;

        tracing::debug!(path = %target.display(), mime, "download written");
        Ok(target)
    }

    async fn read_text(&self, file: &FileHandle) -> Result<String> {
        if !tokio::fs::try_exists(&file.path).await.unwrap_or(false) {
            return Err(StoreError::FileNotFound(file.path.display().to_string()));
        }

        let text = tokio::fs::read_to_string(&file.path).await?;
        Ok(text)
    }
}
