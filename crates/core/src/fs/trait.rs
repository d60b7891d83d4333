//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// Abstraction over the file operations the migration performs.
///
/// Reads cover descriptor discovery; writes cover generated Gradle files and
/// the `.gitignore` append in overlay mode.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Canonicalize a path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Write a file, creating missing parent directories
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Append to a file, creating it when absent
    fn append(&self, path: &Path, content: &str) -> Result<()>;
}
