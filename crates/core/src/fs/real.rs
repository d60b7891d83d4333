use super::FileSystem;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
    }
    Ok(())
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize()
            .with_context(|| format!("Failed to canonicalize path {:?}", path))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, content).with_context(|| format!("Failed to write file {:?}", path))
    }

    fn append(&self, path: &Path, content: &str) -> Result<()> {
        ensure_parent(path)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open file {:?} for append", path))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to append to file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("core")).unwrap();
        fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();
        dir
    }

    #[test]
    fn test_exists_and_kinds() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(&temp.path().join("pom.xml")));
        assert!(fs.is_file(&temp.path().join("pom.xml")));
        assert!(fs.is_dir(&temp.path().join("core")));
        assert!(!fs.exists(&temp.path().join("web")));
    }

    #[test]
    fn test_read_to_string() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let content = fs.read_to_string(&temp.path().join("pom.xml")).unwrap();
        assert_eq!(content, "<project/>");
    }

    #[test]
    fn test_write_creates_parents() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();
        let target = temp.path().join("gradle/libs.versions.toml");

        fs.write(&target, "[versions]\n").unwrap();

        assert_eq!(fs.read_to_string(&target).unwrap(), "[versions]\n");
    }

    #[test]
    fn test_append() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();
        let target = temp.path().join(".gitignore");

        fs.append(&target, "target/\n").unwrap();
        fs.append(&target, ".gradle/\n").unwrap();

        assert_eq!(fs.read_to_string(&target).unwrap(), "target/\n.gradle/\n");
    }

    #[test]
    fn test_canonicalize_resolves_parent_segments() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let direct = fs.canonicalize(&temp.path().join("core")).unwrap();
        let roundabout = fs.canonicalize(&temp.path().join("core/../core")).unwrap();
        assert_eq!(direct, roundabout);
        assert!(direct.is_absolute());
    }
}
