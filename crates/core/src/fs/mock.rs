use super::{FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
}

/// In-memory file system rooted at `/mock` (or a custom root).
///
/// Relative paths are resolved against the root and `.`/`..` segments are
/// folded lexically, so `canonicalize` behaves like the real thing for
/// module-cycle detection.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root,
        };
        let root = fs.root.clone();
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// Paths of every file currently stored, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let files = self.files.read().unwrap();
        let mut paths: Vec<PathBuf> = files
            .iter()
            .filter(|(_, entry)| entry.file_type == FileType::File)
            .map(|(path, _)| path.clone())
            .collect();
        paths.sort();
        paths
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }

    fn entry_type(&self, path: &Path) -> Option<FileType> {
        let path = self.normalize_path(path);
        self.files.read().unwrap().get(&path).map(|e| e.file_type)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry_type(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entry_type(path) == Some(FileType::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.entry_type(path) == Some(FileType::File)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let normalized = self.normalize_path(path);
        if self.files.read().unwrap().contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(anyhow!("Path not found: {:?}", path))
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.is_dir(path) {
            return Err(anyhow!("Cannot write over directory: {:?}", path));
        }
        self.add_file(path, content);
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> Result<()> {
        let existing = if self.is_file(path) {
            self.read_to_string(path)?
        } else {
            String::new()
        };
        self.write(path, &format!("{}{}", existing, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("pom.xml", "<project/>");

        assert!(fs.exists(Path::new("/mock/pom.xml")));
        assert!(fs.is_file(Path::new("/mock/pom.xml")));
        assert!(fs.is_dir(Path::new("/mock")));
    }

    #[test]
    fn test_parent_directories_created() {
        let fs = MockFileSystem::new();
        fs.add_file("a/b/pom.xml", "<project/>");

        assert!(fs.is_dir(Path::new("/mock/a")));
        assert!(fs.is_dir(Path::new("/mock/a/b")));
        assert!(fs.is_file(Path::new("/mock/a/b/pom.xml")));
    }

    #[test]
    fn test_read_missing_file() {
        let fs = MockFileSystem::new();
        assert!(fs.read_to_string(Path::new("missing.txt")).is_err());
        assert!(fs.read_to_string(Path::new("/mock")).is_err());
    }

    #[test]
    fn test_canonicalize_folds_parent_segments() {
        let fs = MockFileSystem::new();
        fs.add_dir("core");

        let canonical = fs.canonicalize(Path::new("/mock/core/../core/.")).unwrap();
        assert_eq!(canonical, PathBuf::from("/mock/core"));
        assert!(fs.canonicalize(Path::new("/mock/web")).is_err());
    }

    #[test]
    fn test_write_and_append() {
        let fs = MockFileSystem::new();
        fs.write(Path::new("gradle/libs.versions.toml"), "[versions]\n")
            .unwrap();
        fs.append(Path::new(".gitignore"), "target/\n").unwrap();
        fs.append(Path::new(".gitignore"), ".gradle/\n").unwrap();

        assert!(fs.is_dir(Path::new("/mock/gradle")));
        assert_eq!(
            fs.read_to_string(Path::new(".gitignore")).unwrap(),
            "target/\n.gradle/\n"
        );
        assert!(fs.write(Path::new("gradle"), "oops").is_err());
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("core/pom.xml", "<project/>");

        assert_eq!(fs.root(), Path::new("/repo"));
        assert!(fs.exists(Path::new("/repo/core/pom.xml")));
        assert_eq!(
            fs.file_paths(),
            vec![PathBuf::from("/repo/core/pom.xml")]
        );
    }
}
