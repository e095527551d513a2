//! Host filesystem entries

use crate::tree::Entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An [`Entry`] backed by the real filesystem
///
/// Every query goes to the filesystem when it is made; symbolic links are
/// followed, so a link to a directory behaves like the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FsEntry {
    path: PathBuf,
}

impl FsEntry {
    /// Refer to `path`; nothing is checked until the entry is queried
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Consume the entry, returning its path
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl From<PathBuf> for FsEntry {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl Entry for FsEntry {
    fn path(&self) -> &Path {
        &self.path
    }

    fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    fn is_file(&self) -> bool {
        self.path.is_file()
    }

    fn is_symlink(&self) -> bool {
        fs::symlink_metadata(&self.path)
            .map(|metadata| metadata.file_type().is_symlink())
            .unwrap_or(false)
    }

    #[cfg(not(windows))]
    fn is_hidden(&self) -> bool {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }

    #[cfg(windows)]
    fn is_hidden(&self) -> bool {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

        // Drive roots carry the hidden attribute on some systems
        if self.path.parent().is_none() {
            return false;
        }
        fs::metadata(&self.path)
            .map(|metadata| metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
            .unwrap_or(false)
    }

    fn read_children(&self) -> io::Result<Vec<Self>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(&self.path)? {
            match entry {
                Ok(entry) => children.push(FsEntry::new(entry.path())),
                Err(err) => {
                    log::debug!("skipping unreadable entry in {}: {}", self.path.display(), err);
                }
            }
        }

        Ok(children)
    }
}

/// The filesystem roots of the host
///
/// `/` on Unix-like systems; every drive letter with a mounted volume on
/// Windows.
#[cfg(not(windows))]
pub fn list_roots() -> Vec<FsEntry> {
    vec![FsEntry::new("/")]
}

/// The filesystem roots of the host
///
/// `/` on Unix-like systems; every drive letter with a mounted volume on
/// Windows.
#[cfg(windows)]
pub fn list_roots() -> Vec<FsEntry> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|path| path.exists())
        .map(FsEntry::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        // root/
        //   file1.txt
        //   .hidden
        //   dir1/
        //     file2.txt

        fs::write(root.join("file1.txt"), "content1").unwrap();
        fs::write(root.join(".hidden"), "secret").unwrap();
        fs::create_dir(root.join("dir1")).unwrap();
        fs::write(root.join("dir1/file2.txt"), "content2").unwrap();

        temp
    }

    #[test]
    fn test_classification() {
        let temp = create_test_dir();
        let root = FsEntry::new(temp.path());
        assert!(root.is_dir());
        assert!(!root.is_file());

        let file = FsEntry::new(temp.path().join("file1.txt"));
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert_eq!(file.name(), "file1.txt");

        let missing = FsEntry::new(temp.path().join("missing"));
        assert!(!missing.is_file());
        assert!(!missing.is_dir());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_dot_files_are_hidden() {
        let temp = create_test_dir();
        assert!(FsEntry::new(temp.path().join(".hidden")).is_hidden());
        assert!(!FsEntry::new(temp.path().join("file1.txt")).is_hidden());
        assert!(!FsEntry::new("/").is_hidden());
    }

    #[test]
    fn test_read_children() {
        let temp = create_test_dir();
        let root = FsEntry::new(temp.path());

        let mut names: Vec<_> = root
            .read_children()
            .unwrap()
            .iter()
            .map(|child| child.name().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![".hidden", "dir1", "file1.txt"]);
    }

    #[test]
    fn test_read_children_of_file_fails() {
        let temp = create_test_dir();
        let file = FsEntry::new(temp.path().join("file1.txt"));
        assert!(file.read_children().is_err());
    }

    #[test]
    fn test_list_roots() {
        let roots = list_roots();
        assert!(!roots.is_empty());
        assert!(roots.iter().all(|root| root.path().parent().is_none()));
    }
}
