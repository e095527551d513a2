//! In-memory filesystem
//!
//! A deterministic [`Entry`] host: children are listed in insertion order,
//! directories can be made unreadable, and every listing and file probe is
//! counted per path. Useful for embedding the tree over non-disk namespaces
//! and for observing exactly when the tree touches its host.

use crate::tree::Entry;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// What a path in a [`MemoryFs`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemKind {
    File,
    Directory,
    /// Neither file nor directory, like a dangling link or a socket
    Special,
}

#[derive(Debug)]
struct MemNode {
    kind: MemKind,
    hidden: bool,
    link: bool,
    readable: bool,
    children: Vec<PathBuf>,
}

impl MemNode {
    fn new(kind: MemKind) -> Self {
        Self {
            kind,
            hidden: false,
            link: false,
            readable: true,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    nodes: HashMap<PathBuf, MemNode>,
    listings: HashMap<PathBuf, usize>,
    file_probes: HashMap<PathBuf, usize>,
}

impl State {
    fn insert(&mut self, path: &Path, kind: MemKind) {
        if let Some(node) = self.nodes.get_mut(path) {
            node.kind = kind;
            return;
        }

        self.nodes.insert(path.to_path_buf(), MemNode::new(kind));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            match self.nodes.get(parent).map(|node| node.kind) {
                Some(MemKind::Directory) => {}
                _ => self.insert(parent, MemKind::Directory),
            }
            if let Some(parent) = self.nodes.get_mut(parent) {
                parent.children.push(path.to_path_buf());
            }
        }
    }

    fn remove(&mut self, path: &Path) {
        if let Some(node) = self.nodes.remove(path) {
            for child in node.children {
                self.remove(&child);
            }
        }
        if let Some(parent) = path.parent().and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|child| child != path);
        }
    }

    fn update(&mut self, path: &Path, f: impl FnOnce(&mut MemNode)) {
        if let Some(node) = self.nodes.get_mut(path) {
            f(node);
        }
    }
}

/// A shared, mutable in-memory filesystem
///
/// Cloning gives another handle to the same filesystem. Builder methods create
/// missing parent directories and return `&Self` so they can be chained.
///
/// # Example
///
/// ```
/// use fs_tree::prelude::*;
///
/// let fs = MemoryFs::new();
/// fs.dir("/").file("/a.txt").dir("/.cache").deny("/.cache");
///
/// let mut model = TreeModel::build([fs.entry("/")]);
/// assert_eq!(model.roots_mut()[0].child_count(), 1);
/// assert_eq!(fs.listings("/"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Rc<RefCell<State>>,
}

impl MemoryFs {
    /// Create an empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory
    pub fn dir(&self, path: impl AsRef<Path>) -> &Self {
        self.state.borrow_mut().insert(path.as_ref(), MemKind::Directory);
        self
    }

    /// Add a plain file
    pub fn file(&self, path: impl AsRef<Path>) -> &Self {
        self.state.borrow_mut().insert(path.as_ref(), MemKind::File);
        self
    }

    /// Add an entry that is neither a file nor a directory
    pub fn special(&self, path: impl AsRef<Path>) -> &Self {
        self.state.borrow_mut().insert(path.as_ref(), MemKind::Special);
        self
    }

    /// Mark an existing entry hidden regardless of its name
    pub fn hide(&self, path: impl AsRef<Path>) -> &Self {
        self.state
            .borrow_mut()
            .update(path.as_ref(), |node| node.hidden = true);
        self
    }

    /// Mark an existing entry as a symbolic link; it keeps behaving like
    /// whatever it was added as
    pub fn link(&self, path: impl AsRef<Path>) -> &Self {
        self.state
            .borrow_mut()
            .update(path.as_ref(), |node| node.link = true);
        self
    }

    /// Make listing an existing directory fail with `PermissionDenied`
    pub fn deny(&self, path: impl AsRef<Path>) -> &Self {
        self.state
            .borrow_mut()
            .update(path.as_ref(), |node| node.readable = false);
        self
    }

    /// Delete an entry and everything below it
    pub fn remove(&self, path: impl AsRef<Path>) -> &Self {
        self.state.borrow_mut().remove(path.as_ref());
        self
    }

    /// What `path` currently is, if it exists
    pub fn kind(&self, path: impl AsRef<Path>) -> Option<MemKind> {
        self.state
            .borrow()
            .nodes
            .get(path.as_ref())
            .map(|node| node.kind)
    }

    /// A handle to `path`; the path does not need to exist
    pub fn entry(&self, path: impl Into<PathBuf>) -> MemEntry {
        MemEntry {
            path: path.into(),
            state: Rc::clone(&self.state),
        }
    }

    /// How many times `path` has been listed
    pub fn listings(&self, path: impl AsRef<Path>) -> usize {
        self.state
            .borrow()
            .listings
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }

    /// How many times `path` has been asked whether it is a file
    pub fn file_probes(&self, path: impl AsRef<Path>) -> usize {
        self.state
            .borrow()
            .file_probes
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }

    /// Total listings across all paths
    pub fn total_listings(&self) -> usize {
        self.state.borrow().listings.values().sum()
    }
}

/// An [`Entry`] in a [`MemoryFs`]
#[derive(Clone)]
pub struct MemEntry {
    path: PathBuf,
    state: Rc<RefCell<State>>,
}

impl MemEntry {
    fn kind(&self) -> Option<MemKind> {
        self.state.borrow().nodes.get(&self.path).map(|node| node.kind)
    }
}

impl fmt::Debug for MemEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemEntry").field(&self.path).finish()
    }
}

impl PartialEq for MemEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for MemEntry {}

impl Entry for MemEntry {
    fn path(&self) -> &Path {
        &self.path
    }

    fn is_dir(&self) -> bool {
        self.kind() == Some(MemKind::Directory)
    }

    fn is_file(&self) -> bool {
        *self
            .state
            .borrow_mut()
            .file_probes
            .entry(self.path.clone())
            .or_default() += 1;
        self.kind() == Some(MemKind::File)
    }

    fn is_symlink(&self) -> bool {
        self.state
            .borrow()
            .nodes
            .get(&self.path)
            .map(|node| node.link)
            .unwrap_or(false)
    }

    fn is_hidden(&self) -> bool {
        let flagged = self
            .state
            .borrow()
            .nodes
            .get(&self.path)
            .map(|node| node.hidden)
            .unwrap_or(false);
        flagged || self.name().starts_with('.')
    }

    fn read_children(&self) -> io::Result<Vec<Self>> {
        let mut state = self.state.borrow_mut();
        *state.listings.entry(self.path.clone()).or_default() += 1;

        let node = state.nodes.get(&self.path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", self.path.display()),
            )
        })?;

        if node.kind != MemKind::Directory {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is not a directory", self.path.display()),
            ));
        }
        if !node.readable {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", self.path.display()),
            ));
        }

        Ok(node
            .children
            .iter()
            .map(|path| MemEntry {
                path: path.clone(),
                state: Rc::clone(&self.state),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_are_created() {
        let fs = MemoryFs::new();
        fs.file("/a/b/c.txt");

        assert_eq!(fs.kind("/"), Some(MemKind::Directory));
        assert_eq!(fs.kind("/a"), Some(MemKind::Directory));
        assert_eq!(fs.kind("/a/b"), Some(MemKind::Directory));
        assert_eq!(fs.kind("/a/b/c.txt"), Some(MemKind::File));
    }

    #[test]
    fn test_listing_order_is_insertion_order() {
        let fs = MemoryFs::new();
        fs.dir("/r").file("/r/zeta").file("/r/alpha").dir("/r/mid");

        let names: Vec<_> = fs
            .entry("/r")
            .read_children()
            .unwrap()
            .iter()
            .map(|entry| entry.name().into_owned())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(fs.listings("/r"), 1);
    }

    #[test]
    fn test_redefining_does_not_duplicate() {
        let fs = MemoryFs::new();
        fs.dir("/r").file("/r/x").special("/r/x");

        assert_eq!(fs.entry("/r").read_children().unwrap().len(), 1);
        assert_eq!(fs.kind("/r/x"), Some(MemKind::Special));
    }

    #[test]
    fn test_listing_failures() {
        let fs = MemoryFs::new();
        fs.dir("/locked").deny("/locked").file("/plain");

        let denied = fs.entry("/locked").read_children().unwrap_err();
        assert_eq!(denied.kind(), io::ErrorKind::PermissionDenied);

        let missing = fs.entry("/nowhere").read_children().unwrap_err();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);

        assert!(fs.entry("/plain").read_children().is_err());
    }

    #[test]
    fn test_remove() {
        let fs = MemoryFs::new();
        fs.dir("/r").dir("/r/d").file("/r/d/f").file("/r/g");
        fs.remove("/r/d");

        assert_eq!(fs.kind("/r/d"), None);
        assert_eq!(fs.kind("/r/d/f"), None);
        assert_eq!(fs.entry("/r").read_children().unwrap().len(), 1);
    }

    #[test]
    fn test_link_flag() {
        let fs = MemoryFs::new();
        fs.dir("/r").dir("/r/l").link("/r/l");

        assert!(fs.entry("/r/l").is_symlink());
        assert!(fs.entry("/r/l").is_dir());
        assert!(!fs.entry("/r").is_symlink());
    }

    #[test]
    fn test_probe_counters() {
        let fs = MemoryFs::new();
        fs.file("/f");
        let entry = fs.entry("/f");

        assert!(entry.is_file());
        assert!(entry.is_file());
        assert!(!entry.is_dir());
        assert_eq!(fs.file_probes("/f"), 2);
        assert_eq!(fs.listings("/f"), 0);
    }
}
