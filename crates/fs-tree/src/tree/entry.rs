//! The host capability consumed by the tree

use std::borrow::Cow;
use std::io;
use std::path::Path;

/// A handle to one location in a filesystem-like namespace
///
/// The tree only ever asks an entry to describe itself and to list its
/// immediate children. Answers are taken at face value when they are asked;
/// nothing is re-validated later.
pub trait Entry: Sized {
    /// The location this entry refers to
    fn path(&self) -> &Path;

    /// Returns true if the entry currently is a directory
    fn is_dir(&self) -> bool;

    /// Returns true if the entry currently is a plain file
    fn is_file(&self) -> bool;

    /// Returns true if the host considers the entry hidden
    fn is_hidden(&self) -> bool;

    /// Returns true if the entry is a symbolic link, whatever it points to
    ///
    /// Links are listed like their targets when expanded one level at a time,
    /// but eager expansion does not descend into them.
    fn is_symlink(&self) -> bool {
        false
    }

    /// List the immediate children in the host's own order
    fn read_children(&self) -> io::Result<Vec<Self>>;

    /// The last path component, or the whole path for roots such as `/`
    fn name(&self) -> Cow<'_, str> {
        match self.path().file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.path().to_string_lossy(),
        }
    }
}
