//! Lazy tree nodes
//!
//! A [`LazyNode`] wraps one [`Entry`] and defers both of its filesystem probes
//! (leaf classification and directory listing) until they are first asked
//! for. Each result is computed once and kept for the lifetime of the node.

use crate::tree::{Entry, HiddenPolicy};
use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a node can hold children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// Anything that is not a plain file: directories, but also special
    /// entries that report neither file nor directory
    #[display(fmt = "Container")]
    Container,
    /// A plain file
    #[display(fmt = "Leaf")]
    Leaf,
}

impl NodeKind {
    /// Classify from the entry's "is a file" answer
    pub const fn from_is_file(is_file: bool) -> Self {
        if is_file {
            NodeKind::Leaf
        } else {
            NodeKind::Container
        }
    }

    /// Returns true if this is a container node
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::Container)
    }

    /// Returns true if this is a leaf node
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

/// One-shot memoized value
///
/// Moves from `Uncomputed` to `Computed` exactly once and never back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cached<T> {
    /// Nothing has been computed yet
    #[default]
    Uncomputed,
    /// The value was computed and is now permanent
    Computed(T),
}

impl<T> Cached<T> {
    /// Returns true once the value has been computed
    pub fn is_computed(&self) -> bool {
        matches!(self, Cached::Computed(_))
    }

    /// The computed value, if any, without computing it
    pub fn get(&self) -> Option<&T> {
        match self {
            Cached::Computed(value) => Some(value),
            Cached::Uncomputed => None,
        }
    }

    /// Return the value, running `compute` first if this is the first access
    pub fn get_or_compute(&mut self, compute: impl FnOnce() -> T) -> &mut T {
        if let Cached::Uncomputed = self {
            *self = Cached::Computed(compute());
        }
        match self {
            Cached::Computed(value) => value,
            // Filled by the `if let` above; a single match cannot both
            // assign `*self` and return a borrow of it.
            Cached::Uncomputed => unreachable!("cache was filled above"),
        }
    }
}

/// A node in the filesystem forest whose children and leaf status are
/// computed on first demand
///
/// Nodes own their children outright; a node is only ever reachable through
/// its parent (or through the [`TreeModel`](crate::tree::TreeModel) for roots).
///
/// # Example
///
/// ```ignore
/// let mut node = LazyNode::new(FsEntry::new("/tmp"));
///
/// // Nothing has touched the filesystem yet
/// assert!(!node.is_expanded());
///
/// // The first call lists the directory, later calls reuse the result
/// for child in node.children() {
///     println!("{}", child.entry().name());
/// }
/// ```
pub struct LazyNode<E> {
    entry: E,
    policy: HiddenPolicy,
    kind: Cached<NodeKind>,
    children: Cached<Vec<LazyNode<E>>>,
}

impl<E: Entry> LazyNode<E> {
    /// Wrap an entry, hiding hidden children
    pub fn new(entry: E) -> Self {
        Self::with_policy(entry, HiddenPolicy::default())
    }

    /// Wrap an entry with an explicit hidden-entry policy
    ///
    /// The policy is handed down to every child this node creates.
    pub fn with_policy(entry: E, policy: HiddenPolicy) -> Self {
        Self {
            entry,
            policy,
            kind: Cached::Uncomputed,
            children: Cached::Uncomputed,
        }
    }

    /// The wrapped entry
    pub fn entry(&self) -> &E {
        &self.entry
    }

    /// The hidden-entry policy applied when listing children
    pub fn policy(&self) -> HiddenPolicy {
        self.policy
    }

    /// Classify this node, probing the entry on the first call only
    pub fn kind(&mut self) -> NodeKind {
        let entry = &self.entry;
        *self.kind.get_or_compute(|| {
            let kind = NodeKind::from_is_file(entry.is_file());
            log::trace!("classified {} as {}", entry.path().display(), kind);
            kind
        })
    }

    /// Returns true if the entry is a plain file
    ///
    /// A directory is never a leaf, even when it has no visible children.
    pub fn is_leaf(&mut self) -> bool {
        self.kind().is_leaf()
    }

    /// The visible children of this node, listing the directory on the first
    /// call only
    ///
    /// Files, special entries and unreadable directories all yield an empty
    /// slice. Children keep the host's listing order.
    pub fn children(&mut self) -> &mut [LazyNode<E>] {
        let entry = &self.entry;
        let policy = self.policy;
        self.children
            .get_or_compute(|| build_children(entry, policy))
            .as_mut_slice()
    }

    /// Number of visible children (lists the directory if needed)
    pub fn child_count(&mut self) -> usize {
        self.children().len()
    }

    /// The leaf classification if it was already computed
    pub fn cached_kind(&self) -> Option<NodeKind> {
        self.kind.get().copied()
    }

    /// The children if they were already computed
    pub fn loaded_children(&self) -> Option<&[LazyNode<E>]> {
        self.children.get().map(Vec::as_slice)
    }

    /// Returns true once the children have been computed
    pub fn is_expanded(&self) -> bool {
        self.children.is_computed()
    }

    /// Expand this node and its non-leaf descendants down to `depth` levels
    ///
    /// A depth of zero expands nothing; one expands only this node. Children
    /// that are symbolic links are not descended into, since a link can point
    /// back up its own path. Returns the number of nodes whose children were
    /// computed by this call.
    pub fn expand_to_depth(&mut self, depth: usize) -> usize {
        if depth == 0 || self.is_leaf() {
            return 0;
        }

        let mut expanded = usize::from(!self.is_expanded());
        for child in self.children() {
            if child.entry().is_symlink() {
                continue;
            }
            expanded += child.expand_to_depth(depth - 1);
        }
        expanded
    }

    /// Count this node and every descendant created so far
    pub fn materialized_count(&self) -> usize {
        1 + self
            .loaded_children()
            .map(|children| children.iter().map(LazyNode::materialized_count).sum())
            .unwrap_or(0)
    }
}

/// Enumerate the visible children of `entry`
fn build_children<E: Entry>(entry: &E, policy: HiddenPolicy) -> Vec<LazyNode<E>> {
    if !entry.is_dir() {
        return Vec::new();
    }

    match entry.read_children() {
        Ok(entries) => {
            let children: Vec<_> = entries
                .into_iter()
                .filter(|child| policy.admits(child))
                .map(|child| LazyNode::with_policy(child, policy))
                .collect();
            log::debug!(
                "expanded {} ({} visible children)",
                entry.path().display(),
                children.len()
            );
            children
        }
        Err(err) => {
            log::warn!("cannot list {}: {}", entry.path().display(), err);
            Vec::new()
        }
    }
}

impl<E: Entry> fmt::Debug for LazyNode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyNode")
            .field("path", &self.entry.path())
            .field("kind", &self.kind)
            .field(
                "children",
                &self.loaded_children().map(|children| children.len()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryFs;

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::Container.is_container());
        assert!(!NodeKind::Container.is_leaf());
        assert!(NodeKind::Leaf.is_leaf());
        assert!(!NodeKind::Leaf.is_container());
        assert_eq!(NodeKind::from_is_file(true), NodeKind::Leaf);
        assert_eq!(NodeKind::from_is_file(false), NodeKind::Container);
        assert_eq!(NodeKind::Leaf.to_string(), "Leaf");
    }

    #[test]
    fn test_cached_transitions_once() {
        let mut cache: Cached<u32> = Cached::default();
        assert!(!cache.is_computed());
        assert_eq!(cache.get(), None);

        let mut calls = 0;
        assert_eq!(
            *cache.get_or_compute(|| {
                calls += 1;
                7
            }),
            7
        );
        assert_eq!(
            *cache.get_or_compute(|| {
                calls += 1;
                8
            }),
            7
        );
        assert_eq!(calls, 1);
        assert_eq!(cache, Cached::Computed(7));
    }

    #[test]
    fn test_new_node_is_untouched() {
        let fs = MemoryFs::new();
        fs.dir("/r").file("/r/a");

        let node = LazyNode::new(fs.entry("/r"));
        assert!(!node.is_expanded());
        assert_eq!(node.cached_kind(), None);
        assert!(node.loaded_children().is_none());
        assert_eq!(node.materialized_count(), 1);
        assert_eq!(fs.listings("/r"), 0);
        assert_eq!(fs.file_probes("/r"), 0);
    }

    #[test]
    fn test_expand_to_depth() {
        let fs = MemoryFs::new();
        fs.dir("/r")
            .dir("/r/a")
            .dir("/r/a/b")
            .file("/r/a/b/c.txt")
            .file("/r/top.txt");

        let mut node = LazyNode::new(fs.entry("/r"));
        assert_eq!(node.expand_to_depth(0), 0);
        assert_eq!(node.expand_to_depth(2), 2);
        assert_eq!(fs.listings("/r/a/b"), 0);
        assert_eq!(node.materialized_count(), 4);

        // Already expanded levels are not counted again
        assert_eq!(node.expand_to_depth(3), 1);
        assert_eq!(fs.listings("/r"), 1);
        assert_eq!(fs.listings("/r/a"), 1);
        assert_eq!(fs.listings("/r/a/b"), 1);
        // Files are never listed
        assert_eq!(fs.listings("/r/top.txt"), 0);
    }

    #[test]
    fn test_expand_to_depth_skips_links() {
        let fs = MemoryFs::new();
        fs.dir("/r")
            .dir("/r/real")
            .file("/r/real/f")
            .dir("/r/up")
            .file("/r/up/g")
            .link("/r/up");

        let mut node = LazyNode::new(fs.entry("/r"));
        assert_eq!(node.expand_to_depth(usize::MAX), 2);
        assert_eq!(fs.listings("/r/up"), 0);

        // One level at a time, the link is still followed
        let up = node
            .children()
            .iter_mut()
            .find(|child| child.entry().is_symlink())
            .unwrap();
        assert_eq!(up.child_count(), 1);
    }

    #[test]
    fn test_policy_is_inherited() {
        let fs = MemoryFs::new();
        fs.dir("/r").dir("/r/d").file("/r/d/.x").file("/r/d/y");

        let mut node = LazyNode::with_policy(fs.entry("/r"), HiddenPolicy::Include);
        let child = &mut node.children()[0];
        assert_eq!(child.policy(), HiddenPolicy::Include);
        assert_eq!(child.child_count(), 2);
    }
}
