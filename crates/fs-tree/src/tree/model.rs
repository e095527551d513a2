//! The forest of filesystem roots

use crate::tree::{list_roots, Entry, FsEntry, HiddenPolicy, LazyNode, TraversalOrder, TreeWalker};
use std::fmt;
use std::path::Path;

/// An ordered forest holding one [`LazyNode`] per filesystem root
///
/// There is no synthetic root above the real ones. The set of roots is fixed
/// when the model is built; only the roots' descendants fill in over time.
///
/// # Example
///
/// ```no_run
/// use fs_tree::prelude::*;
///
/// let mut model = TreeModel::from_host();
///
/// for root in model.roots_mut() {
///     let count = root.child_count();
///     println!("{} ({} entries)", root.entry().name(), count);
/// }
/// ```
pub struct TreeModel<E> {
    roots: Vec<LazyNode<E>>,
}

impl TreeModel<FsEntry> {
    /// Build a forest over the host's filesystem roots, hiding hidden entries
    pub fn from_host() -> Self {
        Self::build(list_roots())
    }
}

impl<E: Entry> TreeModel<E> {
    /// Build a forest with one node per root entry, in the given order
    ///
    /// Roots are kept even if they report themselves hidden.
    pub fn build(root_entries: impl IntoIterator<Item = E>) -> Self {
        Self::build_with_policy(root_entries, HiddenPolicy::default())
    }

    /// Build a forest whose directories apply `policy` to their children
    pub fn build_with_policy(root_entries: impl IntoIterator<Item = E>, policy: HiddenPolicy) -> Self {
        let roots: Vec<_> = root_entries
            .into_iter()
            .map(|entry| LazyNode::with_policy(entry, policy))
            .collect();
        log::debug!("built forest with {} roots", roots.len());
        Self { roots }
    }

    /// The top-level nodes
    pub fn roots(&self) -> &[LazyNode<E>] {
        &self.roots
    }

    /// The top-level nodes, for expanding them
    pub fn roots_mut(&mut self) -> &mut [LazyNode<E>] {
        &mut self.roots
    }

    /// Number of roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if the forest has no roots
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Walk every node created so far; never touches the filesystem
    pub fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, E> {
        TreeWalker::new(&self.roots, order)
    }

    /// Count the nodes created so far, roots included
    pub fn materialized_count(&self) -> usize {
        self.roots.iter().map(LazyNode::materialized_count).sum()
    }

    /// Expand the ancestors of `path` and return its node
    ///
    /// Only the directories on the way down are listed. Returns `None` when
    /// `path` lies outside every root, does not exist, or is filtered out by
    /// the hidden-entry policy.
    pub fn reveal(&mut self, path: impl AsRef<Path>) -> Option<&mut LazyNode<E>> {
        let target = path.as_ref();
        let mut node = self
            .roots
            .iter_mut()
            .find(|root| target.starts_with(root.entry().path()))?;

        while node.entry().path() != target {
            node = node
                .children()
                .iter_mut()
                .find(|child| target.starts_with(child.entry().path()))?;
        }
        Some(node)
    }
}

impl<E: Entry> fmt::Debug for TreeModel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeModel").field("roots", &self.roots).finish()
    }
}
