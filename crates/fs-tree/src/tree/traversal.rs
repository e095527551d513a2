//! Walking the materialized part of a forest

use crate::tree::{Entry, LazyNode};
use std::collections::VecDeque;

/// Traversal order for walking the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Iterator over `(depth, node)` pairs
///
/// Only descends into children that have already been computed, so walking
/// never lists a directory. Roots are at depth 0.
pub struct TreeWalker<'a, E> {
    order: TraversalOrder,
    // Used as a stack for the depth-first orders and as a queue for
    // breadth-first. The flag marks post-order nodes whose children were
    // already pushed.
    pending: VecDeque<(usize, &'a LazyNode<E>, bool)>,
}

impl<'a, E: Entry> TreeWalker<'a, E> {
    /// Create a walker over the given top-level nodes
    pub fn new(roots: &'a [LazyNode<E>], order: TraversalOrder) -> Self {
        let pending = match order {
            TraversalOrder::BreadthFirst => roots.iter().map(|root| (0, root, false)).collect(),
            TraversalOrder::PreOrder | TraversalOrder::PostOrder => {
                roots.iter().rev().map(|root| (0, root, false)).collect()
            }
        };
        Self { order, pending }
    }

    fn push_children_rev(&mut self, depth: usize, node: &'a LazyNode<E>) {
        for child in node.loaded_children().unwrap_or(&[]).iter().rev() {
            self.pending.push_back((depth + 1, child, false));
        }
    }

    fn next_preorder(&mut self) -> Option<(usize, &'a LazyNode<E>)> {
        let (depth, node, _) = self.pending.pop_back()?;
        self.push_children_rev(depth, node);
        Some((depth, node))
    }

    fn next_postorder(&mut self) -> Option<(usize, &'a LazyNode<E>)> {
        while let Some((depth, node, visited)) = self.pending.pop_back() {
            if visited {
                return Some((depth, node));
            }
            self.pending.push_back((depth, node, true));
            self.push_children_rev(depth, node);
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<(usize, &'a LazyNode<E>)> {
        let (depth, node, _) = self.pending.pop_front()?;
        for child in node.loaded_children().unwrap_or(&[]) {
            self.pending.push_back((depth + 1, child, false));
        }
        Some((depth, node))
    }
}

impl<'a, E: Entry> Iterator for TreeWalker<'a, E> {
    type Item = (usize, &'a LazyNode<E>);

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{MemoryFs, TreeModel};

    // r1/
    //   d/
    //     f
    //   g
    // r2/
    fn expanded_model(fs: &MemoryFs) -> TreeModel<crate::tree::MemEntry> {
        fs.dir("/r1").dir("/r1/d").file("/r1/d/f").file("/r1/g").dir("/r2");
        let mut model = TreeModel::build([fs.entry("/r1"), fs.entry("/r2")]);
        for root in model.roots_mut() {
            root.expand_to_depth(usize::MAX);
        }
        model
    }

    fn names<'a>(walk: impl Iterator<Item = (usize, &'a LazyNode<crate::tree::MemEntry>)>) -> Vec<(usize, String)> {
        walk.map(|(depth, node)| (depth, node.entry().name().into_owned()))
            .collect()
    }

    #[test]
    fn test_preorder() {
        let fs = MemoryFs::new();
        let model = expanded_model(&fs);
        assert_eq!(
            names(model.walk(TraversalOrder::PreOrder)),
            vec![
                (0, "r1".to_string()),
                (1, "d".to_string()),
                (2, "f".to_string()),
                (1, "g".to_string()),
                (0, "r2".to_string()),
            ]
        );
    }

    #[test]
    fn test_postorder() {
        let fs = MemoryFs::new();
        let model = expanded_model(&fs);
        let order: Vec<_> = names(model.walk(TraversalOrder::PostOrder))
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(order, vec!["f", "d", "g", "r1", "r2"]);
    }

    #[test]
    fn test_breadthfirst() {
        let fs = MemoryFs::new();
        let model = expanded_model(&fs);
        let order: Vec<_> = names(model.walk(TraversalOrder::BreadthFirst))
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(order, vec!["r1", "r2", "d", "g", "f"]);
    }

    #[test]
    fn test_walk_skips_unexpanded() {
        let fs = MemoryFs::new();
        fs.dir("/r").dir("/r/d").file("/r/d/f");
        let mut model = TreeModel::build([fs.entry("/r")]);
        model.roots_mut()[0].children();

        assert_eq!(model.walk(TraversalOrder::PreOrder).count(), 2);
        assert_eq!(fs.listings("/r/d"), 0);
    }
}
