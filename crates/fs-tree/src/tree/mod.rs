//! Lazy filesystem forest
//!
//! Nodes wrap host [`Entry`] handles and only probe the host when asked
//! whether they are leaves or what their children are. Both answers are
//! computed once and kept.

mod entry;
pub mod filesystem;
mod filter;
pub mod memory;
mod model;
mod node;
mod traversal;

pub use entry::Entry;
pub use filesystem::{list_roots, FsEntry};
pub use filter::HiddenPolicy;
pub use memory::{MemEntry, MemKind, MemoryFs};
pub use model::TreeModel;
pub use node::{Cached, LazyNode, NodeKind};
pub use traversal::{TraversalOrder, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        list_roots, Entry, FsEntry, HiddenPolicy, LazyNode, MemEntry, MemoryFs, NodeKind,
        TraversalOrder, TreeModel,
    };
}
