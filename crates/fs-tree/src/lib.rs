//! Lazy filesystem forest
//!
//! A library for presenting a host filesystem as a forest of lazily expanded
//! nodes: one tree per filesystem root, with directories listed only when a
//! caller first asks for their children.
//!
//! # Core Concepts
//!
//! - **Entry**: host handle for one location (real disk or in-memory)
//! - **LazyNode**: memoizes leaf status and visible children on first demand
//! - **TreeModel**: the ordered forest of roots
//!
//! # Example
//!
//! ```no_run
//! use fs_tree::prelude::*;
//!
//! let mut model = TreeModel::from_host();
//!
//! // Expand the first level of every root
//! for root in model.roots_mut() {
//!     root.children();
//! }
//!
//! // Walk whatever has been expanded so far
//! for (depth, node) in model.walk(TraversalOrder::PreOrder) {
//!     println!("{:indent$}{}", "", node.entry().name(), indent = depth * 2);
//! }
//! ```

pub mod options;
pub mod render;
pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::options::{IconStyle, ViewOptions};
    pub use crate::render::{render, Icon};
    pub use crate::tree::prelude::*;
}
