//! CLI example that loads a directory and displays its full hierarchy
//!
//! Usage:
//!   cargo run --example list_directory [path]
//!
//! If no path is provided, uses the current directory.

use std::env;
use fs_tree::prelude::*;

fn main() {
    // Get path from command line args or use current directory
    let path = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    println!("Loading directory: {}", path);
    println!();

    let mut model = TreeModel::build([FsEntry::new(path)]);

    // Load the entire tree (use with caution on large trees!)
    let expanded: usize = model
        .roots_mut()
        .iter_mut()
        .map(|root| root.expand_to_depth(usize::MAX))
        .sum();

    println!("Directory Structure:");
    println!("═══════════════════════════════");
    println!();

    let mut files = 0;
    let mut directories = 0;

    for (depth, node) in model.walk(TraversalOrder::PreOrder) {
        let indent = "  ".repeat(depth);

        match node.cached_kind() {
            Some(NodeKind::Leaf) => {
                files += 1;
                println!("{}📄 {}", indent, node.entry().name());
            }
            _ => {
                directories += 1;
                let count = node.loaded_children().map(|c| c.len()).unwrap_or(0);
                println!("{}📁 {} ({} items)", indent, node.entry().name(), count);
            }
        }
    }

    println!();
    println!("═══════════════════════════════");
    println!("Summary:");
    println!("  Total items: {}", model.materialized_count());
    println!("  Directories: {} ({} listed)", directories, expanded);
    println!("  Files: {}", files);
}
