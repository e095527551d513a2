//! Text rendering of a forest
//!
//! Produces one line per visible node. Collapsed directories are drawn from
//! their leaf status alone, so nodes below the expansion depth are never
//! listed just to be displayed.

use crate::options::{IconStyle, ViewOptions};
use crate::tree::{Entry, LazyNode, TreeModel};
use derive_more::Display;

/// Icon drawn next to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Icon {
    #[display(fmt = "File")]
    File,
    #[display(fmt = "Directory")]
    Directory,
}

impl Icon {
    /// File icon for leaves, directory icon for everything else
    pub fn for_node<E: Entry>(node: &mut LazyNode<E>) -> Self {
        if node.is_leaf() {
            Icon::File
        } else {
            Icon::Directory
        }
    }

    /// The text drawn for this icon in the given style
    pub fn glyph(self, style: IconStyle) -> &'static str {
        match (self, style) {
            (Icon::File, IconStyle::Glyph) => "📄",
            (Icon::Directory, IconStyle::Glyph) => "📁",
            (Icon::File, IconStyle::Ascii) => "[F]",
            (Icon::Directory, IconStyle::Ascii) => "[D]",
        }
    }
}

/// Render the forest, expanding nodes down to `options.max_depth`
///
/// Symbolic links below the roots are drawn collapsed.
///
/// Nodes expanded earlier (for example by [`TreeModel::reveal`]) stay
/// expanded in the output whatever their depth.
pub fn render<E: Entry>(model: &mut TreeModel<E>, options: &ViewOptions) -> String {
    let mut out = String::new();

    if let Some(title) = &options.title {
        out.push_str(title);
        out.push('\n');
    }

    for root in model.roots_mut() {
        let label = root.entry().path().display().to_string();
        render_node(&mut out, root, label, 0, options);
    }

    out
}

fn render_node<E: Entry>(
    out: &mut String,
    node: &mut LazyNode<E>,
    label: String,
    depth: usize,
    options: &ViewOptions,
) {
    let icon = Icon::for_node(node);
    let leaf = icon == Icon::File;

    // Roots are always entered; linked directories below them are left
    // collapsed so a link back up the path cannot be followed repeatedly
    let linked = depth > 0 && node.entry().is_symlink();
    if !leaf && !linked && depth < options.max_depth {
        node.children();
    }

    let marker = if leaf {
        " "
    } else if node.is_expanded() {
        "▾"
    } else {
        "▸"
    };

    out.push_str(&format!(
        "{}{} {} {}\n",
        "  ".repeat(depth),
        marker,
        icon.glyph(options.icons),
        label
    ));

    if node.is_expanded() {
        for child in node.children() {
            let label = child.entry().name().into_owned();
            render_node(out, child, label, depth + 1, options);
        }
    }
}
