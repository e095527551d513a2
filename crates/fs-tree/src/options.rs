//! Configuration options for presenting a forest.
//!
//! This module provides the `ViewOptions` struct which controls how deep the
//! initial view expands, whether hidden entries are listed, which icons are
//! drawn and the title line.

use crate::tree::HiddenPolicy;
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How file and directory icons are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IconStyle {
    /// Pictographs (📁 / 📄).
    #[default]
    #[display(fmt = "glyph")]
    Glyph,
    /// Plain `[D]` / `[F]` markers for terminals without emoji.
    #[display(fmt = "ascii")]
    Ascii,
}

/// Options for presenting a forest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewOptions {
    /// Number of levels expanded below (and including) each root.
    /// Deeper nodes are shown collapsed without being listed.
    pub max_depth: usize,

    /// Whether hidden entries appear among children.
    pub hidden: HiddenPolicy,

    /// Icon style.
    pub icons: IconStyle,

    /// Heading printed above the forest.
    pub title: Option<String>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            max_depth: 1,
            hidden: HiddenPolicy::Exclude,
            icons: IconStyle::Glyph,
            title: Some("File system".to_string()),
        }
    }
}

impl ViewOptions {
    /// Create new view options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many levels are expanded.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the hidden-entry policy.
    pub fn hidden(mut self, policy: HiddenPolicy) -> Self {
        self.hidden = policy;
        self
    }

    /// Set the icon style.
    pub fn icons(mut self, style: IconStyle) -> Self {
        self.icons = style;
        self
    }

    /// Set the heading, or remove it with `None`.
    pub fn title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = title.map(Into::into);
        self
    }
}
