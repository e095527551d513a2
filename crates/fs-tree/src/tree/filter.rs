//! Hidden-entry filtering

use crate::tree::Entry;
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether hidden entries show up among a directory's children
///
/// Roots are never filtered; the policy only applies while a directory is
/// being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HiddenPolicy {
    /// Drop every entry that reports itself hidden
    #[default]
    #[display(fmt = "exclude")]
    Exclude,
    /// Keep everything
    #[display(fmt = "include")]
    Include,
}

impl HiddenPolicy {
    /// Returns true if `entry` should become a child node
    pub fn admits<E: Entry>(self, entry: &E) -> bool {
        match self {
            HiddenPolicy::Exclude => !entry.is_hidden(),
            HiddenPolicy::Include => true,
        }
    }
}
