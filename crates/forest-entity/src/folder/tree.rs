//! Folder tree structures for hierarchical display.

use forest_core::types::OrganizationId;
use serde::{Deserialize, Serialize};

/// A node in a rendered folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Owning organization.
    pub org_id: OrganizationId,
    /// Name of the parent folder, if any.
    pub parent: Option<String>,
    /// Child folder nodes, in the forest's child order.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of folders in this subtree, including this node.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderNode::subtree_size)
            .sum::<usize>()
    }
}

/// A snapshot of the forest, one node per root folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Build a tree from root nodes, counting every folder beneath them.
    pub fn from_roots(roots: Vec<FolderNode>) -> Self {
        let total_folders = roots.iter().map(FolderNode::subtree_size).sum();
        Self {
            roots,
            total_folders,
        }
    }
}
