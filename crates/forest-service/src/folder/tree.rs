//! Folder tree building and text rendering.

use std::fmt::Write;

use forest_core::types::OrganizationId;
use forest_entity::folder::{FolderNode, FolderTree};

use super::registry::{FolderRef, FolderRegistry};

/// Builds [`FolderTree`] snapshots from a registry's parent/child links.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    registry: &'a FolderRegistry,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a new tree builder.
    pub fn new(registry: &'a FolderRegistry) -> Self {
        Self { registry }
    }

    /// Snapshot every root folder, optionally limited to one organization.
    pub fn build(&self, org_id: Option<OrganizationId>) -> FolderTree {
        let roots = self
            .registry
            .roots()
            .filter(|folder| org_id.is_none_or(|org| folder.org_id() == org))
            .map(|folder| self.build_node(folder, self.registry.len()))
            .collect();
        FolderTree::from_roots(roots)
    }

    /// Builds a node and its subtree, descending at most `depth_budget` levels.
    fn build_node(&self, folder: FolderRef<'a>, depth_budget: usize) -> FolderNode {
        let children = if depth_budget == 0 {
            Vec::new()
        } else {
            folder
                .children()
                .map(|child| self.build_node(child, depth_budget - 1))
                .collect()
        };

        FolderNode {
            name: folder.name().to_string(),
            path: folder.path().to_string(),
            org_id: folder.org_id(),
            parent: folder.parent().map(|p| p.name().to_string()),
            children,
        }
    }
}

/// Render a tree as indented text for diagnostics.
pub fn render_tree(tree: &FolderTree) -> String {
    let mut out = String::new();
    if tree.roots.is_empty() {
        out.push_str("(no folders)\n");
        return out;
    }

    for root in &tree.roots {
        let _ = writeln!(out, "{}  [path: {}, org: {}]", root.name, root.path, root.org_id);
        render_children(&root.children, "", &mut out);
    }
    let _ = writeln!(out, "{} folder(s)", tree.total_folders);
    out
}

fn render_children(children: &[FolderNode], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let (branch, indent) = if i + 1 == children.len() {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let _ = writeln!(out, "{prefix}{branch}{}  [path: {}]", child.name, child.path);
        render_children(&child.children, &format!("{prefix}{indent}"), out);
    }
}
