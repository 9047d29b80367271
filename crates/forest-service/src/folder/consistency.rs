//! Structural consistency checks over a registry.

use thiserror::Error;

use super::registry::{FolderIndex, FolderRegistry};

/// A broken hierarchy invariant found by [`FolderRegistry::check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The recorded path disagrees with the names along the parent chain.
    #[error("folder '{name}' ({folder}) has path '{recorded}' but its parent links spell '{expected}'")]
    PathMismatch {
        /// Offending folder.
        folder: FolderIndex,
        /// Its name.
        name: String,
        /// Path stored on the folder.
        recorded: String,
        /// Path derived from parent links.
        expected: String,
    },
    /// A parent pointer and the parent's child list disagree.
    #[error("folder '{name}' ({folder}) and parent {parent} disagree about their link")]
    ChildLinkMismatch {
        /// The child side of the link.
        folder: FolderIndex,
        /// Its name.
        name: String,
        /// The parent side of the link.
        parent: FolderIndex,
    },
    /// Following parent links from this folder never reaches a root.
    #[error("folder '{name}' ({folder}) is its own ancestor")]
    Cycle {
        /// A folder on the cycle.
        folder: FolderIndex,
        /// Its name.
        name: String,
    },
    /// A folder is linked under a parent from another organization.
    #[error("folder '{name}' ({folder}) is linked under {parent} from another organization")]
    CrossOrganizationLink {
        /// The child.
        folder: FolderIndex,
        /// Its name.
        name: String,
        /// Its parent.
        parent: FolderIndex,
    },
}

impl FolderRegistry {
    /// Report every broken hierarchy invariant without modifying anything.
    ///
    /// A registry assembled with [`FolderRegistry::builder`] and never linked
    /// reports every multi-segment path as a [`Violation::PathMismatch`].
    pub fn check_consistency(&self) -> Vec<Violation> {
        let nav = self.navigator();
        let mut violations = Vec::new();

        for folder in self.iter() {
            let index = folder.index();
            let name = folder.name().to_string();

            match nav.path_from_links(index) {
                Some(expected) if expected != folder.path() => {
                    violations.push(Violation::PathMismatch {
                        folder: index,
                        name: name.clone(),
                        recorded: folder.path().to_string(),
                        expected,
                    });
                }
                Some(_) => {}
                None => violations.push(Violation::Cycle {
                    folder: index,
                    name: name.clone(),
                }),
            }

            if let Some(parent) = folder.parent() {
                let listed = parent.children().filter(|c| c.index() == index).count();
                if listed != 1 {
                    violations.push(Violation::ChildLinkMismatch {
                        folder: index,
                        name: name.clone(),
                        parent: parent.index(),
                    });
                }
                if parent.org_id() != folder.org_id() {
                    violations.push(Violation::CrossOrganizationLink {
                        folder: index,
                        name: name.clone(),
                        parent: parent.index(),
                    });
                }
            }

            for child in folder.children() {
                if child.parent().map(|p| p.index()) != Some(index) {
                    violations.push(Violation::ChildLinkMismatch {
                        folder: child.index(),
                        name: child.name().to_string(),
                        parent: index,
                    });
                }
            }
        }

        violations
    }
}
