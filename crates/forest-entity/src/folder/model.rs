//! Folder entity model.

use forest_core::types::OrganizationId;
use serde::{Deserialize, Serialize};

/// Separator between segments of a materialized folder path.
pub const PATH_SEPARATOR: char = '.';

/// A folder record as loaded from a dataset.
///
/// Names are immutable once set. Only `path` changes over the folder's
/// lifetime, and only through a relocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name.
    pub name: String,
    /// The organization (tenant) this folder belongs to.
    #[serde(alias = "orgId")]
    pub org_id: OrganizationId,
    /// Full materialized path (e.g., `alpha.bravo.charlie`).
    #[serde(alias = "paths")]
    pub path: String,
}

impl Folder {
    /// Create a folder record.
    pub fn new(name: impl Into<String>, org_id: OrganizationId, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            path: path.into(),
        }
    }

    /// Path of the parent encoded in this folder's own path, if any.
    ///
    /// `alpha.bravo.charlie` yields `alpha.bravo`; a single-segment path
    /// yields `None`.
    pub fn parent_path(&self) -> Option<&str> {
        self.path
            .rfind(PATH_SEPARATOR)
            .map(|idx| &self.path[..idx])
    }

    /// Path prefix shared by every descendant of this folder.
    pub fn descendant_prefix(&self) -> String {
        child_path(&self.path, "")
    }
}

/// Join a parent path and a child name.
pub fn child_path(parent_path: &str, name: &str) -> String {
    format!("{parent_path}{PATH_SEPARATOR}{name}")
}
