//! Shared folder fixtures for integration tests.

#![allow(dead_code)]

use folder_forest::{Folder, FolderIndex, FolderRef, FolderRegistry, OrganizationId};

/// Two organizations and a registry built over them.
pub struct Fixture {
    pub registry: FolderRegistry,
    pub org1: OrganizationId,
    pub org2: OrganizationId,
}

impl Fixture {
    /// The seven-folder forest used by the move tests, wired by the loader:
    ///
    /// ```text
    /// org1: alpha ─┬─ bravo ── charlie      golf
    ///              └─ delta ── echo
    /// org2: foxtrot
    /// ```
    pub fn wired() -> Self {
        let org1 = OrganizationId::new();
        let org2 = OrganizationId::new();

        let mut builder = FolderRegistry::builder();
        let alpha = builder.push(Folder::new("alpha", org1, "alpha"));
        let bravo = builder.push(Folder::new("bravo", org1, "alpha.bravo"));
        let charlie = builder.push(Folder::new("charlie", org1, "alpha.bravo.charlie"));
        let delta = builder.push(Folder::new("delta", org1, "alpha.delta"));
        let echo = builder.push(Folder::new("echo", org1, "alpha.delta.echo"));
        builder.push(Folder::new("foxtrot", org2, "foxtrot"));
        builder.push(Folder::new("golf", org1, "golf"));

        builder
            .link(bravo, alpha)
            .and_then(|b| b.link(delta, alpha))
            .and_then(|b| b.link(charlie, bravo))
            .and_then(|b| b.link(echo, delta))
            .expect("fixture links are valid");

        Self {
            registry: builder.build(),
            org1,
            org2,
        }
    }

    /// Handle of the first folder with this name.
    pub fn index(&self, name: &str) -> FolderIndex {
        self.registry
            .find_by_name(name)
            .unwrap_or_else(|| panic!("fixture has no folder '{name}'"))
            .index()
    }

    /// Folder view by name.
    pub fn folder(&self, name: &str) -> FolderRef<'_> {
        self.registry.get(self.index(name)).unwrap()
    }

    /// Names of a folder's children, in order.
    pub fn children_of(&self, name: &str) -> Vec<&str> {
        self.folder(name).children().map(|c| c.name()).collect()
    }

    /// Name of a folder's parent.
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.folder(name).parent().map(|p| p.name())
    }
}

/// Names of the given folders, in order.
pub fn names<'a>(folders: &[FolderRef<'a>]) -> Vec<&'a str> {
    folders.iter().map(|f| f.name()).collect()
}

/// `(name, path)` pairs of the given folders, in order.
pub fn name_paths<'a>(folders: &[FolderRef<'a>]) -> Vec<(&'a str, &'a str)> {
    folders.iter().map(|f| (f.name(), f.path())).collect()
}

/// Assert that every folder's path equals the names along its parent chain.
pub fn assert_paths_follow_links(registry: &FolderRegistry) {
    let nav = registry.navigator();
    for folder in registry.iter() {
        assert_eq!(
            nav.path_from_links(folder.index()).as_deref(),
            Some(folder.path()),
            "path of '{}' drifted from its parent links",
            folder.name()
        );
    }
    assert!(registry.check_consistency().is_empty());
}
