//! Arena-backed folder registry.
//!
//! The registry is the single owner of every [`Folder`]. Parent and child
//! relations are stored as [`FolderIndex`] handles into the arena, so the
//! flat list, the name index, and the parent/child graph all refer to the
//! same records without shared ownership.

use std::collections::HashMap;
use std::fmt;

use forest_core::error::AppError;
use forest_core::result::AppResult;
use forest_core::types::OrganizationId;
use forest_entity::folder::Folder;

use super::navigator::{DescendantLookup, Navigator};

/// Stable handle to a folder inside a [`FolderRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderIndex(usize);

impl FolderIndex {
    /// Position of the folder in the registry's storage order.
    pub fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for FolderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One arena entry: the record plus its structural links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) folder: Folder,
    pub(crate) parent: Option<FolderIndex>,
    pub(crate) children: Vec<FolderIndex>,
}

/// Holds every folder and the derived by-name and by-organization lookups.
///
/// Names and organizations never change after registration, so both lookup
/// tables are built once and stay valid across relocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderRegistry {
    slots: Vec<Slot>,
    /// First registered folder for each name, across all organizations.
    by_name: HashMap<String, FolderIndex>,
    /// Every folder of each organization, in storage order.
    by_org: HashMap<OrganizationId, Vec<FolderIndex>>,
}

impl FolderRegistry {
    /// Register folders in the given order and derive parent/child links
    /// from their paths.
    ///
    /// A folder is linked under the first folder of the same organization
    /// whose path equals its own path minus the last segment. Folders whose
    /// parent path matches nothing remain roots. Children are attached in
    /// storage order.
    pub fn new(folders: impl IntoIterator<Item = Folder>) -> Self {
        let mut builder = RegistryBuilder::new();
        for folder in folders {
            builder.push(folder);
        }
        let mut registry = builder.build();

        let mut by_path: HashMap<(OrganizationId, &str), FolderIndex> = HashMap::new();
        for (position, slot) in registry.slots.iter().enumerate() {
            by_path
                .entry((slot.folder.org_id, slot.folder.path.as_str()))
                .or_insert(FolderIndex(position));
        }

        let links: Vec<(FolderIndex, FolderIndex)> = registry
            .slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| {
                let parent_path = slot.folder.parent_path()?;
                let parent = by_path.get(&(slot.folder.org_id, parent_path))?;
                Some((FolderIndex(position), *parent))
            })
            .collect();

        for (child, parent) in links {
            registry.attach(child, parent);
        }
        registry
    }

    /// Start a registry whose links are wired explicitly rather than derived
    /// from paths.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Number of registered folders.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no folders are registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Look up a folder by handle.
    pub fn get(&self, index: FolderIndex) -> Option<FolderRef<'_>> {
        self.slots.get(index.0).map(|_| FolderRef {
            registry: self,
            index,
        })
    }

    /// Every folder, in storage order.
    pub fn all(&self) -> Vec<FolderRef<'_>> {
        self.iter().collect()
    }

    /// Iterate over every folder in storage order.
    pub fn iter(&self) -> impl Iterator<Item = FolderRef<'_>> {
        (0..self.slots.len()).map(move |position| FolderRef {
            registry: self,
            index: FolderIndex(position),
        })
    }

    /// Folders without a parent, in storage order.
    pub fn roots(&self) -> impl Iterator<Item = FolderRef<'_>> {
        self.iter().filter(|folder| folder.is_root())
    }

    /// First registered folder with this name, in any organization.
    pub fn find_by_name(&self, name: &str) -> Option<FolderRef<'_>> {
        self.by_name.get(name).and_then(|&index| self.get(index))
    }

    /// Every folder belonging to `org_id`, in storage order.
    ///
    /// Unknown identifiers (including the nil identifier, unless a folder
    /// was registered under it) yield an empty list.
    pub fn folders_by_organization(&self, org_id: OrganizationId) -> Vec<FolderRef<'_>> {
        self.by_org
            .get(&org_id)
            .map(|indexes| {
                indexes
                    .iter()
                    .map(|&index| FolderRef {
                        registry: self,
                        index,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Read-only hierarchy traversal over this registry.
    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(self)
    }

    /// All descendants of the named folder within an organization.
    pub fn descendants_of(&self, org_id: OrganizationId, name: &str) -> DescendantLookup<'_> {
        self.navigator().descendants_of(org_id, name)
    }

    pub(crate) fn slot(&self, index: FolderIndex) -> Option<&Slot> {
        self.slots.get(index.0)
    }

    pub(crate) fn slot_mut(&mut self, index: FolderIndex) -> Option<&mut Slot> {
        self.slots.get_mut(index.0)
    }

    /// Append `child` to `parent`'s children and point it at `parent`.
    ///
    /// Callers must have detached `child` and validated the link first.
    pub(crate) fn attach(&mut self, child: FolderIndex, parent: FolderIndex) {
        if let Some(slot) = self.slot_mut(child) {
            slot.parent = Some(parent);
        }
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(child);
        }
    }

    /// Sever `child` from its current parent, if it has one.
    ///
    /// Removes the first child entry with the same handle, so folders that
    /// share a name with a sibling are never confused.
    pub(crate) fn detach(&mut self, child: FolderIndex) -> Option<FolderIndex> {
        let parent = self.slot_mut(child)?.parent.take()?;
        if let Some(slot) = self.slot_mut(parent) {
            if let Some(position) = slot.children.iter().position(|&c| c == child) {
                slot.children.remove(position);
            }
        }
        Some(parent)
    }
}

/// Borrowed view of one registered folder.
#[derive(Clone, Copy)]
pub struct FolderRef<'a> {
    registry: &'a FolderRegistry,
    index: FolderIndex,
}

impl<'a> FolderRef<'a> {
    fn slot(&self) -> &'a Slot {
        // Handles are only minted for positions that exist, and the arena never shrinks.
        &self.registry.slots[self.index.0]
    }

    /// Arena handle of this folder.
    pub fn index(&self) -> FolderIndex {
        self.index
    }

    /// The underlying folder record.
    pub fn folder(&self) -> &'a Folder {
        &self.slot().folder
    }

    /// Folder name.
    pub fn name(&self) -> &'a str {
        &self.slot().folder.name
    }

    /// Owning organization.
    pub fn org_id(&self) -> OrganizationId {
        self.slot().folder.org_id
    }

    /// Materialized dotted path.
    pub fn path(&self) -> &'a str {
        &self.slot().folder.path
    }

    /// Whether the folder has no parent.
    pub fn is_root(&self) -> bool {
        self.slot().parent.is_none()
    }

    /// The parent folder, if any.
    pub fn parent(self) -> Option<FolderRef<'a>> {
        let registry = self.registry;
        self.slot()
            .parent
            .map(|index| FolderRef { registry, index })
    }

    /// Immediate children, in attachment order.
    pub fn children(self) -> impl Iterator<Item = FolderRef<'a>> {
        let registry = self.registry;
        self.slot()
            .children
            .iter()
            .map(move |&index| FolderRef { registry, index })
    }
}

impl PartialEq for FolderRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry) && self.index == other.index
    }
}

impl Eq for FolderRef<'_> {}

impl fmt::Debug for FolderRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderRef")
            .field("index", &self.index)
            .field("name", &self.name())
            .field("path", &self.path())
            .field("org_id", &self.org_id())
            .finish()
    }
}

/// Builds a registry whose parent/child links come from the loader rather
/// than from the folders' paths.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: FolderRegistry,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a folder at the end of storage order.
    pub fn push(&mut self, folder: Folder) -> FolderIndex {
        let registry = &mut self.registry;
        let index = FolderIndex(registry.slots.len());
        registry
            .by_name
            .entry(folder.name.clone())
            .or_insert(index);
        registry.by_org.entry(folder.org_id).or_default().push(index);
        registry.slots.push(Slot {
            folder,
            parent: None,
            children: Vec::new(),
        });
        index
    }

    /// Wire `child` under `parent`.
    ///
    /// Paths are taken as given; run
    /// [`FolderRegistry::check_consistency`] after building to confirm
    /// they agree with the links.
    pub fn link(&mut self, child: FolderIndex, parent: FolderIndex) -> AppResult<&mut Self> {
        let registry = &self.registry;
        let (Some(child_slot), Some(parent_slot)) = (registry.slot(child), registry.slot(parent))
        else {
            return Err(AppError::not_found(format!(
                "Cannot link {child} under {parent}: unknown folder handle"
            )));
        };

        if child_slot.parent.is_some() {
            return Err(AppError::conflict(format!(
                "Folder '{}' already has a parent",
                child_slot.folder.name
            )));
        }
        if child_slot.folder.org_id != parent_slot.folder.org_id {
            return Err(AppError::validation(format!(
                "Cannot link folder '{}' under '{}': different organizations",
                child_slot.folder.name, parent_slot.folder.name
            )));
        }
        if registry.navigator().is_ancestor(child, parent) {
            return Err(AppError::validation(format!(
                "Cannot link folder '{}' under '{}': would create a cycle",
                child_slot.folder.name, parent_slot.folder.name
            )));
        }

        self.registry.attach(child, parent);
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> FolderRegistry {
        self.registry
    }
}
