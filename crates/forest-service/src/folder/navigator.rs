//! Read-only hierarchy traversal.
//!
//! Descendant queries scan the organization's folders by path prefix and
//! never follow live links, so they terminate regardless of the shape of the
//! data. Ancestry questions walk parent links.

use forest_core::types::OrganizationId;
use forest_entity::folder::{PATH_SEPARATOR, child_path};

use super::registry::{FolderIndex, FolderRef, FolderRegistry};

/// Result of a descendant query, tagged with why it may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescendantLookup<'a> {
    /// The base folder has at least one descendant.
    Found(Vec<FolderRef<'a>>),
    /// The organization has no folders at all.
    NoFoldersForOrganization,
    /// No folder of the organization carries the requested name.
    FolderNotFound,
    /// The base folder exists but nothing lives beneath it.
    NoDescendants,
}

impl<'a> DescendantLookup<'a> {
    /// The descendants, empty for every outcome other than `Found`.
    pub fn into_folders(self) -> Vec<FolderRef<'a>> {
        match self {
            Self::Found(folders) => folders,
            Self::NoFoldersForOrganization | Self::FolderNotFound | Self::NoDescendants => {
                Vec::new()
            }
        }
    }

    /// Whether any descendants were found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Borrowing traversal helper over a [`FolderRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    registry: &'a FolderRegistry,
}

impl<'a> Navigator<'a> {
    /// Create a navigator over `registry`.
    pub fn new(registry: &'a FolderRegistry) -> Self {
        Self { registry }
    }

    /// All folders of `org_id` whose path lies beneath the named folder.
    ///
    /// The base folder is the first folder of the organization with this
    /// name. A folder is a descendant when its path starts with the base
    /// path followed by a separator, so `alpha` never claims `alphabet` and
    /// the base never matches itself. Results keep storage order.
    pub fn descendants_of(&self, org_id: OrganizationId, name: &str) -> DescendantLookup<'a> {
        let candidates = self.registry.folders_by_organization(org_id);
        if candidates.is_empty() {
            return DescendantLookup::NoFoldersForOrganization;
        }

        let base = match candidates.iter().find(|f| !name.is_empty() && f.name() == name) {
            Some(base) => *base,
            None => return DescendantLookup::FolderNotFound,
        };

        let prefix = base.folder().descendant_prefix();
        let found: Vec<FolderRef<'a>> = candidates
            .into_iter()
            .filter(|f| f.path().starts_with(&prefix))
            .collect();

        if found.is_empty() {
            DescendantLookup::NoDescendants
        } else {
            DescendantLookup::Found(found)
        }
    }

    /// Walk parent links from `start` (inclusive) towards the root.
    ///
    /// The walk takes at most one step per registered folder, so a corrupted
    /// parent cycle ends the iteration instead of spinning.
    pub fn lineage(&self, start: FolderIndex) -> Lineage<'a> {
        Lineage {
            registry: self.registry,
            next: self.registry.get(start).map(|f| f.index()),
            budget: self.registry.len(),
        }
    }

    /// Whether `ancestor` appears on the parent chain of `of`, `of` included.
    pub fn is_ancestor(&self, ancestor: FolderIndex, of: FolderIndex) -> bool {
        self.lineage(of).any(|index| index == ancestor)
    }

    /// Whether `folder`'s recorded path lies beneath `ancestor`'s within the
    /// same organization.
    ///
    /// Unlike [`Navigator::is_ancestor`] this ignores links, so it still
    /// answers for folders registered without them.
    pub fn lies_beneath(&self, ancestor: FolderRef<'_>, folder: FolderRef<'_>) -> bool {
        ancestor.org_id() == folder.org_id()
            && folder.path().starts_with(&ancestor.folder().descendant_prefix())
    }

    /// Ancestors of `index`, from its immediate parent up to the root.
    pub fn ancestors(&self, index: FolderIndex) -> Vec<FolderRef<'a>> {
        self.lineage(index)
            .skip(1)
            .filter_map(|ancestor| self.registry.get(ancestor))
            .collect()
    }

    /// Rebuild the dotted path of `index` from parent links and names.
    ///
    /// Returns `None` for an unknown handle or a parent chain that never
    /// reaches a root.
    pub fn path_from_links(&self, index: FolderIndex) -> Option<String> {
        let mut lineage = self.lineage(index);
        let chain: Vec<FolderIndex> = lineage.by_ref().collect();
        if chain.is_empty() || !lineage.reached_root() {
            return None;
        }

        let mut names = chain
            .iter()
            .rev()
            .filter_map(|&i| self.registry.get(i).map(|f| f.name()));
        let first = names.next()?.to_string();
        Some(names.fold(first, |path, name| child_path(&path, name)))
    }

    /// Number of segments in the folder's recorded path.
    pub fn depth(&self, index: FolderIndex) -> Option<usize> {
        self.registry
            .get(index)
            .map(|f| f.path().matches(PATH_SEPARATOR).count())
    }
}

/// Iterator over a parent chain. See [`Navigator::lineage`].
#[derive(Debug, Clone)]
pub struct Lineage<'a> {
    registry: &'a FolderRegistry,
    next: Option<FolderIndex>,
    budget: usize,
}

impl Lineage<'_> {
    /// Whether the walk ended at a root rather than by exhausting its budget.
    pub fn reached_root(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for Lineage<'_> {
    type Item = FolderIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.budget == 0 {
            return None;
        }
        let current = self.next?;
        self.budget -= 1;
        self.next = self.registry.slot(current).and_then(|slot| slot.parent);
        Some(current)
    }
}
