//! Validated subtree relocation.

use forest_core::error::MoveError;
use forest_entity::folder::child_path;

use super::registry::{FolderIndex, FolderRef, FolderRegistry};

/// A relocation that has passed every check and may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// The folder being moved.
    pub source: FolderIndex,
    /// Its new parent.
    pub destination: FolderIndex,
}

/// What an applied relocation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The folder that was moved.
    pub source: FolderIndex,
    /// Its new parent.
    pub destination: FolderIndex,
    /// Its parent before the move, `None` if it was a root.
    pub previous_parent: Option<FolderIndex>,
    /// Number of folders whose path was rewritten (the whole moved subtree).
    pub rewritten: usize,
}

/// Applies relocations to a registry.
///
/// Validation runs to completion before anything is touched, so a rejected
/// move leaves the registry exactly as it was.
#[derive(Debug)]
pub struct Mutator<'a> {
    registry: &'a mut FolderRegistry,
}

impl<'a> Mutator<'a> {
    /// Create a mutator over `registry`.
    pub fn new(registry: &'a mut FolderRegistry) -> Self {
        Self { registry }
    }

    /// Resolve and check a relocation without applying it.
    ///
    /// Names resolve against every registered folder regardless of
    /// organization; the first registered match wins. Checks run in a fixed
    /// order and the first failure is returned. A destination counts as
    /// inside the source's subtree when either the parent links or the
    /// recorded paths say so.
    pub fn plan(&self, name: &str, destination: &str) -> Result<MovePlan, MoveError> {
        let registry: &FolderRegistry = &*self.registry;

        let source = registry
            .find_by_name(name)
            .ok_or_else(|| MoveError::SourceNotFound(name.to_string()))?;
        let target = registry
            .find_by_name(destination)
            .ok_or_else(|| MoveError::DestinationNotFound(destination.to_string()))?;

        if source == target {
            return Err(MoveError::MoveToSelf(name.to_string()));
        }
        let nav = registry.navigator();
        if nav.is_ancestor(source.index(), target.index()) || nav.lies_beneath(source, target) {
            return Err(MoveError::MoveIntoOwnDescendant(name.to_string()));
        }
        if source.org_id() != target.org_id() {
            return Err(MoveError::CrossOrganizationMove(name.to_string()));
        }

        Ok(MovePlan {
            source: source.index(),
            destination: target.index(),
        })
    }

    /// Validate and apply a relocation of `name` under `destination`.
    pub fn move_folder(self, name: &str, destination: &str) -> Result<MoveReport, MoveError> {
        let plan = self.plan(name, destination)?;
        Ok(self.apply(plan))
    }

    /// Relink the source under the destination and rewrite the subtree's paths.
    fn apply(self, plan: MovePlan) -> MoveReport {
        let previous_parent = self.registry.detach(plan.source);
        self.registry.attach(plan.source, plan.destination);

        let base = self
            .registry
            .slot(plan.destination)
            .map(|slot| slot.folder.path.clone())
            .unwrap_or_default();
        let rewritten = self.rewrite_paths(plan.source, base);

        MoveReport {
            source: plan.source,
            destination: plan.destination,
            previous_parent,
            rewritten,
        }
    }

    /// Recompute `path` for `root` and everything beneath it, parents first.
    fn rewrite_paths(self, root: FolderIndex, parent_path: String) -> usize {
        let mut pending = vec![(root, parent_path)];
        let mut rewritten = 0;

        while let Some((index, parent_path)) = pending.pop() {
            let Some(slot) = self.registry.slot_mut(index) else {
                continue;
            };
            slot.folder.path = child_path(&parent_path, &slot.folder.name);
            rewritten += 1;

            let path = &slot.folder.path;
            pending.extend(
                slot.children
                    .iter()
                    .rev()
                    .map(|&child| (child, path.clone())),
            );
        }

        rewritten
    }
}

impl FolderRegistry {
    /// Move the named folder, with its subtree, under `destination`.
    ///
    /// Returns the full folder collection in storage order on success.
    pub fn move_folder(
        &mut self,
        name: &str,
        destination: &str,
    ) -> Result<Vec<FolderRef<'_>>, MoveError> {
        Mutator::new(self).move_folder(name, destination)?;
        Ok(self.all())
    }
}
