//! Folder operations exposed to callers, with outcome logging.

use tracing::{debug, info, warn};

use forest_core::error::MoveError;
use forest_core::types::OrganizationId;
use forest_entity::folder::FolderTree;

use super::consistency::Violation;
use super::mutator::Mutator;
use super::navigator::DescendantLookup;
use super::registry::{FolderRef, FolderRegistry};
use super::tree::TreeBuilder;

/// Owns the folder registry and serves list, descendant, and move requests.
///
/// The registry and its helpers return outcomes; this service is where they
/// are turned into log lines.
#[derive(Debug, Clone, Default)]
pub struct FolderService {
    /// The folder registry.
    registry: FolderRegistry,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(registry: FolderRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &FolderRegistry {
        &self.registry
    }

    /// Lists every folder of an organization.
    pub fn folders_by_organization(&self, org_id: OrganizationId) -> Vec<FolderRef<'_>> {
        let folders = self.registry.folders_by_organization(org_id);
        debug!(org_id = %org_id, count = folders.len(), "Listed folders by organization");
        folders
    }

    /// Lists every descendant of the named folder within an organization.
    ///
    /// Missing organizations and folders yield an empty list and a warning,
    /// never an error.
    pub fn descendants_of(&self, org_id: OrganizationId, name: &str) -> Vec<FolderRef<'_>> {
        let lookup = self.registry.descendants_of(org_id, name);
        match &lookup {
            DescendantLookup::NoFoldersForOrganization => {
                warn!(org_id = %org_id, "No folders found for organization");
            }
            DescendantLookup::FolderNotFound => {
                warn!(org_id = %org_id, folder = %name, "Folder does not exist in organization");
            }
            DescendantLookup::NoDescendants => {
                info!(org_id = %org_id, folder = %name, "Folder has no child folders");
            }
            DescendantLookup::Found(folders) => {
                debug!(org_id = %org_id, folder = %name, count = folders.len(), "Resolved descendants");
            }
        }
        lookup.into_folders()
    }

    /// Moves a folder and its subtree under a new parent.
    pub fn move_folder(
        &mut self,
        name: &str,
        destination: &str,
    ) -> Result<Vec<FolderRef<'_>>, MoveError> {
        match Mutator::new(&mut self.registry).move_folder(name, destination) {
            Ok(report) => {
                info!(
                    folder = %name,
                    destination = %destination,
                    rewritten = report.rewritten,
                    "Folder moved"
                );
                Ok(self.registry.all())
            }
            Err(e) => {
                warn!(folder = %name, destination = %destination, error = %e, "Folder move rejected");
                Err(e)
            }
        }
    }

    /// Snapshot of the forest for display.
    pub fn tree(&self, org_id: Option<OrganizationId>) -> FolderTree {
        TreeBuilder::new(&self.registry).build(org_id)
    }

    /// Checks every hierarchy invariant.
    pub fn verify(&self) -> Vec<Violation> {
        let violations = self.registry.check_consistency();
        if violations.is_empty() {
            debug!(folders = self.registry.len(), "Folder forest is consistent");
        } else {
            warn!(violations = violations.len(), "Folder forest is inconsistent");
        }
        violations
    }
}
