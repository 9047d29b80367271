//! # folder-forest
//!
//! Facade over the folder forest crates. Embedders depend on this crate and
//! get the folder record, the registry and its operations, and the error
//! types from one place. The `forest` binary lives in `forest-cli`.

pub use forest_core::error::{AppError, ErrorKind, MoveError};
pub use forest_core::result::AppResult;
pub use forest_core::types::OrganizationId;
pub use forest_entity::folder::{Folder, FolderTree};
pub use forest_service::folder::{
    DescendantLookup, FolderIndex, FolderRef, FolderRegistry, FolderService, RegistryBuilder,
    Violation,
};
