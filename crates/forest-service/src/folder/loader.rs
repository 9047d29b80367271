//! Folder dataset loading.

use std::path::Path;

use tracing::{debug, info};

use forest_core::config::dataset::DatasetConfig;
use forest_core::error::{AppError, ErrorKind};
use forest_core::result::AppResult;
use forest_entity::folder::Folder;

use super::registry::FolderRegistry;

/// Read a JSON array of folder records.
pub async fn load_dataset(path: impl AsRef<Path>) -> AppResult<Vec<Folder>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read dataset '{}': {e}", path.display()),
            e,
        )
    })?;

    let folders: Vec<Folder> = serde_json::from_str(&raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid dataset '{}': {e}", path.display()),
            e,
        )
    })?;

    debug!(path = %path.display(), count = folders.len(), "Folder dataset read");
    Ok(folders)
}

/// Load the configured dataset into a registry.
pub async fn load_registry(config: &DatasetConfig) -> AppResult<FolderRegistry> {
    let folders = load_dataset(&config.path).await?;
    let registry = FolderRegistry::new(folders);

    info!(
        path = %config.path,
        folders = registry.len(),
        roots = registry.roots().count(),
        "Folder registry loaded"
    );
    Ok(registry)
}
