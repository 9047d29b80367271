//! Folder listing, descendant, and move commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use forest_core::error::AppError;
use forest_service::folder::{FolderRef, FolderService};

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Organization ID
    #[arg(short, long)]
    pub org: String,
}

/// Arguments for `descendants`
#[derive(Debug, Args)]
pub struct DescendantsArgs {
    /// Organization ID
    #[arg(short, long)]
    pub org: String,
    /// Folder name
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for `move`
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Folder to move
    #[arg(short, long)]
    pub name: String,
    /// New parent folder
    #[arg(short, long)]
    pub to: String,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Parent
    parent: String,
    /// Organization
    org_id: String,
}

impl From<FolderRef<'_>> for FolderRow {
    fn from(folder: FolderRef<'_>) -> Self {
        Self {
            name: folder.name().to_string(),
            path: folder.path().to_string(),
            parent: folder
                .parent()
                .map(|p| p.name().to_string())
                .unwrap_or_else(|| "-".to_string()),
            org_id: folder.org_id().to_string(),
        }
    }
}

fn rows(folders: Vec<FolderRef<'_>>) -> Vec<FolderRow> {
    folders.into_iter().map(FolderRow::from).collect()
}

/// Execute `list`
pub fn list(service: &FolderService, args: &ListArgs, format: OutputFormat) -> Result<(), AppError> {
    let org_id = super::parse_org_id(&args.org)?;
    output::print_list(&rows(service.folders_by_organization(org_id)), format);
    Ok(())
}

/// Execute `descendants`
pub fn descendants(
    service: &FolderService,
    args: &DescendantsArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let org_id = super::parse_org_id(&args.org)?;
    output::print_list(&rows(service.descendants_of(org_id, &args.name)), format);
    Ok(())
}

/// Execute `move`, then show the organization the folder now lives in
pub fn move_folder(
    service: &mut FolderService,
    args: &MoveArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    service.move_folder(&args.name, &args.to)?;

    let org_id = service
        .registry()
        .find_by_name(&args.name)
        .map(|f| f.org_id())
        .ok_or_else(|| AppError::internal(format!("Folder '{}' vanished after move", args.name)))?;

    if format == OutputFormat::Table {
        output::print_success(&format!("Moved '{}' under '{}'", args.name, args.to));
    }
    output::print_tree(&service.tree(Some(org_id)), format);
    Ok(())
}
