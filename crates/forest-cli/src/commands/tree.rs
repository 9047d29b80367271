//! Tree dump and consistency commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use forest_core::error::AppError;
use forest_service::folder::{FolderService, Violation};

/// Arguments for `tree`
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Only show this organization's folders
    #[arg(short, long)]
    pub org: Option<String>,
}

/// Violation display row
#[derive(Debug, Serialize, Tabled)]
struct ViolationRow {
    /// Folder position
    folder: String,
    /// Description
    problem: String,
}

impl From<&Violation> for ViolationRow {
    fn from(violation: &Violation) -> Self {
        let folder = match violation {
            Violation::PathMismatch { folder, .. }
            | Violation::ChildLinkMismatch { folder, .. }
            | Violation::Cycle { folder, .. }
            | Violation::CrossOrganizationLink { folder, .. } => folder.to_string(),
        };
        Self {
            folder,
            problem: violation.to_string(),
        }
    }
}

/// Execute `tree`
pub fn tree(service: &FolderService, args: &TreeArgs, format: OutputFormat) -> Result<(), AppError> {
    let org_id = args
        .org
        .as_deref()
        .map(super::parse_org_id)
        .transpose()?;
    output::print_tree(&service.tree(org_id), format);
    Ok(())
}

/// Execute `verify`
pub fn verify(service: &FolderService, format: OutputFormat) -> Result<(), AppError> {
    let violations = service.verify();
    let rows: Vec<ViolationRow> = violations.iter().map(ViolationRow::from).collect();

    if rows.is_empty() {
        match format {
            OutputFormat::Table => output::print_success(&format!(
                "{} folder(s), no consistency violations",
                service.registry().len()
            )),
            OutputFormat::Json => output::print_list(&rows, format),
        }
        return Ok(());
    }

    output::print_list(&rows, format);
    Err(AppError::validation(format!(
        "{} consistency violation(s) found",
        violations.len()
    )))
}
