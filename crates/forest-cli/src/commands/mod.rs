//! CLI command definitions and dispatch.

pub mod folder;
pub mod tree;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use forest_core::config::AppConfig;
use forest_core::error::AppError;
use forest_core::types::OrganizationId;
use forest_service::folder::{FolderService, load_registry};

/// Folder forest: list, query, and relocate organization-scoped folders
#[derive(Debug, Parser)]
#[command(name = "forest", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Folder dataset to load instead of the configured one
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every folder of an organization
    List(folder::ListArgs),
    /// List every descendant of a folder
    Descendants(folder::DescendantsArgs),
    /// Move a folder and its subtree under another folder
    Move(folder::MoveArgs),
    /// Print the folder forest
    Tree(tree::TreeArgs),
    /// Check parent links and paths for consistency
    Verify,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, mut config: AppConfig) -> Result<(), AppError> {
        if let Some(dataset) = &self.dataset {
            config.dataset.path = dataset.clone();
        }

        let registry = load_registry(&config.dataset).await?;
        let mut service = FolderService::new(registry);

        match &self.command {
            Commands::List(args) => folder::list(&service, args, self.format),
            Commands::Descendants(args) => folder::descendants(&service, args, self.format),
            Commands::Move(args) => folder::move_folder(&mut service, args, self.format),
            Commands::Tree(args) => tree::tree(&service, args, self.format),
            Commands::Verify => tree::verify(&service, self.format),
        }
    }
}

/// Helper: parse an organization ID argument
pub fn parse_org_id(raw: &str) -> Result<OrganizationId, AppError> {
    raw.parse()
        .map_err(|e| AppError::validation(format!("Invalid organization ID '{}': {}", raw, e)))
}
