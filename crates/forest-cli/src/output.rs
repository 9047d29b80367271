//! Table, tree, and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use forest_entity::folder::FolderTree;
use forest_service::folder::render_tree;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a folder tree in the selected format
pub fn print_tree(tree: &FolderTree, format: OutputFormat) {
    match format {
        OutputFormat::Table => print!("{}", render_tree(tree)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(tree).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
