//! Folder registry, hierarchy traversal, relocation, and tree dumps.

pub mod consistency;
pub mod loader;
pub mod mutator;
pub mod navigator;
pub mod registry;
pub mod service;
pub mod tree;

pub use consistency::Violation;
pub use loader::{load_dataset, load_registry};
pub use mutator::{MovePlan, MoveReport, Mutator};
pub use navigator::{DescendantLookup, Lineage, Navigator};
pub use registry::{FolderIndex, FolderRef, FolderRegistry, RegistryBuilder};
pub use service::FolderService;
pub use tree::{TreeBuilder, render_tree};
