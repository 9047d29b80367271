//! # forest-service
//!
//! In-memory folder forest: an arena registry of organization-scoped
//! folders, read-only hierarchy queries, and validated subtree relocation
//! that keeps parent/child links and dotted paths in step.
//!
//! Everything here is synchronous and single-owner. Callers that share a
//! registry across threads must serialize moves themselves.

pub mod folder;

pub use folder::{
    DescendantLookup, FolderIndex, FolderRef, FolderRegistry, FolderService, Mutator, Navigator,
    TreeBuilder, Violation,
};
