//! # forest-core
//!
//! Core crate for the folder forest. Contains configuration schemas,
//! typed identifiers, and the unified error system shared by the service
//! layer and the `forest` binary.
//!
//! This crate has **no** internal dependencies on other forest crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, MoveError};
pub use result::AppResult;
