//! # forest-entity
//!
//! Domain entity models for the folder forest.

pub mod folder;
