//! Data models
//!
//! Shared between the engine and its document/rendering consumers.
//! Wire names match the legacy project-file format (camelCase keys,
//! kebab-case option ids), so bundles written by earlier releases
//! still import.

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod matrix;
pub mod project;
pub mod settings;

// Re-exports
pub use catalog::*;
pub use config::*;
pub use matrix::*;
pub use project::*;
pub use settings::*;
