//! Shared types for the Pitta door configurator
//!
//! Data models used across the engine and its consumers (document
//! generation, rendering): the option catalog, door configurations,
//! the price matrix, and the persisted project bundle.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use serde::{Deserialize, Serialize};
