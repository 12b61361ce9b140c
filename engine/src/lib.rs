//! Pricing & configuration resolution engine for the Pitta door
//! configurator
//!
//! Pure computations over in-memory structures: no I/O, no blocking,
//! no suspension points. All functions take immutable snapshots of the
//! catalog ([`pitta_shared::models::AppSettings`]) and a configuration,
//! and return new values; mutation is confined to whichever single
//! owner drives the editing session.
//!
//! - [`pricing`] — height-band primitive, matrix key builder, total
//!   price resolver
//! - [`normalizer`] — the per-field transition function keeping a
//!   configuration valid at all times
//! - [`checker`] — pre-export deviation report over a saved list
//! - [`snapshot`] — the resolved view handed to document/render
//!   collaborators

pub mod checker;
pub mod normalizer;
pub mod pricing;
pub mod snapshot;

// Re-exports
pub use checker::{check_deviations, is_custom_size};
pub use normalizer::{FieldChange, Transition, TransitionNotice, apply_field_change};
pub use pricing::{build_matrix_key, compute_total_price, price_for_height};
pub use snapshot::ConfigSnapshot;
