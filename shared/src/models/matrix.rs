//! Price matrix model
//!
//! A denormalized override table keyed by synthetic matrix keys (see
//! the engine's key builder). A populated band takes precedence over
//! catalog pricing; a key that is missing, or present with a zero band
//! value, falls back to the catalog — zero never means "free".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One matrix row: five height bands plus the detail drawing link for
/// the variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatrixPriceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h90: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h120: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2000: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2200: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2400: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MatrixPriceEntry {
    pub fn new(h90: i64, h120: i64, h2000: i64, h2200: i64, h2400: i64, url: &str) -> Self {
        Self {
            h90: Some(h90),
            h120: Some(h120),
            h2000: Some(h2000),
            h2200: Some(h2200),
            h2400: Some(h2400),
            url: Some(url.to_string()),
        }
    }
}

/// The admin-editable override table
pub type MatrixPrices = HashMap<String, MatrixPriceEntry>;
