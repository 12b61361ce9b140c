//! Option catalog model
//!
//! A two-level tree of families and sub-families. A node either carries
//! `sub_options` (a group, non-selectable, price fields unused) or is a
//! selectable leaf. Catalog and configuration are edited independently,
//! so lookups never fail hard: an unknown id resolves to a sentinel
//! name and a missing entry prices as zero.

use serde::{Deserialize, Serialize};

/// Sentinel name for ids not present in the catalog
pub const UNKNOWN_NAME: &str = "不明";

/// One catalog node: a door family, color, handle, glass style, lock or
/// frame type, with height-banded prices and the storage-specific
/// width-banded fields.
///
/// Zero in an optional price field means "no value here, use the
/// fallback" — admin screens save untouched cells as 0, so zero is
/// indistinguishable from absent and never means "free".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    /// Price for H <= 200cm (standard)
    pub price: i64,
    /// Price for H <= 220cm
    pub price_h2200: i64,
    /// Price for H > 220cm
    pub price_h2400: i64,
    /// Price for H <= 90cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_h90: Option<i64>,
    /// Price for H <= 120cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_h120: Option<i64>,

    // === Storage width-band prices ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_w80: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_w120: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_w160: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_w200: Option<i64>,

    // === Handed (R-type) width-band prices for L/U storage shapes ===
    #[serde(rename = "priceW80_R", skip_serializing_if = "Option::is_none")]
    pub price_w80_r: Option<i64>,
    #[serde(rename = "priceW120_R", skip_serializing_if = "Option::is_none")]
    pub price_w120_r: Option<i64>,
    #[serde(rename = "priceW160_R", skip_serializing_if = "Option::is_none")]
    pub price_w160_r: Option<i64>,
    #[serde(rename = "priceW200_R", skip_serializing_if = "Option::is_none")]
    pub price_w200_r: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_options: Option<Vec<CatalogEntry>>,

    // === Detail drawing links ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url: Option<String>,
    #[serde(rename = "detailDrawingUrl_R", skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_r: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w80: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w120: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w160: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w200: Option<String>,
    #[serde(rename = "detailDrawingUrlW80_R", skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w80_r: Option<String>,
    #[serde(rename = "detailDrawingUrlW120_R", skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w120_r: Option<String>,
    #[serde(rename = "detailDrawingUrlW160_R", skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w160_r: Option<String>,
    #[serde(rename = "detailDrawingUrlW200_R", skip_serializing_if = "Option::is_none")]
    pub detail_drawing_url_w200_r: Option<String>,
}

impl CatalogEntry {
    /// Leaf entry with the three mandatory height bands.
    pub fn leaf(id: &str, name: &str, price: i64, price_h2200: i64, price_h2400: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            price_h2200,
            price_h2400,
            ..Default::default()
        }
    }

    /// Group node; price fields stay zero and unused.
    pub fn group(id: &str, name: &str, sub_options: Vec<CatalogEntry>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            sub_options: Some(sub_options),
            ..Default::default()
        }
    }

    pub fn is_group(&self) -> bool {
        self.sub_options.is_some()
    }
}

/// Treat zero (and negative, which must not occur but is tolerated) as
/// "no override".
pub fn positive(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v > 0)
}

/// Name lookup over a catalog tree: top-level entries first, then one
/// level of sub-options. Returns [`UNKNOWN_NAME`] when absent.
pub fn find_name<'a>(entries: &'a [CatalogEntry], id: &str) -> &'a str {
    for entry in entries {
        if entry.id == id {
            return &entry.name;
        }
        if let Some(subs) = &entry.sub_options
            && let Some(sub) = subs.iter().find(|s| s.id == id)
        {
            return &sub.name;
        }
    }
    UNKNOWN_NAME
}

/// Entry lookup, same search order as [`find_name`].
pub fn find_entry<'a>(entries: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    for entry in entries {
        if entry.id == id {
            return Some(entry);
        }
        if let Some(subs) = &entry.sub_options
            && let Some(sub) = subs.iter().find(|s| s.id == id)
        {
            return Some(sub);
        }
    }
    None
}
