//! Engine settings: catalog collections, price matrix, rate tables
//!
//! A single immutable value threaded into every pure function. Admin
//! edits arrive as a partial [`SettingsOverride`] and are overlaid onto
//! the seeded defaults by id — never wholesale-replaced, so entries the
//! admin never touched keep shipping with current defaults.

use super::catalog::CatalogEntry;
use super::matrix::MatrixPrices;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All reference data the engine computes against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Flat base added to every quotation line, yen
    pub base_price: i64,
    /// Area-term rate, yen per cm² (zero in current price books but
    /// part of the pricing contract)
    pub price_per_sq_cm: i64,
    pub door_types: Vec<CatalogEntry>,
    pub frame_types: Vec<CatalogEntry>,
    pub colors: Vec<CatalogEntry>,
    pub handles: Vec<CatalogEntry>,
    pub glass_styles: Vec<CatalogEntry>,
    pub locks: Vec<CatalogEntry>,
    /// Shipping cost by prefecture, yen
    pub shipping_rates: HashMap<String, i64>,
    pub matrix_prices: MatrixPrices,
}

/// Partial catalog entry as saved by the admin screens. Only the
/// whitelisted numeric/string fields are overlaid; anything else in the
/// stored JSON is ignored.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryOverride {
    pub id: String,
    pub price: Option<i64>,
    pub price_h2200: Option<i64>,
    pub price_h2400: Option<i64>,
    pub price_h90: Option<i64>,
    pub price_h120: Option<i64>,
    pub price_w80: Option<i64>,
    pub price_w120: Option<i64>,
    pub price_w160: Option<i64>,
    pub price_w200: Option<i64>,
    #[serde(rename = "priceW80_R")]
    pub price_w80_r: Option<i64>,
    #[serde(rename = "priceW120_R")]
    pub price_w120_r: Option<i64>,
    #[serde(rename = "priceW160_R")]
    pub price_w160_r: Option<i64>,
    #[serde(rename = "priceW200_R")]
    pub price_w200_r: Option<i64>,
    pub detail_drawing_url: Option<String>,
    #[serde(rename = "detailDrawingUrl_R")]
    pub detail_drawing_url_r: Option<String>,
    pub detail_drawing_url_w80: Option<String>,
    pub detail_drawing_url_w120: Option<String>,
    pub detail_drawing_url_w160: Option<String>,
    pub detail_drawing_url_w200: Option<String>,
    #[serde(rename = "detailDrawingUrlW80_R")]
    pub detail_drawing_url_w80_r: Option<String>,
    #[serde(rename = "detailDrawingUrlW120_R")]
    pub detail_drawing_url_w120_r: Option<String>,
    #[serde(rename = "detailDrawingUrlW160_R")]
    pub detail_drawing_url_w160_r: Option<String>,
    #[serde(rename = "detailDrawingUrlW200_R")]
    pub detail_drawing_url_w200_r: Option<String>,
    pub sub_options: Option<Vec<CatalogEntryOverride>>,
}

/// Partial settings document as persisted by the admin store
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverride {
    pub door_types: Option<Vec<CatalogEntryOverride>>,
    pub frame_types: Option<Vec<CatalogEntryOverride>>,
    pub colors: Option<Vec<CatalogEntryOverride>>,
    pub handles: Option<Vec<CatalogEntryOverride>>,
    pub glass_styles: Option<Vec<CatalogEntryOverride>>,
    pub locks: Option<Vec<CatalogEntryOverride>>,
    pub shipping_rates: Option<HashMap<String, i64>>,
    pub matrix_prices: Option<MatrixPrices>,
}

/// Overlay an id-matched override list onto a default tree. Unknown ids
/// in the override are ignored; defaults with no override entry are
/// kept verbatim. Merging the same override twice yields the same
/// result as once.
pub fn merge_options(defaults: &[CatalogEntry], saved: &[CatalogEntryOverride]) -> Vec<CatalogEntry> {
    defaults
        .iter()
        .map(|def_item| {
            let Some(saved_item) = saved.iter().find(|s| s.id == def_item.id) else {
                return def_item.clone();
            };
            let mut merged = def_item.clone();

            if let Some(v) = saved_item.price {
                merged.price = v;
            }
            if let Some(v) = saved_item.price_h2200 {
                merged.price_h2200 = v;
            }
            if let Some(v) = saved_item.price_h2400 {
                merged.price_h2400 = v;
            }
            if saved_item.price_h90.is_some() {
                merged.price_h90 = saved_item.price_h90;
            }
            if saved_item.price_h120.is_some() {
                merged.price_h120 = saved_item.price_h120;
            }
            if saved_item.price_w80.is_some() {
                merged.price_w80 = saved_item.price_w80;
            }
            if saved_item.price_w120.is_some() {
                merged.price_w120 = saved_item.price_w120;
            }
            if saved_item.price_w160.is_some() {
                merged.price_w160 = saved_item.price_w160;
            }
            if saved_item.price_w200.is_some() {
                merged.price_w200 = saved_item.price_w200;
            }
            if saved_item.price_w80_r.is_some() {
                merged.price_w80_r = saved_item.price_w80_r;
            }
            if saved_item.price_w120_r.is_some() {
                merged.price_w120_r = saved_item.price_w120_r;
            }
            if saved_item.price_w160_r.is_some() {
                merged.price_w160_r = saved_item.price_w160_r;
            }
            if saved_item.price_w200_r.is_some() {
                merged.price_w200_r = saved_item.price_w200_r;
            }
            if saved_item.detail_drawing_url.is_some() {
                merged.detail_drawing_url = saved_item.detail_drawing_url.clone();
            }
            if saved_item.detail_drawing_url_r.is_some() {
                merged.detail_drawing_url_r = saved_item.detail_drawing_url_r.clone();
            }
            if saved_item.detail_drawing_url_w80.is_some() {
                merged.detail_drawing_url_w80 = saved_item.detail_drawing_url_w80.clone();
            }
            if saved_item.detail_drawing_url_w120.is_some() {
                merged.detail_drawing_url_w120 = saved_item.detail_drawing_url_w120.clone();
            }
            if saved_item.detail_drawing_url_w160.is_some() {
                merged.detail_drawing_url_w160 = saved_item.detail_drawing_url_w160.clone();
            }
            if saved_item.detail_drawing_url_w200.is_some() {
                merged.detail_drawing_url_w200 = saved_item.detail_drawing_url_w200.clone();
            }
            if saved_item.detail_drawing_url_w80_r.is_some() {
                merged.detail_drawing_url_w80_r = saved_item.detail_drawing_url_w80_r.clone();
            }
            if saved_item.detail_drawing_url_w120_r.is_some() {
                merged.detail_drawing_url_w120_r = saved_item.detail_drawing_url_w120_r.clone();
            }
            if saved_item.detail_drawing_url_w160_r.is_some() {
                merged.detail_drawing_url_w160_r = saved_item.detail_drawing_url_w160_r.clone();
            }
            if saved_item.detail_drawing_url_w200_r.is_some() {
                merged.detail_drawing_url_w200_r = saved_item.detail_drawing_url_w200_r.clone();
            }

            if let Some(def_subs) = &def_item.sub_options {
                let saved_subs = saved_item.sub_options.as_deref().unwrap_or(&[]);
                merged.sub_options = Some(merge_options(def_subs, saved_subs));
            }

            merged
        })
        .collect()
}

impl AppSettings {
    /// Overlay an admin override document. Base price and area rate are
    /// not admin-editable and always come from defaults; matrix rows
    /// and shipping rates merge by key replacement.
    pub fn merge_overrides(&self, saved: &SettingsOverride) -> AppSettings {
        let merge = |defaults: &[CatalogEntry], ovr: &Option<Vec<CatalogEntryOverride>>| match ovr {
            Some(list) => merge_options(defaults, list),
            None => defaults.to_vec(),
        };

        let mut shipping_rates = self.shipping_rates.clone();
        if let Some(saved_rates) = &saved.shipping_rates {
            shipping_rates.extend(saved_rates.iter().map(|(k, v)| (k.clone(), *v)));
        }

        let mut matrix_prices = self.matrix_prices.clone();
        if let Some(saved_matrix) = &saved.matrix_prices {
            matrix_prices.extend(saved_matrix.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        AppSettings {
            base_price: self.base_price,
            price_per_sq_cm: self.price_per_sq_cm,
            door_types: merge(&self.door_types, &saved.door_types),
            frame_types: merge(&self.frame_types, &saved.frame_types),
            colors: merge(&self.colors, &saved.colors),
            handles: merge(&self.handles, &saved.handles),
            glass_styles: merge(&self.glass_styles, &saved.glass_styles),
            locks: merge(&self.locks, &saved.locks),
            shipping_rates,
            matrix_prices,
        }
    }

    /// Shipping cost for a prefecture, if the rate table knows it.
    pub fn shipping_rate_for(&self, prefecture: &str) -> Option<i64> {
        self.shipping_rates.get(prefecture).copied()
    }
}
