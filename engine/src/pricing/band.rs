//! Height-band price selection
//!
//! The single pricing primitive reused by every component. Catalog
//! entries price in four tiers (≤90 / ≤120 / ≤200 / ≤220 / above, with
//! the two low tiers only where the entry defines them); matrix rows
//! split the ≤200 tier into an explicit h2000 band, making five.

use pitta_shared::models::{CatalogEntry, MatrixPriceEntry, positive};

/// Resolve a catalog entry's price for a height in cm.
///
/// The low bands apply only when the entry defines them; a missing
/// entry prices as zero (catalog and configuration drift independently,
/// so this is a lookup miss, not an error).
pub fn price_for_height(entry: Option<&CatalogEntry>, height: f64) -> i64 {
    let Some(entry) = entry else {
        return 0;
    };
    if let Some(p) = entry.price_h90
        && height <= 90.0
    {
        return p;
    }
    if let Some(p) = entry.price_h120
        && height <= 120.0
    {
        return p;
    }
    if height <= 200.0 {
        entry.price
    } else if height <= 220.0 {
        entry.price_h2200
    } else {
        entry.price_h2400
    }
}

/// The five matrix height bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixBand {
    H90,
    H120,
    H2000,
    H2200,
    H2400,
}

/// Band selection for matrix rows. Unlike the catalog tiers the two low
/// bands always exist as fields (possibly zero, meaning fallback).
pub fn matrix_band(height: f64) -> MatrixBand {
    if height <= 90.0 {
        MatrixBand::H90
    } else if height <= 120.0 {
        MatrixBand::H120
    } else if height <= 200.0 {
        MatrixBand::H2000
    } else if height <= 220.0 {
        MatrixBand::H2200
    } else {
        MatrixBand::H2400
    }
}

/// Matrix price for a height, if the row covers it with a positive
/// value. Zero and absent both mean "use the catalog".
pub fn matrix_price_for_height(entry: &MatrixPriceEntry, height: f64) -> Option<i64> {
    let value = match matrix_band(height) {
        MatrixBand::H90 => entry.h90,
        MatrixBand::H120 => entry.h120,
        MatrixBand::H2000 => entry.h2000,
        MatrixBand::H2200 => entry.h2200,
        MatrixBand::H2400 => entry.h2400,
    };
    positive(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> CatalogEntry {
        CatalogEntry::leaf("double", "両開き戸", 20400, 22000, 22900)
    }

    fn make_entry_with_low_bands() -> CatalogEntry {
        CatalogEntry {
            price_h90: Some(12000),
            price_h120: Some(13800),
            ..make_entry()
        }
    }

    #[test]
    fn test_band_edges_without_low_tiers() {
        let e = make_entry();
        // no h90/h120 defined: everything at or below 200 is standard
        assert_eq!(price_for_height(Some(&e), 90.0), 20400);
        assert_eq!(price_for_height(Some(&e), 120.0), 20400);
        assert_eq!(price_for_height(Some(&e), 200.0), 20400);
        assert_eq!(price_for_height(Some(&e), 201.0), 22000);
        assert_eq!(price_for_height(Some(&e), 220.0), 22000);
        assert_eq!(price_for_height(Some(&e), 221.0), 22900);
        assert_eq!(price_for_height(Some(&e), 240.0), 22900);
    }

    #[test]
    fn test_band_edges_with_low_tiers() {
        let e = make_entry_with_low_bands();
        assert_eq!(price_for_height(Some(&e), 89.0), 12000);
        assert_eq!(price_for_height(Some(&e), 90.0), 12000);
        assert_eq!(price_for_height(Some(&e), 91.0), 13800);
        assert_eq!(price_for_height(Some(&e), 120.0), 13800);
        assert_eq!(price_for_height(Some(&e), 121.0), 20400);
    }

    #[test]
    fn test_missing_entry_prices_zero() {
        assert_eq!(price_for_height(None, 220.0), 0);
    }

    #[test]
    fn test_matrix_band_is_five_way() {
        assert_eq!(matrix_band(90.0), MatrixBand::H90);
        assert_eq!(matrix_band(120.0), MatrixBand::H120);
        assert_eq!(matrix_band(200.0), MatrixBand::H2000);
        assert_eq!(matrix_band(220.0), MatrixBand::H2200);
        assert_eq!(matrix_band(221.0), MatrixBand::H2400);
    }

    #[test]
    fn test_matrix_zero_band_means_fallback() {
        let entry = MatrixPriceEntry::new(0, 0, 24700, 27300, 28200, "");
        assert_eq!(matrix_price_for_height(&entry, 90.0), None);
        assert_eq!(matrix_price_for_height(&entry, 200.0), Some(24700));
        assert_eq!(matrix_price_for_height(&entry, 220.0), Some(27300));
        assert_eq!(matrix_price_for_height(&entry, 240.0), Some(28200));
    }
}
