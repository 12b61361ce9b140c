//! Total price resolution
//!
//! Matrix-first: when the configuration maps onto a priced matrix
//! variant, that cell already includes the frame and lock premiums and
//! only color, handle, glass and the area term are added on top. When
//! no matrix cell applies (no key, missing row, or zero cell) the
//! resolver falls back to the per-family catalog prices and adds every
//! premium separately.
//!
//! All price arithmetic is whole yen. The area term is the only place
//! fractional values appear and it is rounded half-away-from-zero.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use pitta_shared::models::{
    AppSettings, CatalogEntry, DoorConfiguration, DoorType, FamilyCategory, HingeSide, find_entry,
    positive,
};

use super::band::{matrix_price_for_height, price_for_height};
use super::matrix_key::build_matrix_key;

/// Resolve the quoted price of a single configuration, in yen.
///
/// Never fails: unknown catalog ids and missing matrix rows price as
/// zero and the result degrades to `base_price`.
pub fn compute_total_price(config: &DoorConfiguration, settings: &AppSettings) -> i64 {
    let door_entry = find_entry(&settings.door_types, config.door_type.as_str());
    let color_price = price_for_height(
        find_entry(&settings.colors, config.color.as_str()),
        config.height,
    );
    let handle_price = price_for_height(
        find_entry(&settings.handles, config.handle.as_str()),
        config.height,
    );
    let glass_price = price_for_height(
        find_entry(&settings.glass_styles, config.glass_style.as_str()),
        config.height,
    );
    let area_price = area_term(config.width, config.height, settings.price_per_sq_cm);

    let key = build_matrix_key(config);
    if !key.is_empty()
        && let Some(row) = settings.matrix_prices.get(&key)
        && let Some(matrix_price) = matrix_price_for_height(row, config.height)
    {
        // frame and lock premiums are baked into the matrix cell
        debug!(%key, matrix_price, "matrix price hit");
        return settings.base_price
            + matrix_price
            + color_price
            + handle_price
            + glass_price
            + area_price;
    }

    let traits = config.door_type.traits();

    // Materials are unit-priced, nothing else applies.
    if traits.category == FamilyCategory::Material {
        let unit = door_entry.map(|e| e.price).unwrap_or(0);
        let count = if config.count > 0 { i64::from(config.count) } else { 1 };
        return settings.base_price + unit * count;
    }

    let door_price = if traits.category == FamilyCategory::Storage {
        storage_width_price(door_entry, config)
    } else {
        price_for_height(door_entry, config.height)
    };

    // Storage units ship with their frame; no separate frame premium.
    let frame_price = if traits.category == FamilyCategory::Storage {
        0
    } else {
        price_for_height(
            find_entry(&settings.frame_types, config.frame_type.as_str()),
            config.height,
        )
    };
    let lock_price = price_for_height(
        find_entry(&settings.locks, config.lock.as_str()),
        config.height,
    );

    debug!(
        door_type = %config.door_type,
        door_price,
        frame_price,
        "catalog fallback"
    );

    settings.base_price
        + door_price
        + frame_price
        + color_price
        + handle_price
        + glass_price
        + lock_price
        + area_price
}

/// Width-band price for storage units. L and U shapes hinged on the
/// right prefer the handed (`_R`) price when one is set.
fn storage_width_price(entry: Option<&CatalogEntry>, config: &DoorConfiguration) -> i64 {
    let Some(entry) = entry else {
        return 0;
    };
    let handed = matches!(
        config.door_type,
        DoorType::Storage200L | DoorType::Storage200U
    ) && config.hinge_side == HingeSide::Right;

    let banded = |plain: Option<i64>, right: Option<i64>| {
        if handed && let Some(p) = positive(right) {
            Some(p)
        } else {
            plain
        }
    };

    match config.width {
        w if w == 80.0 => banded(entry.price_w80, entry.price_w80_r).unwrap_or(entry.price),
        w if w == 120.0 => banded(entry.price_w120, entry.price_w120_r).unwrap_or(0),
        w if w == 160.0 => banded(entry.price_w160, entry.price_w160_r).unwrap_or(0),
        w if w == 200.0 => banded(entry.price_w200, entry.price_w200_r).unwrap_or(0),
        _ => entry.price,
    }
}

fn area_term(width: f64, height: f64, rate: i64) -> i64 {
    if rate == 0 {
        return 0;
    }
    let area = Decimal::from_f64(width * height).unwrap_or_default();
    (area * Decimal::from(rate))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
