//! Matrix key builder
//!
//! Maps a configuration onto the synthetic key of its priced variant in
//! the override matrix. The key vocabulary is a stable wire format:
//! persisted admin matrices are keyed by these strings, so any change
//! to family identifiers must migrate every stored table.
//!
//! Total and pure: every configuration yields either a key from the
//! enumerable vocabulary below or `""` (meaning "not matrix-priced,
//! use the catalog").

use pitta_shared::models::{DoorConfiguration, DoorType, FrameType, HingeSide, LockId};

/// Outset sliders wider than this take the corner-installation panel.
/// A policy boundary from the price book, not a derived geometric fact.
pub const CORNER_WIDTH_THRESHOLD: f64 = 77.8;

/// Build the matrix lookup key for a configuration.
///
/// Storage and material families are never matrix-priced and yield
/// `""`. Families with a structurally fixed frame are pinned to the
/// `3w` token regardless of the configured frame type.
pub fn build_matrix_key(config: &DoorConfiguration) -> String {
    let door_type = config.door_type;
    if door_type.is_storage() || door_type.is_material() {
        return String::new();
    }

    let frame_key = if door_type.traits().pinned_three_way_key {
        "3w"
    } else if config.frame_type == FrameType::TwoWay {
        "2w"
    } else {
        "3w"
    };

    let lock_key = if config.lock == LockId::DisplayLock { "l" } else { "nl" };

    match door_type {
        DoorType::Hinged | DoorType::SlidingInset => {
            format!("{door_type}_{frame_key}_{lock_key}")
        }

        DoorType::SlidingOutset => {
            if config.width > CORNER_WIDTH_THRESHOLD {
                let corner_lock = if config.lock == LockId::DisplayLock { "cl" } else { "c" };
                format!("sliding-outset_{frame_key}_{corner_lock}")
            } else {
                format!("sliding-outset_{frame_key}_{lock_key}")
            }
        }

        DoorType::SlidingHikikomi => "sliding-hikikomi_3w_nl".to_string(),

        DoorType::Sliding2 | DoorType::Sliding3 | DoorType::Sliding4 => {
            format!("{door_type}_3w_nl")
        }

        DoorType::SlidingKata2 | DoorType::SlidingKata3 => {
            let side_key = if config.hinge_side == HingeSide::Left { "L" } else { "R" };
            format!("{door_type}_{side_key}")
        }

        DoorType::Double => match config.width {
            w if w == 73.5 => "double_w73.5".to_string(),
            w if w == 120.0 => "double_w120".to_string(),
            _ => String::new(),
        },

        DoorType::Folding2 | DoorType::Folding4 | DoorType::Folding6 | DoorType::Folding8 => {
            format!("{door_type}_3w_nl")
        }

        DoorType::HingedStorage => "hinged-storage_3w_nl".to_string(),

        _ => String::new(),
    }
}

/// One row of the admin matrix screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixRow {
    pub key: &'static str,
    pub group: &'static str,
    pub sub_group: &'static str,
    pub variant: &'static str,
}

const fn row(
    key: &'static str,
    group: &'static str,
    sub_group: &'static str,
    variant: &'static str,
) -> MatrixRow {
    MatrixRow { key, group, sub_group, variant }
}

/// The complete, versioned matrix key vocabulary, in admin screen
/// order. Every reachable output of [`build_matrix_key`] other than
/// `""` appears here; used to validate admin-edited matrices.
pub const MATRIX_ROWS: &[MatrixRow] = &[
    row("hinged_2w_nl", "片開き", "", "2方枠"),
    row("hinged_2w_l", "片開き", "", "2方枠 表示錠付き"),
    row("hinged_3w_nl", "片開き", "", "3方枠"),
    row("hinged_3w_l", "片開き", "", "3方枠 表示錠付き"),
    row("sliding-inset_2w_nl", "片引き", "インセット", "2方枠"),
    row("sliding-inset_2w_l", "片引き", "インセット", "2方枠 表示錠付き"),
    row("sliding-inset_3w_nl", "片引き", "インセット", "3方枠"),
    row("sliding-inset_3w_l", "片引き", "インセット", "3方枠 表示錠付き"),
    row("sliding-outset_2w_nl", "片引き", "アウトセット", "2方枠"),
    row("sliding-outset_2w_l", "片引き", "アウトセット", "2方枠 表示錠付き"),
    row("sliding-outset_2w_c", "片引き", "アウトセット", "2方枠 入隅"),
    row("sliding-outset_2w_cl", "片引き", "アウトセット", "2方枠 入隅表示錠付き"),
    row("sliding-outset_3w_nl", "片引き", "アウトセット", "3方枠"),
    row("sliding-outset_3w_l", "片引き", "アウトセット", "3方枠 表示錠付き"),
    row("sliding-outset_3w_c", "片引き", "アウトセット", "3方枠 入隅"),
    row("sliding-outset_3w_cl", "片引き", "アウトセット", "3方枠 入隅表示錠付き"),
    row("sliding-hikikomi_3w_nl", "片引き", "引込み戸", "3方枠"),
    row("sliding-2_3w_nl", "引き違い", "2枚引き違い", "3方枠"),
    row("sliding-3_3w_nl", "引き違い", "3枚引き違い", "3方枠"),
    row("sliding-4_3w_nl", "引き違い", "4枚引き違い", "3方枠"),
    row("sliding-kata-2_L", "引き違い", "2枚片引き", "左勝手"),
    row("sliding-kata-2_R", "引き違い", "2枚片引き", "右勝手"),
    row("sliding-kata-3_L", "引き違い", "3枚片引き", "左勝手"),
    row("sliding-kata-3_R", "引き違い", "3枚片引き", "右勝手"),
    row("double_w73.5", "両開き", "", "W73.5"),
    row("double_w120", "両開き", "", "W120"),
    row("folding-2_3w_nl", "折戸", "2枚折戸", "3方枠"),
    row("folding-4_3w_nl", "折戸", "4枚折戸", "3方枠"),
    row("folding-6_3w_nl", "折戸", "6枚折戸", "3方枠"),
    row("folding-8_3w_nl", "折戸", "8枚折戸", "3方枠"),
    row("hinged-storage_3w_nl", "片開き物入れ", "", "3方枠"),
];

/// Matrix keys missing from `matrix` compared to the full vocabulary.
/// Empty means the table covers every sellable variant.
pub fn missing_matrix_keys(matrix: &pitta_shared::models::MatrixPrices) -> Vec<&'static str> {
    MATRIX_ROWS
        .iter()
        .filter(|r| !matrix.contains_key(r.key))
        .map(|r| r.key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitta_shared::models::AppSettings;

    fn make_config(door_type: DoorType) -> DoorConfiguration {
        DoorConfiguration {
            door_type,
            ..DoorConfiguration::default()
        }
    }

    #[test]
    fn test_hinged_keys() {
        let mut c = make_config(DoorType::Hinged);
        c.frame_type = FrameType::ThreeWay;
        c.lock = LockId::DisplayLock;
        assert_eq!(build_matrix_key(&c), "hinged_3w_l");
        c.lock = LockId::None;
        assert_eq!(build_matrix_key(&c), "hinged_3w_nl");
        c.frame_type = FrameType::TwoWay;
        assert_eq!(build_matrix_key(&c), "hinged_2w_nl");
    }

    #[test]
    fn test_outset_corner_variants() {
        let mut c = make_config(DoorType::SlidingOutset);
        c.frame_type = FrameType::ThreeWay;
        c.width = 77.8;
        assert_eq!(build_matrix_key(&c), "sliding-outset_3w_nl");
        c.width = 77.81; // just past the corner threshold
        assert_eq!(build_matrix_key(&c), "sliding-outset_3w_c");
        c.lock = LockId::DisplayLock;
        assert_eq!(build_matrix_key(&c), "sliding-outset_3w_cl");
        c.width = 77.8;
        assert_eq!(build_matrix_key(&c), "sliding-outset_3w_l");
    }

    #[test]
    fn test_pinned_families_ignore_two_way_frame() {
        for dt in [
            DoorType::Sliding2,
            DoorType::Folding4,
            DoorType::HingedStorage,
            DoorType::SlidingHikikomi,
        ] {
            let mut c = make_config(dt);
            c.frame_type = FrameType::TwoWay;
            let key = build_matrix_key(&c);
            assert!(key.contains("_3w_"), "{dt} produced {key}");
        }
    }

    #[test]
    fn test_kata_handedness() {
        let mut c = make_config(DoorType::SlidingKata2);
        c.hinge_side = HingeSide::Left;
        assert_eq!(build_matrix_key(&c), "sliding-kata-2_L");
        c.hinge_side = HingeSide::Right;
        assert_eq!(build_matrix_key(&c), "sliding-kata-2_R");
    }

    #[test]
    fn test_double_literal_widths_only() {
        let mut c = make_config(DoorType::Double);
        c.width = 73.5;
        assert_eq!(build_matrix_key(&c), "double_w73.5");
        c.width = 120.0;
        assert_eq!(build_matrix_key(&c), "double_w120");
        c.width = 90.0;
        assert_eq!(build_matrix_key(&c), "");
    }

    #[test]
    fn test_storage_and_material_never_keyed() {
        for dt in [
            DoorType::Storage80,
            DoorType::Storage200Full,
            DoorType::MaterialSkirting,
            DoorType::Unselected,
        ] {
            assert_eq!(build_matrix_key(&make_config(dt)), "");
        }
    }

    /// Every reachable non-empty key is in the vocabulary and the
    /// seeded matrix; every vocabulary key is reachable.
    #[test]
    fn test_key_space_totality() {
        let settings = AppSettings::default();
        let mut reachable = std::collections::HashSet::new();

        for &dt in DoorType::all_leaves() {
            for frame_type in [FrameType::TwoWay, FrameType::ThreeWay] {
                for lock in [LockId::None, LockId::DisplayLock] {
                    for hinge_side in [HingeSide::Left, HingeSide::Right] {
                        for width in [43.5, 73.5, 77.8, 77.81, 120.0, 164.5, 242.0] {
                            let c = DoorConfiguration {
                                door_type: dt,
                                frame_type,
                                lock,
                                hinge_side,
                                width,
                                ..DoorConfiguration::default()
                            };
                            let key = build_matrix_key(&c);
                            if key.is_empty() {
                                continue;
                            }
                            assert!(
                                settings.matrix_prices.contains_key(&key),
                                "key {key} not in seeded matrix"
                            );
                            assert!(
                                MATRIX_ROWS.iter().any(|r| r.key == key),
                                "key {key} not in vocabulary"
                            );
                            reachable.insert(key);
                        }
                    }
                }
            }
        }

        for row in MATRIX_ROWS {
            assert!(reachable.contains(row.key), "vocabulary key {} unreachable", row.key);
        }
    }

    #[test]
    fn test_missing_matrix_keys() {
        let settings = AppSettings::default();
        assert!(missing_matrix_keys(&settings.matrix_prices).is_empty());

        let mut pruned = settings.matrix_prices.clone();
        pruned.remove("double_w120");
        assert_eq!(missing_matrix_keys(&pruned), vec!["double_w120"]);
    }
}
