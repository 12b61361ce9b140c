//! Door configuration model
//!
//! `DoorType` is a closed enum over every selectable family. Family
//! capabilities (glass, handle, lock, frame behavior, preset sizes) are
//! static data on [`FamilyTraits`] rather than string-prefix checks
//! scattered across the engine — the normalizer, the price resolver and
//! the deviation checker all read the same table.

use serde::{Deserialize, Serialize};

// ============================================================================
// Option id enums
// ============================================================================

/// Door color (塗装色)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    /// ピュアホワイト
    #[default]
    Ww,
    /// ライトグレー
    Lg,
    /// ダークグレー
    Dg,
    /// コンフォートオーク
    Co,
    /// グレージュアッシュ
    Ga,
    /// プレシャスウォールナット
    Pw,
}

impl ColorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ww => "ww",
            Self::Lg => "lg",
            Self::Dg => "dg",
            Self::Co => "co",
            Self::Ga => "ga",
            Self::Pw => "pw",
        }
    }
}

/// Handle hardware
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HandleId {
    #[default]
    SatinNickel,
    White,
    Black,
}

impl HandleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SatinNickel => "satin-nickel",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// Glass panel style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlassStyleId {
    #[default]
    None,
    Clear,
    Frosted,
}

impl GlassStyleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Clear => "clear",
            Self::Frosted => "frosted",
        }
    }
}

/// Lock hardware (表示錠)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LockId {
    #[default]
    None,
    DisplayLock,
}

impl LockId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::DisplayLock => "display-lock",
        }
    }
}

/// Frame type (2方枠 / 3方枠)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum FrameType {
    #[default]
    TwoWay,
    ThreeWay,
}

impl FrameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoWay => "twoWay",
            Self::ThreeWay => "threeWay",
        }
    }
}

/// Handedness (勝手) for handed sliding and storage variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    Left,
    #[default]
    Right,
}

// ============================================================================
// Door families
// ============================================================================

/// Coarse family category. Drives list partitioning (WD/SB/造作材
/// numbering), duplicate detection and pricing shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyCategory {
    /// Ordinary doors (WD)
    Door,
    /// 玄関収納 units (SB), width-band priced
    Storage,
    /// 造作材, unit price × count
    Material,
}

/// Selectable door family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DoorType {
    #[default]
    Unselected,
    /// 片開き
    Hinged,
    /// 片開き物入
    HingedStorage,
    /// 片引きインセット
    SlidingInset,
    /// アウトセット
    SlidingOutset,
    /// 引込み戸
    SlidingHikikomi,
    /// 2枚引き違い
    #[serde(rename = "sliding-2")]
    Sliding2,
    /// 3枚引き違い
    #[serde(rename = "sliding-3")]
    Sliding3,
    /// 4枚引き違い
    #[serde(rename = "sliding-4")]
    Sliding4,
    /// 2枚片引き
    #[serde(rename = "sliding-kata-2")]
    SlidingKata2,
    /// 3枚片引き
    #[serde(rename = "sliding-kata-3")]
    SlidingKata3,
    /// 両開き戸
    Double,
    /// 玄関収納フロアタイプ
    #[serde(rename = "storage-80")]
    Storage80,
    /// 玄関収納セパレート
    StorageSeparate,
    /// 玄関収納L型
    #[serde(rename = "storage-200-l")]
    Storage200L,
    /// 玄関収納コの字型
    #[serde(rename = "storage-200-u")]
    Storage200U,
    /// 玄関収納トール
    #[serde(rename = "storage-200-full")]
    Storage200Full,
    #[serde(rename = "folding-2")]
    Folding2,
    #[serde(rename = "folding-4")]
    Folding4,
    #[serde(rename = "folding-6")]
    Folding6,
    #[serde(rename = "folding-8")]
    Folding8,
    /// スリム巾木
    MaterialSkirting,
    /// スリムコーナー巾木
    MaterialCornerSkirting,
    /// 窓台
    MaterialWindowSill,
}

/// Per-family capability flags and size presets.
///
/// One row per family; the normalizer's cascade, the matrix key builder
/// and the checker's custom-size rule are all table lookups over this.
#[derive(Debug, Clone, Copy)]
pub struct FamilyTraits {
    pub category: FamilyCategory,
    /// Family accepts a glass panel
    pub glass: bool,
    /// Family shows (and deviation-checks) a handle. Multi-panel
    /// sliding doors keep their handle; folding doors do not.
    pub visible_handle: bool,
    /// Family accepts a lock
    pub lockable: bool,
    /// Normalizer forces frameType = threeWay when entering the family
    pub forces_three_way: bool,
    /// Matrix key frame token is pinned to `3w` regardless of the
    /// configured frame. Superset of `forces_three_way` (includes the
    /// pocket door, which keeps a free frame field in the UI).
    pub pinned_three_way_key: bool,
    /// Canonical width snapped on entering the family, cm
    pub canonical_width: Option<f64>,
    /// All orderable preset widths, cm
    pub preset_widths: &'static [f64],
    /// All orderable preset heights, cm
    pub preset_heights: &'static [f64],
}

const HEIGHTS_STANDARD: &[f64] = &[200.0, 220.0, 240.0];
const HEIGHTS_WITH_LOW: &[f64] = &[90.0, 120.0, 200.0, 220.0, 240.0];
const WIDTHS_STORAGE: &[f64] = &[80.0, 120.0, 160.0, 200.0];

macro_rules! traits_row {
    (
        $category:expr, glass: $glass:expr, handle: $handle:expr,
        lock: $lock:expr, forces3w: $f3:expr, pinned3w: $p3:expr,
        canonical: $cw:expr, widths: $ws:expr, heights: $hs:expr
    ) => {
        FamilyTraits {
            category: $category,
            glass: $glass,
            visible_handle: $handle,
            lockable: $lock,
            forces_three_way: $f3,
            pinned_three_way_key: $p3,
            canonical_width: $cw,
            preset_widths: $ws,
            preset_heights: $hs,
        }
    };
}

impl DoorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unselected => "unselected",
            Self::Hinged => "hinged",
            Self::HingedStorage => "hinged-storage",
            Self::SlidingInset => "sliding-inset",
            Self::SlidingOutset => "sliding-outset",
            Self::SlidingHikikomi => "sliding-hikikomi",
            Self::Sliding2 => "sliding-2",
            Self::Sliding3 => "sliding-3",
            Self::Sliding4 => "sliding-4",
            Self::SlidingKata2 => "sliding-kata-2",
            Self::SlidingKata3 => "sliding-kata-3",
            Self::Double => "double",
            Self::Storage80 => "storage-80",
            Self::StorageSeparate => "storage-separate",
            Self::Storage200L => "storage-200-l",
            Self::Storage200U => "storage-200-u",
            Self::Storage200Full => "storage-200-full",
            Self::Folding2 => "folding-2",
            Self::Folding4 => "folding-4",
            Self::Folding6 => "folding-6",
            Self::Folding8 => "folding-8",
            Self::MaterialSkirting => "material-skirting",
            Self::MaterialCornerSkirting => "material-corner-skirting",
            Self::MaterialWindowSill => "material-window-sill",
        }
    }

    pub fn category(&self) -> FamilyCategory {
        self.traits().category
    }

    pub fn is_storage(&self) -> bool {
        self.category() == FamilyCategory::Storage
    }

    pub fn is_material(&self) -> bool {
        self.category() == FamilyCategory::Material
    }

    /// Capability row for this family
    pub fn traits(&self) -> &'static FamilyTraits {
        use FamilyCategory::*;
        match self {
            Self::Unselected => &traits_row!(
                Door, glass: false, handle: true, lock: false,
                forces3w: false, pinned3w: false, canonical: None,
                widths: &[65.0, 70.0, 75.0, 80.0], heights: HEIGHTS_STANDARD
            ),
            Self::Hinged => &traits_row!(
                Door, glass: true, handle: true, lock: true,
                forces3w: false, pinned3w: false, canonical: Some(77.8),
                widths: &[65.0, 73.5, 75.5, 77.8, 85.0], heights: HEIGHTS_STANDARD
            ),
            Self::HingedStorage => &traits_row!(
                Door, glass: false, handle: false, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(43.5),
                widths: &[43.5], heights: HEIGHTS_WITH_LOW
            ),
            Self::SlidingInset => &traits_row!(
                Door, glass: true, handle: true, lock: true,
                forces3w: false, pinned3w: false, canonical: Some(164.5),
                widths: &[145.0, 164.5], heights: HEIGHTS_STANDARD
            ),
            Self::SlidingOutset => &traits_row!(
                Door, glass: true, handle: true, lock: true,
                forces3w: false, pinned3w: false, canonical: Some(77.8),
                widths: &[77.8, 77.81], heights: HEIGHTS_STANDARD
            ),
            Self::SlidingHikikomi => &traits_row!(
                Door, glass: true, handle: true, lock: true,
                forces3w: false, pinned3w: true, canonical: Some(164.5),
                widths: &[145.0, 164.5], heights: HEIGHTS_STANDARD
            ),
            Self::Sliding2 => &traits_row!(
                Door, glass: false, handle: true, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(164.5),
                widths: &[145.0, 164.5], heights: HEIGHTS_STANDARD
            ),
            Self::Sliding3 => &traits_row!(
                Door, glass: false, handle: true, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(242.0),
                widths: &[242.0], heights: HEIGHTS_STANDARD
            ),
            Self::Sliding4 => &traits_row!(
                Door, glass: false, handle: true, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(324.4),
                widths: &[324.4], heights: HEIGHTS_STANDARD
            ),
            Self::SlidingKata2 => &traits_row!(
                Door, glass: false, handle: true, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(243.1),
                widths: &[243.1], heights: HEIGHTS_STANDARD
            ),
            Self::SlidingKata3 => &traits_row!(
                Door, glass: false, handle: true, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(321.5),
                widths: &[321.5], heights: HEIGHTS_STANDARD
            ),
            Self::Double => &traits_row!(
                Door, glass: false, handle: false, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(73.5),
                widths: &[73.5, 120.0], heights: HEIGHTS_WITH_LOW
            ),
            Self::Storage80 => &traits_row!(
                Storage, glass: false, handle: false, lock: false,
                forces3w: false, pinned3w: false, canonical: None,
                widths: WIDTHS_STORAGE, heights: HEIGHTS_STANDARD
            ),
            Self::StorageSeparate => &traits_row!(
                Storage, glass: false, handle: false, lock: false,
                forces3w: false, pinned3w: false, canonical: None,
                widths: WIDTHS_STORAGE, heights: HEIGHTS_STANDARD
            ),
            Self::Storage200L => &traits_row!(
                Storage, glass: false, handle: false, lock: false,
                forces3w: false, pinned3w: false, canonical: None,
                widths: WIDTHS_STORAGE, heights: HEIGHTS_STANDARD
            ),
            Self::Storage200U => &traits_row!(
                Storage, glass: false, handle: false, lock: false,
                forces3w: false, pinned3w: false, canonical: None,
                widths: WIDTHS_STORAGE, heights: HEIGHTS_STANDARD
            ),
            Self::Storage200Full => &traits_row!(
                Storage, glass: false, handle: false, lock: false,
                forces3w: false, pinned3w: false, canonical: None,
                widths: WIDTHS_STORAGE, heights: HEIGHTS_STANDARD
            ),
            Self::Folding2 => &traits_row!(
                Door, glass: false, handle: false, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(73.5),
                widths: &[73.5], heights: HEIGHTS_STANDARD
            ),
            Self::Folding4 => &traits_row!(
                Door, glass: false, handle: false, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(164.5),
                widths: &[120.0, 164.5], heights: HEIGHTS_STANDARD
            ),
            Self::Folding6 => &traits_row!(
                Door, glass: false, handle: false, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(245.1),
                widths: &[245.1], heights: HEIGHTS_STANDARD
            ),
            Self::Folding8 => &traits_row!(
                Door, glass: false, handle: false, lock: false,
                forces3w: true, pinned3w: true, canonical: Some(325.8),
                widths: &[325.8], heights: HEIGHTS_STANDARD
            ),
            Self::MaterialSkirting | Self::MaterialCornerSkirting | Self::MaterialWindowSill => {
                &traits_row!(
                    Material, glass: false, handle: false, lock: false,
                    forces3w: false, pinned3w: false, canonical: None,
                    widths: &[], heights: HEIGHTS_STANDARD
                )
            }
        }
    }

    /// Every selectable leaf family, in catalog order. Used to
    /// enumerate the reachable matrix key space.
    pub fn all_leaves() -> &'static [DoorType] {
        &[
            Self::Hinged,
            Self::SlidingInset,
            Self::SlidingOutset,
            Self::SlidingHikikomi,
            Self::Sliding2,
            Self::Sliding3,
            Self::SlidingKata2,
            Self::SlidingKata3,
            Self::Sliding4,
            Self::Double,
            Self::Folding2,
            Self::Folding4,
            Self::Folding6,
            Self::Folding8,
            Self::HingedStorage,
            Self::Storage80,
            Self::StorageSeparate,
            Self::Storage200L,
            Self::Storage200U,
            Self::Storage200Full,
            Self::MaterialSkirting,
            Self::MaterialCornerSkirting,
            Self::MaterialWindowSill,
        ]
    }
}

impl std::fmt::Display for DoorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Configuration aggregate
// ============================================================================

/// The mutable working state of one door being configured.
///
/// Edited field-by-field through the normalizer, which keeps the
/// combination of family, size, frame and hardware valid at all times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoorConfiguration {
    pub door_type: DoorType,
    pub color: ColorId,
    pub handle: HandleId,
    pub glass_style: GlassStyleId,
    pub lock: LockId,
    /// Width in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    /// Quantity, used by material families only
    pub count: i32,
    pub hinge_side: HingeSide,
    pub frame_type: FrameType,
}

impl Default for DoorConfiguration {
    fn default() -> Self {
        Self {
            door_type: DoorType::Unselected,
            color: ColorId::Ww,
            handle: HandleId::SatinNickel,
            glass_style: GlassStyleId::None,
            lock: LockId::None,
            width: 80.0,
            height: 220.0,
            count: 1,
            hinge_side: HingeSide::Right,
            frame_type: FrameType::TwoWay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_type_wire_names() {
        let json = serde_json::to_string(&DoorType::SlidingKata2).unwrap();
        assert_eq!(json, "\"sliding-kata-2\"");
        let json = serde_json::to_string(&DoorType::Storage200Full).unwrap();
        assert_eq!(json, "\"storage-200-full\"");
        let back: DoorType = serde_json::from_str("\"hinged-storage\"").unwrap();
        assert_eq!(back, DoorType::HingedStorage);
    }

    #[test]
    fn test_as_str_round_trips_through_serde() {
        for dt in DoorType::all_leaves() {
            let json = serde_json::to_string(dt).unwrap();
            assert_eq!(json, format!("\"{}\"", dt.as_str()));
        }
    }

    #[test]
    fn test_frame_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&FrameType::ThreeWay).unwrap(),
            "\"threeWay\""
        );
    }

    #[test]
    fn test_category_partition() {
        assert_eq!(DoorType::Hinged.category(), FamilyCategory::Door);
        assert!(DoorType::Storage200L.is_storage());
        assert!(DoorType::MaterialSkirting.is_material());
        assert!(!DoorType::HingedStorage.is_storage());
    }

    #[test]
    fn test_pinned_set_is_superset_of_forced_set() {
        for dt in DoorType::all_leaves() {
            let t = dt.traits();
            if t.forces_three_way {
                assert!(t.pinned_three_way_key, "{dt} forced but not pinned");
            }
        }
        // The pocket door is the one family pinned without being forced.
        let t = DoorType::SlidingHikikomi.traits();
        assert!(t.pinned_three_way_key && !t.forces_three_way);
    }

    #[test]
    fn test_glass_and_lock_capability_match() {
        for dt in DoorType::all_leaves() {
            let t = dt.traits();
            assert_eq!(t.glass, t.lockable, "{dt}");
        }
    }

    #[test]
    fn test_default_configuration() {
        let c = DoorConfiguration::default();
        assert_eq!(c.door_type, DoorType::Unselected);
        assert_eq!(c.width, 80.0);
        assert_eq!(c.height, 220.0);
        assert_eq!(c.frame_type, FrameType::TwoWay);
        assert_eq!(c.hinge_side, HingeSide::Right);
    }
}
